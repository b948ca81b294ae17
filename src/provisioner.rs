// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered creation of the api server resources.

use crate::constants::{deployment, ingress, service};
use crate::error::{ProvisionError, Result};
use crate::kubernetes::{to_dynamic, ObjectCreator};
use crate::manifests;
use kube::api::DynamicObject;
use kube::discovery::ApiResource;
use kube::ResourceExt;
use std::fmt;
use tracing::{info, instrument};

/// One create call of the provisioning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Deployment,
    Service,
    NodePortService,
    Ingress,
}

impl Step {
    /// Steps in the order they are executed
    pub const ALL: [Step; 4] = [
        Step::Deployment,
        Step::Service,
        Step::NodePortService,
        Step::Ingress,
    ];

    /// Name of the object this step creates
    pub fn object_name(self) -> &'static str {
        match self {
            Step::Deployment => deployment::NAME,
            Step::Service => service::CLUSTER_IP_NAME,
            Step::NodePortService => service::NODE_PORT_NAME,
            Step::Ingress => ingress::NAME,
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Step::Deployment => 4,
            Step::Service | Step::NodePortService => 5,
            Step::Ingress => 6,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Step::Deployment => "Deployment",
            Step::Service => "Service",
            Step::NodePortService => "Nodeport",
            Step::Ingress => "Ingress",
        }
    }

    /// Console line printed before the create call
    fn creating_message(self, name: &str) -> String {
        match self {
            Step::Ingress => format!("creating {} {}", self.title(), name),
            _ => format!("creating {} {}", self, name),
        }
    }

    /// Console line printed once the API server confirmed the object
    fn created_message(self, name: &str) -> String {
        format!("{} {} created", self.title(), name)
    }

    fn manifest(self) -> std::result::Result<(ApiResource, DynamicObject), serde_json::Error> {
        match self {
            Step::Deployment => to_dynamic(&manifests::api_server_deployment()),
            Step::Service => to_dynamic(&manifests::cluster_ip_service()),
            Step::NodePortService => to_dynamic(&manifests::node_port_service()),
            Step::Ingress => to_dynamic(&manifests::server_ingress()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::Deployment => "deployment",
            Step::Service => "service",
            Step::NodePortService => "nodeport",
            Step::Ingress => "ingress",
        };
        f.write_str(label)
    }
}

/// An object the API server confirmed as created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub step: Step,
    pub name: String,
}

/// Creates the deployment, both services and the ingress, strictly in that order.
///
/// The first failure stops the run; objects created before it are left in place.
pub struct Provisioner<C> {
    creator: C,
    namespace: String,
}

impl<C: ObjectCreator> Provisioner<C> {
    pub fn new(creator: C, namespace: impl Into<String>) -> Self {
        Self {
            creator,
            namespace: namespace.into(),
        }
    }

    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn run(&self) -> Result<Vec<Created>> {
        let mut created = Vec::with_capacity(Step::ALL.len());
        for step in Step::ALL {
            created.push(self.create(step).await?);
        }

        info!("Created {} resources in namespace {}", created.len(), self.namespace);
        Ok(created)
    }

    async fn create(&self, step: Step) -> Result<Created> {
        let (resource, object) = step.manifest().map_err(|source| ProvisionError::EncodeError {
            step,
            name: step.object_name().to_string(),
            source,
        })?;
        let name = object.name_any();

        println!("{}", step.creating_message(&name));

        let result = self
            .creator
            .create(&resource, &self.namespace, &object)
            .await
            .map_err(|source| ProvisionError::CreateError {
                step,
                name: name.clone(),
                source,
            })?;

        let created_name = result.name_any();
        println!("{}", step.created_message(&created_name));

        Ok(Created {
            step,
            name: created_name,
        })
    }
}
