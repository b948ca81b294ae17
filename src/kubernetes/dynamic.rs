// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Schema-agnostic object creation.
//!
//! Manifests are built as typed `k8s-openapi` objects and only converted to
//! [`DynamicObject`]s when they are handed to the API server.

use kube::api::{DynamicObject, PostParams};
use kube::discovery::ApiResource;
use kube::{Api, Client, Resource};
use serde::Serialize;
use std::future::Future;
use tracing::{debug, instrument};

/// Capability to create an untyped object in a namespace.
pub trait ObjectCreator {
    fn create(
        &self,
        resource: &ApiResource,
        namespace: &str,
        object: &DynamicObject,
    ) -> impl Future<Output = Result<DynamicObject, kube::Error>> + Send;
}

/// [`ObjectCreator`] backed by a Kubernetes client
#[derive(Clone)]
pub struct DynamicClient {
    client: Client,
}

impl DynamicClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ObjectCreator for DynamicClient {
    #[instrument(skip(self, resource, object), fields(resource = %resource.plural))]
    async fn create(
        &self,
        resource: &ApiResource,
        namespace: &str,
        object: &DynamicObject,
    ) -> Result<DynamicObject, kube::Error> {
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, resource);
        debug!(
            "POST {}/{} {}",
            resource.api_version, resource.plural, namespace
        );
        api.create(&PostParams::default(), object).await
    }
}

/// Convert a typed object into its wire form together with the resource it targets.
pub fn to_dynamic<K>(object: &K) -> Result<(ApiResource, DynamicObject), serde_json::Error>
where
    K: Resource<DynamicType = ()> + Serialize,
{
    let resource = ApiResource::erase::<K>(&());
    let value = serde_json::to_value(object)?;
    let dynamic = serde_json::from_value(value)?;
    Ok((resource, dynamic))
}
