// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::app_labels;
use crate::constants::{deployment, PROTOCOL_TCP, SERVER_PORT};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;

/// Deployment running two replicas of the ecommerce api server
pub fn api_server_deployment() -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(deployment::NAME.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(deployment::REPLICAS),
            selector: LabelSelector {
                match_labels: Some(app_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(app_labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: deployment::CONTAINER_NAME.to_string(),
                        image: Some(deployment::IMAGE.to_string()),
                        ports: Some(vec![ContainerPort {
                            name: Some(deployment::PORT_NAME.to_string()),
                            protocol: Some(PROTOCOL_TCP.to_string()),
                            container_port: SERVER_PORT,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
