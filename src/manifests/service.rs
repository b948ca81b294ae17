// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::app_labels;
use crate::constants::{service, PROTOCOL_TCP, SERVER_PORT};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;

/// Service with the cluster default type (ClusterIP) in front of the api server pods
pub fn cluster_ip_service() -> Service {
    build_service(service::CLUSTER_IP_NAME, None, None)
}

/// Service exposing the api server on a fixed port of every node
pub fn node_port_service() -> Service {
    build_service(
        service::NODE_PORT_NAME,
        Some(service::NODE_PORT_TYPE),
        Some(service::NODE_PORT),
    )
}

fn build_service(name: &str, type_: Option<&str>, node_port: Option<i32>) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(app_labels()),
            type_: type_.map(str::to_string),
            ports: Some(vec![ServicePort {
                protocol: Some(PROTOCOL_TCP.to_string()),
                port: SERVER_PORT,
                target_port: Some(IntOrString::Int(SERVER_PORT)),
                node_port,
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
