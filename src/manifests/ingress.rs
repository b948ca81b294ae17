// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{ingress, service, SERVER_PORT};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use kube::api::ObjectMeta;

/// Ingress routing the login and products paths on the server host to `server-svc`
pub fn server_ingress() -> Ingress {
    let paths = ingress::PATHS
        .iter()
        .map(|path| HTTPIngressPath {
            path: Some(path.to_string()),
            path_type: ingress::PATH_TYPE.to_string(),
            backend: IngressBackend {
                service: Some(IngressServiceBackend {
                    name: service::CLUSTER_IP_NAME.to_string(),
                    port: Some(ServiceBackendPort {
                        number: Some(SERVER_PORT),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            },
        })
        .collect();

    Ingress {
        metadata: ObjectMeta {
            name: Some(ingress::NAME.to_string()),
            ..Default::default()
        },
        spec: Some(IngressSpec {
            rules: Some(vec![IngressRule {
                host: Some(ingress::HOST.to_string()),
                http: Some(HTTPIngressRuleValue { paths }),
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
