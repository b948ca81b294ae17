// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed manifests for the resources the provisioner creates.

pub mod deployment;
pub mod ingress;
pub mod service;

use crate::constants::labels;
use std::collections::BTreeMap;

pub use deployment::api_server_deployment;
pub use ingress::server_ingress;
pub use service::{cluster_ip_service, node_port_service};

/// The `app=server` label set selecting the api server pods
pub fn app_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(labels::APP_KEY.to_string(), labels::APP_VALUE.to_string())])
}
