// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster configuration resolution and client creation

use crate::error::{ProvisionError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Resolve the cluster access configuration.
///
/// The kubeconfig file is tried first; on failure (or without a path) the in-cluster
/// service account configuration is used. Failing both is fatal.
#[instrument]
pub async fn resolve_config(kubeconfig: Option<&Path>) -> Result<KConfig> {
    let kubeconfig_error = match kubeconfig {
        Some(path) => match load_kubeconfig(path).await {
            Ok(config) => {
                info!("Using kubeconfig {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!(
                    "Failed to load kubeconfig {}: {}, falling back to in-cluster configuration",
                    path.display(),
                    e
                );
                e
            }
        },
        None => {
            debug!("No kubeconfig path given, using in-cluster configuration");
            "no kubeconfig path given".to_string()
        }
    };

    match KConfig::incluster() {
        Ok(config) => {
            info!("Using in-cluster configuration");
            Ok(config)
        }
        Err(e) => Err(ProvisionError::ConfigResolution {
            kubeconfig: kubeconfig_error,
            in_cluster: e.to_string(),
        }),
    }
}

/// Load a client configuration from a kubeconfig file.
///
/// Relative certificate and key paths are resolved against the kubeconfig's directory.
async fn load_kubeconfig(path: &Path) -> std::result::Result<KConfig, String> {
    let kubeconfig = Kubeconfig::read_from(path)
        .map_err(|e| format!("Failed to read kubeconfig: {}", e))?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| format!("Failed to create config: {}", e))
}

/// Create the Kubernetes client bound to the resolved configuration
pub fn build_client(config: KConfig) -> Result<Client> {
    debug!("Building client for {}", config.cluster_url);
    Client::try_from(config).map_err(ProvisionError::ClientError)
}
