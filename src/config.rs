// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::Cli;
use crate::error::{ProvisionError, Result};
use std::env;
use std::path::PathBuf;

/// Provisioner configuration resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file to try before falling back to in-cluster configuration
    pub kubeconfig: Option<PathBuf>,
    /// Namespace the resources are created in
    pub namespace: String,
}

impl Config {
    /// Build the configuration from parsed command-line arguments
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::new(cli.kubeconfig, cli.namespace, env::var_os("HOME").map(PathBuf::from))
    }

    fn new(
        kubeconfig: Option<PathBuf>,
        namespace: String,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        if namespace.is_empty() {
            return Err(ProvisionError::InvalidConfig(
                "namespace must not be empty".to_string(),
            ));
        }

        // An explicitly empty path disables the kubeconfig lookup
        let kubeconfig = match kubeconfig {
            Some(path) if path.as_os_str().is_empty() => None,
            Some(path) => Some(path),
            None => default_kubeconfig(home),
        };

        Ok(Config {
            kubeconfig,
            namespace,
        })
    }
}

/// `$HOME/.kube/config`, when a home directory is known
fn default_kubeconfig(home: Option<PathBuf>) -> Option<PathBuf> {
    home.filter(|h| !h.as_os_str().is_empty())
        .map(|h| h.join(".kube").join("config"))
}
