// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{anyhow, Result};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kube_provision::cli::Cli;
use kube_provision::config::Config;
use kube_provision::error::ProvisionError;
use kube_provision::kubernetes::{build_client, resolve_config, DynamicClient};
use kube_provision::provisioner::Provisioner;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing on stderr, stdout carries the status lines
    if let Err(e) = init_tracing() {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(Cli::parse_args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Provisioning failed: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    info!(
        "Configuration loaded: kubeconfig={:?}, namespace={}",
        config.kubeconfig, config.namespace
    );

    let kube_config = resolve_config(config.kubeconfig.as_deref()).await?;
    let client = build_client(kube_config)?;
    info!("Connected to Kubernetes cluster");

    let provisioner = Provisioner::new(DynamicClient::new(client), config.namespace);
    provisioner.run().await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Exit status for a failed run, 1 for anything outside the known failure classes
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ProvisionError>()
        .map_or(1, ProvisionError::exit_code)
}
