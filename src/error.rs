// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::provisioner::Step;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "Failed to resolve cluster configuration (kubeconfig: {kubeconfig}; in-cluster: {in_cluster})"
    )]
    ConfigResolution {
        kubeconfig: String,
        in_cluster: String,
    },

    #[error("Failed to build dynamic client: {0}")]
    ClientError(#[source] kube::Error),

    #[error("Failed to encode {step} {name}: {source}")]
    EncodeError {
        step: Step,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create {step} {name}: {source}")]
    CreateError {
        step: Step,
        name: String,
        #[source]
        source: kube::Error,
    },
}

impl ProvisionError {
    /// Process exit status for this failure class
    pub fn exit_code(&self) -> u8 {
        match self {
            ProvisionError::InvalidConfig(_) | ProvisionError::ConfigResolution { .. } => 2,
            ProvisionError::ClientError(_) => 3,
            ProvisionError::EncodeError { step, .. } | ProvisionError::CreateError { step, .. } => {
                step.exit_code()
            }
        }
    }

    /// The step that failed, if the failure happened while creating resources
    pub fn step(&self) -> Option<Step> {
        match self {
            ProvisionError::EncodeError { step, .. } | ProvisionError::CreateError { step, .. } => {
                Some(*step)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
