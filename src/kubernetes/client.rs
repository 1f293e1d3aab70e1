// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation and kubeconfig utilities

use crate::error::{HarnessError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Read and parse a kubeconfig file
pub fn load_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        HarnessError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_yaml::from_str(&contents).map_err(|e| {
        HarnessError::KubeconfigError(format!(
            "Failed to parse kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

/// Create a Kubernetes client from the kubeconfig file at `path`
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn create_client(path: &Path) -> Result<Client> {
    let kubeconfig = load_kubeconfig(path)?;
    debug!(
        "Parsed kubeconfig with current context {:?}",
        kubeconfig.current_context
    );

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                HarnessError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| HarnessError::KubeconfigError(format!("Failed to create client: {}", e)))
}
