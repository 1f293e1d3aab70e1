// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use tracing::info;

use nginx_manifests::config::{Action, Config};
use nginx_manifests::harness::{apply_all, delete_all, status_all, Registry};
use nginx_manifests::manifests::ManifestSet;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: action={}, kubeconfig={}",
        config.action,
        config.kubeconfig_path.display()
    );

    // Missing or malformed credentials end the run inside Registry::setup
    let report = match config.action {
        Action::Render => {
            print!("{}", ManifestSet::nginx().render_yaml()?);
            return Ok(());
        }
        Action::Apply => apply_all(&Registry::setup(&config).await?).await,
        Action::Delete => delete_all(&Registry::setup(&config).await?).await,
        Action::Status => return check_status(&Registry::setup(&config).await?).await,
    };

    if !report.is_success() {
        bail!("{} {}", config.action, report.summary());
    }

    Ok(())
}

async fn check_status(registry: &Registry) -> Result<()> {
    for (label, result) in status_all(registry).await {
        if let Err(e) = result {
            bail!("Status check for {} failed: {}", label, e);
        }
    }
    Ok(())
}
