// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as env_vars, DEFAULT_KUBECONFIG_DIR, DEFAULT_KUBECONFIG_FILE};
use crate::error::{HarnessError, Result as HarnessResult};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What the binary does once the registry is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Apply,
    Delete,
    Status,
    Render,
}

impl FromStr for Action {
    type Err = HarnessError;

    fn from_str(s: &str) -> HarnessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apply" => Ok(Action::Apply),
            "delete" => Ok(Action::Delete),
            "status" => Ok(Action::Status),
            "render" => Ok(Action::Render),
            other => Err(HarnessError::ConfigError(format!(
                "unknown action '{}', expected one of apply, delete, status, render",
                other
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Apply => "apply",
            Action::Delete => "delete",
            Action::Status => "status",
            Action::Render => "render",
        };
        f.write_str(s)
    }
}

/// Harness configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file used to build the client
    pub kubeconfig_path: PathBuf,
    pub action: Action,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let kubeconfig_path =
            resolve_kubeconfig_path(env::var(env_vars::KUBECONFIG).ok(), dirs::home_dir())
                .context("Failed to resolve kubeconfig path")?;

        let action = match env::var(env_vars::ACTION) {
            Ok(value) if !value.trim().is_empty() => value
                .parse::<Action>()
                .with_context(|| format!("Invalid {} value", env_vars::ACTION))?,
            _ => Action::default(),
        };

        Ok(Config {
            kubeconfig_path,
            action,
        })
    }
}

/// Pick the kubeconfig path: a non-empty explicit value wins, otherwise
/// `<home>/.kube/config`.
pub fn resolve_kubeconfig_path(
    explicit: Option<String>,
    home_dir: Option<PathBuf>,
) -> HarnessResult<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let Some(home) = home_dir else {
        return Err(HarnessError::ConfigError(format!(
            "{} is not set and no home directory could be determined",
            env_vars::KUBECONFIG
        )));
    };

    Ok(home.join(DEFAULT_KUBECONFIG_DIR).join(DEFAULT_KUBECONFIG_FILE))
}
