// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The nginx manifest set: a Deployment, Service, ConfigMap and Secret built
//! as literal `k8s-openapi` objects.

pub mod config_map;
pub mod deployment;
pub mod secret;
pub mod service;

pub use config_map::{config_map, NGINX_CONF};
pub use deployment::deployment;
pub use secret::secret;
pub use service::service;

use crate::constants::names;
use crate::error::{HarnessError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Secret, Service};
use std::collections::BTreeMap;
use std::fmt;

/// Port the nginx container listens on and the Service targets
pub const CONTAINER_PORT: i32 = 8080;

/// `app=nginx`, shared by object labels, the pod template and both selectors
pub fn app_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(
        names::APP_LABEL_KEY.to_string(),
        names::APP_LABEL_VALUE.to_string(),
    )])
}

/// The four objects, built once and never mutated afterwards
#[derive(Debug, Clone)]
pub struct ManifestSet {
    pub config_map: ConfigMap,
    pub secret: Secret,
    pub deployment: Deployment,
    pub service: Service,
}

impl Default for ManifestSet {
    fn default() -> Self {
        Self::nginx()
    }
}

/// Kind of object an env var reads a key from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    ConfigMap,
    Secret,
}

/// An env var in the workload that reads `key` from the named object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRef {
    pub env_var: String,
    pub source: KeySource,
    pub object: String,
    pub key: String,
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            KeySource::ConfigMap => "configmap",
            KeySource::Secret => "secret",
        };
        write!(f, "{} -> {}/{} key '{}'", self.env_var, kind, self.object, self.key)
    }
}

impl ManifestSet {
    pub fn nginx() -> Self {
        Self {
            config_map: config_map(),
            secret: secret(),
            deployment: deployment(),
            service: service(),
        }
    }

    /// All env var key references made by the workload's containers
    pub fn key_refs(&self) -> Vec<KeyRef> {
        let containers = self
            .deployment
            .spec
            .as_ref()
            .and_then(|s| s.template.spec.as_ref())
            .map(|p| p.containers.as_slice())
            .unwrap_or_default();

        containers
            .iter()
            .flat_map(|c| c.env.iter().flatten())
            .filter_map(|env| {
                let from = env.value_from.as_ref()?;
                if let Some(r) = &from.config_map_key_ref {
                    Some(KeyRef {
                        env_var: env.name.clone(),
                        source: KeySource::ConfigMap,
                        object: r.name.clone(),
                        key: r.key.clone(),
                    })
                } else {
                    from.secret_key_ref.as_ref().map(|r| KeyRef {
                        env_var: env.name.clone(),
                        source: KeySource::Secret,
                        object: r.name.clone(),
                        key: r.key.clone(),
                    })
                }
            })
            .collect()
    }

    /// Key references that point at a ConfigMap or Secret in this set whose
    /// literal does not carry the key. References to objects outside the set
    /// are not reported.
    pub fn missing_key_refs(&self) -> Vec<KeyRef> {
        self.key_refs()
            .into_iter()
            .filter(|r| match r.source {
                KeySource::ConfigMap => {
                    self.config_map.metadata.name.as_deref() == Some(r.object.as_str())
                        && !self.config_map_has_key(&r.key)
                }
                KeySource::Secret => {
                    self.secret.metadata.name.as_deref() == Some(r.object.as_str())
                        && !self.secret_has_key(&r.key)
                }
            })
            .collect()
    }

    fn config_map_has_key(&self, key: &str) -> bool {
        let cm = &self.config_map;
        cm.data.as_ref().is_some_and(|d| d.contains_key(key))
            || cm.binary_data.as_ref().is_some_and(|d| d.contains_key(key))
    }

    fn secret_has_key(&self, key: &str) -> bool {
        let s = &self.secret;
        s.string_data.as_ref().is_some_and(|d| d.contains_key(key))
            || s.data.as_ref().is_some_and(|d| d.contains_key(key))
    }

    /// Render the set as a multi-document YAML stream in apply order
    pub fn render_yaml(&self) -> Result<String> {
        let docs = [
            to_yaml(&self.config_map)?,
            to_yaml(&self.secret)?,
            to_yaml(&self.deployment)?,
            to_yaml(&self.service)?,
        ];
        Ok(docs.join("---\n"))
    }
}

fn to_yaml<T: serde::Serialize>(object: &T) -> Result<String> {
    serde_yaml::to_string(object).map_err(|e| HarnessError::RenderError(e.to_string()))
}
