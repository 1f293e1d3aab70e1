// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry of create/delete operations, one entry per resource kind.

use crate::config::Config;
use crate::constants::{labels, NAMESPACE};
use crate::error::Result;
use crate::kubernetes::create_client;
use crate::manifests::ManifestSet;
use futures::future::BoxFuture;
use futures::FutureExt;
use kube::api::{DeleteParams, PostParams};
use kube::core::NamespaceResourceScope;
use kube::{Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{info, instrument};

type Operation<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Apply ordering: config objects first, then the workload that reads them,
/// then the service that routes to it. Deletion runs in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Config,
    Workload,
    Exposure,
}

/// Create/delete operations bound to one literal manifest
pub struct Entry {
    label: &'static str,
    name: String,
    stage: Stage,
    create: Operation<()>,
    delete: Operation<()>,
    exists: Operation<bool>,
}

impl Entry {
    /// Bind operations for `manifest` in the harness namespace
    pub fn new<K>(client: Client, label: &'static str, stage: Stage, manifest: K) -> Self
    where
        K: Resource<Scope = NamespaceResourceScope>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned
            + Send
            + Sync
            + 'static,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(client, NAMESPACE);
        let name = manifest.name_any();
        let manifest = Arc::new(manifest);

        let create: Operation<()> = {
            let api = api.clone();
            Box::new(move || {
                let api = api.clone();
                let manifest = manifest.clone();
                async move {
                    api.create(&PostParams::default(), &manifest).await?;
                    Ok(())
                }
                .boxed()
            })
        };

        let delete: Operation<()> = {
            let api = api.clone();
            let name = name.clone();
            Box::new(move || {
                let api = api.clone();
                let name = name.clone();
                async move {
                    api.delete(&name, &DeleteParams::default()).await?;
                    Ok(())
                }
                .boxed()
            })
        };

        let exists: Operation<bool> = {
            let name = name.clone();
            Box::new(move || {
                let api = api.clone();
                let name = name.clone();
                async move { Ok(api.get_opt(&name).await?.is_some()) }.boxed()
            })
        };

        Self {
            label,
            name,
            stage,
            create,
            delete,
            exists,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Name of the object this entry manages
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub async fn create(&self) -> Result<()> {
        (self.create)().await
    }

    pub async fn delete(&self) -> Result<()> {
        (self.delete)().await
    }

    /// Whether the named object currently exists; not-found maps to `false`
    pub async fn exists(&self) -> Result<bool> {
        (self.exists)().await
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("label", &self.label)
            .field("name", &self.name)
            .field("stage", &self.stage)
            .finish()
    }
}

/// Entries held in apply order
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
    manifests: ManifestSet,
}

impl Registry {
    /// Load the kubeconfig named by `config` and bind the nginx manifest set.
    /// Fails when the kubeconfig is missing or unusable.
    #[instrument(skip(config), fields(kubeconfig = %config.kubeconfig_path.display()))]
    pub async fn setup(config: &Config) -> Result<Self> {
        let client = create_client(&config.kubeconfig_path).await?;
        info!("Connected to Kubernetes cluster");
        Ok(Self::new(client, ManifestSet::nginx()))
    }

    pub fn new(client: Client, manifests: ManifestSet) -> Self {
        let mut entries = vec![
            Entry::new(
                client.clone(),
                labels::CONFIG_MAPS,
                Stage::Config,
                manifests.config_map.clone(),
            ),
            Entry::new(
                client.clone(),
                labels::SECRETS,
                Stage::Config,
                manifests.secret.clone(),
            ),
            Entry::new(
                client.clone(),
                labels::DEPLOYMENTS,
                Stage::Workload,
                manifests.deployment.clone(),
            ),
            Entry::new(
                client,
                labels::SERVICES,
                Stage::Exposure,
                manifests.service.clone(),
            ),
        ];
        // Stable, so entries within a stage keep insertion order
        entries.sort_by_key(Entry::stage);

        Self { entries, manifests }
    }

    /// Entries in apply order
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, label: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn manifests(&self) -> &ManifestSet {
        &self.manifests
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
