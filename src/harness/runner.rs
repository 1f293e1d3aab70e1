// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Apply-all and delete-all over a registry, continuing past failures.

use crate::error::{HarnessError, Result};
use crate::harness::registry::{Entry, Registry};
use tracing::{error, info, instrument, warn};

/// Outcome of one registry entry
#[derive(Debug)]
pub struct Outcome {
    pub label: &'static str,
    pub result: Result<()>,
}

/// Per-label outcomes in the order they ran
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    fn record(&mut self, label: &'static str, result: Result<()>) {
        self.outcomes.push(Outcome { label, result });
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Labels in the order they ran
    pub fn labels(&self) -> Vec<&'static str> {
        self.outcomes.iter().map(|o| o.label).collect()
    }

    pub fn succeeded(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_ok())
            .map(|o| o.label)
            .collect()
    }

    pub fn failures(&self) -> Vec<(&'static str, &HarnessError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.label, e)))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// e.g. "3/4 succeeded, failed: secrets"
    pub fn summary(&self) -> String {
        let failed: Vec<_> = self.failures().into_iter().map(|(l, _)| l).collect();
        let mut summary = format!(
            "{}/{} succeeded",
            self.outcomes.len() - failed.len(),
            self.outcomes.len()
        );
        if !failed.is_empty() {
            summary.push_str(&format!(", failed: {}", failed.join(", ")));
        }
        summary
    }
}

/// Create every entry's object, config objects first
#[instrument(skip(registry))]
pub async fn apply_all(registry: &Registry) -> Report {
    for missing in registry.manifests().missing_key_refs() {
        warn!(
            "Workload references a key its manifest does not define: {}",
            missing
        );
    }

    let mut report = Report::default();
    for entry in registry.entries() {
        let result = run(entry, "create", entry.create()).await;
        report.record(entry.label(), result);
    }
    info!("Apply finished: {}", report.summary());
    report
}

/// Delete every entry's object, in reverse apply order
#[instrument(skip(registry))]
pub async fn delete_all(registry: &Registry) -> Report {
    let mut report = Report::default();
    for entry in registry.entries().rev() {
        let result = run(entry, "delete", entry.delete()).await;
        report.record(entry.label(), result);
    }
    info!("Delete finished: {}", report.summary());
    report
}

/// Check which entries' objects currently exist
#[instrument(skip(registry))]
pub async fn status_all(registry: &Registry) -> Vec<(&'static str, Result<bool>)> {
    let mut statuses = Vec::with_capacity(registry.len());
    for entry in registry.entries() {
        let result = entry.exists().await;
        match &result {
            Ok(true) => info!("{} {}: present", entry.label(), entry.name()),
            Ok(false) => info!("{} {}: not found", entry.label(), entry.name()),
            Err(e) => error!("{} {}: {}", entry.label(), entry.name(), e),
        }
        statuses.push((entry.label(), result));
    }
    statuses
}

async fn run(
    entry: &Entry,
    verb: &str,
    op: impl std::future::Future<Output = Result<()>>,
) -> Result<()> {
    info!("Test {}", entry.label());
    let result = op.await;
    match &result {
        Ok(()) => info!("Test {} passed: {} {}", entry.label(), verb, entry.name()),
        Err(e) => error!("Test {} FAILED: {}", entry.label(), e),
    }
    result
}
