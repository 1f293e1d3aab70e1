// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Harness that creates and deletes the manifest set against a cluster.

pub mod registry;
pub mod runner;

pub use registry::{Entry, Registry, Stage};
pub use runner::{apply_all, delete_all, status_all, Outcome, Report};
