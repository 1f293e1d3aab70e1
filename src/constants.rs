// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace every manifest is created in
pub const NAMESPACE: &str = "default";

/// Environment variables read at startup
pub mod env {
    /// Explicit kubeconfig path, used verbatim when set and non-empty
    pub const KUBECONFIG: &str = "KUBECONFIG";
    /// Action for the binary: apply, delete, status or render
    pub const ACTION: &str = "MANIFESTS_ACTION";
}

/// Default kubeconfig location, relative to the user's home directory
pub const DEFAULT_KUBECONFIG_DIR: &str = ".kube";
pub const DEFAULT_KUBECONFIG_FILE: &str = "config";

/// Object names and labels shared by the manifest set
pub mod names {
    pub const APP_LABEL_KEY: &str = "app";
    pub const APP_LABEL_VALUE: &str = "nginx";

    pub const DEPLOYMENT: &str = "nginx";
    pub const SERVICE: &str = "nginx";
    pub const CONFIG_MAP: &str = "nginx-config";
    pub const SECRET: &str = "nginx-secret";

    pub const CONTAINER: &str = "nginx";
    pub const IMAGE: &str = "nginx";
    pub const CONFIG_VOLUME: &str = "config-volume";
    pub const CONFIG_FILE_KEY: &str = "nginx.conf";
}

/// Registry labels, one per resource kind
pub mod labels {
    pub const CONFIG_MAPS: &str = "configmaps";
    pub const SECRETS: &str = "secrets";
    pub const DEPLOYMENTS: &str = "deployments";
    pub const SERVICES: &str = "services";
}
