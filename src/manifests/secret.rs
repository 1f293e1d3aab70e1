// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{names, NAMESPACE};
use crate::manifests::app_labels;
use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

pub const SECRET_KEY: &str = "secret";
const SECRET_VALUE: &str = "topSecret123";

/// Secret given as `stringData`; the API server encodes it into `data`
pub fn secret() -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(names::SECRET.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(app_labels()),
            ..Default::default()
        },
        string_data: Some(BTreeMap::from([(
            SECRET_KEY.to_string(),
            SECRET_VALUE.to_string(),
        )])),
        ..Default::default()
    }
}
