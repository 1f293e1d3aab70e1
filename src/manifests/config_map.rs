// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{names, NAMESPACE};
use crate::manifests::app_labels;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// nginx server configuration stored verbatim under `nginx.conf`
pub const NGINX_CONF: &str = r#"worker_processes  1;
events {
    worker_connections  1024;
}
http {
    include       mime.types;
    default_type  application/octet-stream;
    sendfile        on;
    keepalive_timeout  65;
    server {
        listen       8080;
        server_name  localhost;
        location / {
            root   html;
            index  index.html index.htm;
        }
        error_page   500 502 503 504  /50x.html;
        location = /50x.html {
            root   html;
        }
    }
}"#;

pub fn config_map() -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(names::CONFIG_MAP.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(app_labels()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            names::CONFIG_FILE_KEY.to_string(),
            NGINX_CONF.to_string(),
        )])),
        ..Default::default()
    }
}
