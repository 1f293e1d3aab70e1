// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{names, NAMESPACE};
use crate::manifests::secret::SECRET_KEY;
use crate::manifests::{app_labels, CONTAINER_PORT};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    ConfigMapKeySelector, ConfigMapVolumeSource, Container, ContainerPort, EnvVar, EnvVarSource,
    PodSpec, PodTemplateSpec, ResourceRequirements, SecretKeySelector, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

pub const REPLICAS: i32 = 3;

/// ConfigMap key read into `VAR_CONFIG`
pub const CONFIG_ENV_KEY: &str = "a";

fn resources(cpu: &str, memory: &str) -> BTreeMap<String, Quantity> {
    BTreeMap::from([
        ("cpu".to_string(), Quantity(cpu.to_string())),
        ("memory".to_string(), Quantity(memory.to_string())),
    ])
}

fn env() -> Vec<EnvVar> {
    vec![
        EnvVar {
            name: "VAR".to_string(),
            value: Some("abc".to_string()),
            ..Default::default()
        },
        EnvVar {
            name: "VAR_CONFIG".to_string(),
            value_from: Some(EnvVarSource {
                config_map_key_ref: Some(ConfigMapKeySelector {
                    name: names::CONFIG_MAP.to_string(),
                    key: CONFIG_ENV_KEY.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
        EnvVar {
            name: "SECRET_VAR".to_string(),
            value_from: Some(EnvVarSource {
                secret_key_ref: Some(SecretKeySelector {
                    name: names::SECRET.to_string(),
                    key: SECRET_KEY.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
    ]
}

fn container() -> Container {
    Container {
        name: names::CONTAINER.to_string(),
        image: Some(names::IMAGE.to_string()),
        env: Some(env()),
        ports: Some(vec![ContainerPort {
            container_port: CONTAINER_PORT,
            ..Default::default()
        }]),
        resources: Some(ResourceRequirements {
            limits: Some(resources("1", "1Gi")),
            requests: Some(resources("100m", "100Mi")),
            ..Default::default()
        }),
        volume_mounts: Some(vec![VolumeMount {
            name: names::CONFIG_VOLUME.to_string(),
            mount_path: "/".to_string(),
            sub_path: Some(names::CONFIG_FILE_KEY.to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

/// Three nginx replicas reading env from the ConfigMap and Secret and
/// mounting `nginx.conf` from the ConfigMap
pub fn deployment() -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(names::DEPLOYMENT.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(app_labels()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(REPLICAS),
            selector: LabelSelector {
                match_labels: Some(app_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(app_labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container()],
                    volumes: Some(vec![Volume {
                        name: names::CONFIG_VOLUME.to_string(),
                        config_map: Some(ConfigMapVolumeSource {
                            name: names::CONFIG_MAP.to_string(),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }]),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
