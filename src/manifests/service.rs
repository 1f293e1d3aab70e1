// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{names, NAMESPACE};
use crate::manifests::{app_labels, CONTAINER_PORT};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;

pub const SERVICE_PORT: i32 = 80;

/// LoadBalancer service routing port 80 to the nginx pods
pub fn service() -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(names::SERVICE.to_string()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(app_labels()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                name: Some(names::SERVICE.to_string()),
                port: SERVICE_PORT,
                protocol: Some("TCP".to_string()),
                target_port: Some(IntOrString::Int(CONTAINER_PORT)),
                ..Default::default()
            }]),
            selector: Some(app_labels()),
            type_: Some("LoadBalancer".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_maps_port_80_to_container_port() {
        let spec = service().spec.unwrap();
        let ports = spec.ports.unwrap();

        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].port, 80);
        assert_eq!(ports[0].target_port, Some(IntOrString::Int(8080)));
        assert_eq!(ports[0].protocol.as_deref(), Some("TCP"));
        assert_eq!(spec.type_.as_deref(), Some("LoadBalancer"));
    }
}
