//! Shared fixtures for integration tests.

use std::collections::HashMap;

use ingress_ratelimit::ingress::resource::{
    HttpIngressPath, Ingress, IngressBackend, IngressRule, IngressSpec, ObjectMeta,
};

/// Ingress with a default backend and one host/path rule, no annotations.
pub fn build_ingress() -> Ingress {
    let default_backend = IngressBackend {
        service_name: "default-backend".to_string(),
        service_port: 80,
    };

    Ingress {
        metadata: ObjectMeta {
            name: "foo".to_string(),
            namespace: "default".to_string(),
            annotations: HashMap::new(),
        },
        spec: IngressSpec {
            backend: Some(default_backend.clone()),
            rules: vec![IngressRule {
                host: "foo.bar.com".to_string(),
                paths: vec![HttpIngressPath {
                    path: "/foo".to_string(),
                    backend: default_backend,
                }],
            }],
        },
    }
}

/// Build an annotation map from string pairs.
pub fn annotations(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
