//! Routing resource schema definitions.
//!
//! Models the ingress-style object shape: object metadata carrying the
//! annotation map, host/path routing rules, and a default backend. All types
//! derive Serde traits for deserialization from resource files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An ingress-style routing resource.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Ingress {
    /// Object metadata (name, namespace, annotations).
    pub metadata: ObjectMeta,

    /// Routing rules and default backend.
    pub spec: IngressSpec,
}

impl Ingress {
    /// Annotation map attached to this resource. Empty when the resource
    /// carries no annotations.
    pub fn annotations(&self) -> &HashMap<String, String> {
        &self.metadata.annotations
    }

    /// Replace the resource's annotations.
    pub fn set_annotations(&mut self, annotations: HashMap<String, String>) {
        self.metadata.annotations = annotations;
    }
}

/// Object metadata.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ObjectMeta {
    /// Resource name.
    pub name: String,

    /// Resource namespace.
    pub namespace: String,

    /// String-keyed, string-valued metadata entries carrying optional
    /// feature configuration outside the core schema.
    pub annotations: HashMap<String, String>,
}

/// Routing rules and default backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IngressSpec {
    /// Default backend for traffic matching no rule.
    pub backend: Option<IngressBackend>,

    /// Per-host routing rules.
    pub rules: Vec<IngressRule>,
}

/// Reference to a backend service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngressBackend {
    /// Backend service name.
    pub service_name: String,

    /// Backend service port.
    pub service_port: u16,
}

/// Routing rule for a single host.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngressRule {
    /// Host to match.
    pub host: String,

    /// Path prefix to backend mappings under this host.
    #[serde(default)]
    pub paths: Vec<HttpIngressPath>,
}

/// Path prefix to backend mapping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpIngressPath {
    /// Path prefix to match.
    pub path: String,

    /// Backend receiving matched traffic.
    pub backend: IngressBackend,
}
