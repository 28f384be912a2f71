//! Loading ingress resources from JSON and TOML files.

use std::fs;
use std::path::Path;

use ingress_ratelimit::ingress::loader::{load_ingress, LoadError};
use ingress_ratelimit::RateLimitParser;

#[test]
fn loads_json_resource_and_parses_limits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ingress.json");
    fs::write(
        &path,
        r#"{
            "metadata": {
                "name": "foo",
                "namespace": "default",
                "annotations": {
                    "ingress.kubernetes.io/limit-connections": "5",
                    "ingress.kubernetes.io/limit-rps": "100"
                }
            },
            "spec": {
                "backend": { "service_name": "default-backend", "service_port": 80 }
            }
        }"#,
    )
    .expect("write fixture");

    let ingress = load_ingress(&path).expect("load json");
    assert_eq!(ingress.metadata.name, "foo");

    let rate_limit = RateLimitParser::default()
        .parse(&ingress)
        .expect("valid limits");
    assert_eq!(rate_limit.connections.limit, 5);
    assert_eq!(rate_limit.rps.limit, 100);
}

#[test]
fn loads_toml_resource() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ingress.toml");
    fs::write(
        &path,
        r#"
            [metadata]
            name = "foo"
            namespace = "default"

            [metadata.annotations]
            "ingress.kubernetes.io/limit-rps" = "30"

            [[spec.rules]]
            host = "foo.bar.com"
        "#,
    )
    .expect("write fixture");

    let ingress = load_ingress(&path).expect("load toml");
    assert_eq!(ingress.spec.rules.len(), 1);

    let rate_limit = RateLimitParser::default()
        .parse(&ingress)
        .expect("rps-only limit");
    assert_eq!(rate_limit.rps.limit, 30);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = load_ingress(Path::new("/nonexistent/ingress.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn malformed_json_surfaces_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json }").expect("write fixture");

    let err = load_ingress(&path).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn malformed_toml_surfaces_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "metadata = [unclosed").expect("write fixture");

    let err = load_ingress(&path).unwrap_err();
    assert!(matches!(err, LoadError::Toml(_)));
}
