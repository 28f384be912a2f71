//! Resource loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::ingress::resource::Ingress;

/// Error type for resource loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization failed.
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization failed.
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load an ingress resource from a JSON or TOML file.
///
/// The format is chosen by extension: `.toml` files parse as TOML,
/// everything else as JSON.
pub fn load_ingress(path: &Path) -> Result<Ingress, LoadError> {
    let content = fs::read_to_string(path)?;

    let ingress = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    Ok(ingress)
}
