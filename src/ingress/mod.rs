//! Ingress resource model.
//!
//! # Data Flow
//! ```text
//! resource file (JSON/TOML)
//!     → loader.rs (parse & deserialize)
//!     → Ingress (metadata + annotations, host/path rules, default backend)
//!     → annotations subsystem (only the annotation map is consulted)
//! ```
//!
//! # Design Decisions
//! - The resource is caller-owned and never mutated by parsing
//! - Annotations default to an empty map; "no map" and "empty map" coincide
//! - Rules and backends exist for resource fidelity; parsing ignores them

pub mod loader;
pub mod resource;

pub use resource::Ingress;
