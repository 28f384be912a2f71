//! Annotation parsing subsystem.
//!
//! # Data Flow
//! ```text
//! Ingress.annotations() (string → string map)
//!     → ratelimit.rs (per-field readers, lenient defaulting)
//!     → ratelimit.rs parse (aggregate validation)
//!     → RateLimit (validated, immutable)
//!     → consumed by the proxy-config generator
//! ```
//!
//! # Design Decisions
//! - Per-field reads are lenient: absent or malformed values default to 0
//! - Aggregate validation is strict: an all-zero limit set is rejected
//! - The key namespace prefix is injected, never a hidden global
//! - Parsing is a pure function: no logging, no I/O, no shared state

pub mod ratelimit;
pub mod types;

pub use ratelimit::RateLimitParser;
pub use types::{LimitSpec, ParseError, RateLimit};
