//! Ingress rate-limit annotation parsing library.
//!
//! Extracts and validates rate-limiting configuration carried as string
//! annotations on an ingress-style routing resource, producing a typed
//! [`RateLimit`] value for a downstream proxy-config generator.
//!
//! ```text
//! Ingress (annotations: string → string)
//!     → annotations::ratelimit (lenient per-field reads)
//!     → annotations::ratelimit (strict aggregate validation)
//!     → RateLimit (validated, immutable)
//! ```

pub mod annotations;
pub mod ingress;

pub use annotations::ratelimit::{RateLimitParser, DEFAULT_ANNOTATION_PREFIX};
pub use annotations::types::{LimitSpec, ParseError, RateLimit};
pub use ingress::resource::Ingress;
