//! Rate-limit annotation readers and validation.
//!
//! # Responsibilities
//! - Read `<prefix>/limit-connections` and `<prefix>/limit-rps`
//! - Coerce annotation strings to non-negative integers with defaulting
//! - Validate the combination and build a [`RateLimit`]
//!
//! # Design Decisions
//! - Individual fields never fail: malformed values read as 0
//! - The whole-config parse distinguishes "no annotations" from "limits
//!   present but all zero" so callers can tell feature-unused apart from
//!   feature-misconfigured

use std::collections::HashMap;

use crate::annotations::types::{LimitSpec, ParseError, RateLimit};
use crate::ingress::resource::Ingress;

/// Annotation map attached to a routing resource.
pub type AnnotationMap = HashMap<String, String>;

/// Default namespace prefix for rate-limit annotation keys.
pub const DEFAULT_ANNOTATION_PREFIX: &str = "ingress.kubernetes.io";

const LIMIT_CONNECTIONS_SUFFIX: &str = "limit-connections";
const LIMIT_RPS_SUFFIX: &str = "limit-rps";

/// Parser for rate-limit annotations under a fixed key namespace prefix.
#[derive(Debug, Clone)]
pub struct RateLimitParser {
    prefix: String,
}

impl Default for RateLimitParser {
    fn default() -> Self {
        Self::new(DEFAULT_ANNOTATION_PREFIX)
    }
}

impl RateLimitParser {
    /// Create a parser reading keys under the given namespace prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Maximum concurrent connections per source, from the
    /// `<prefix>/limit-connections` annotation.
    ///
    /// Absent or malformed values read as 0; this never fails.
    pub fn limit_connections(&self, annotations: &AnnotationMap) -> u32 {
        self.read_limit(annotations, LIMIT_CONNECTIONS_SUFFIX)
    }

    /// Maximum requests per second per source, from the `<prefix>/limit-rps`
    /// annotation. Same lenient contract as [`Self::limit_connections`].
    pub fn limit_rps(&self, annotations: &AnnotationMap) -> u32 {
        self.read_limit(annotations, LIMIT_RPS_SUFFIX)
    }

    /// Parse and validate the rate-limit annotations on an ingress.
    ///
    /// A resource with no annotations at all fails with
    /// [`ParseError::MissingAnnotations`]; one whose annotations yield zero
    /// for both limits fails with [`ParseError::InvalidLimits`]. Pure and
    /// idempotent: the same resource always parses to the same result.
    pub fn parse(&self, ingress: &Ingress) -> Result<RateLimit, ParseError> {
        let annotations = ingress.annotations();
        if annotations.is_empty() {
            return Err(ParseError::MissingAnnotations);
        }

        let connections = self.limit_connections(annotations);
        let rps = self.limit_rps(annotations);

        // A limiter that limits nothing is a config error, not a no-op.
        if connections == 0 && rps == 0 {
            return Err(ParseError::InvalidLimits);
        }

        Ok(RateLimit {
            connections: LimitSpec { limit: connections },
            rps: LimitSpec { limit: rps },
        })
    }

    // u32 parsing rejects signs, so negative values degrade to 0 the same
    // way any other malformed string does.
    fn read_limit(&self, annotations: &AnnotationMap, suffix: &str) -> u32 {
        let key = format!("{}/{}", self.prefix, suffix);
        annotations
            .get(&key)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0)
    }
}
