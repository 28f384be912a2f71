//! Rate-limit value types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One side of a rate limit, enforced per source identifier (client address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitSpec {
    /// Maximum permitted value; 0 means "not limited on this axis".
    pub limit: u32,
}

/// Validated rate-limit configuration extracted from ingress annotations.
///
/// Constructed only by [`RateLimitParser::parse`]; a successfully returned
/// value always has at least one strictly positive limit.
///
/// [`RateLimitParser::parse`]: crate::annotations::RateLimitParser::parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Maximum concurrent connections per source.
    pub connections: LimitSpec,

    /// Maximum requests per second per source.
    pub rps: LimitSpec,
}

/// Errors from whole-config annotation parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The resource carries no annotations at all. Rate limiting was never
    /// requested; callers typically skip the feature for this resource.
    #[error("ingress has no annotations")]
    MissingAnnotations,

    /// Annotations are present but both derived limits resolve to zero.
    /// A rate limit that limits nothing is a configuration error, not a
    /// no-op; callers should reject the resource.
    #[error("invalid rate limits: limit-connections and limit-rps are both zero")]
    InvalidLimits,
}
