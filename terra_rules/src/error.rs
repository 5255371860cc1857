//! Errors raised while interpreting raw rule input.

use thiserror::Error;

/// Failures when a raw code does not name a known rule value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Unrecognized direction, or the center sentinel where a compass point is required.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("invalid intention: {0}")]
    InvalidIntention(String),

    /// An assignment snapshot named an unknown person, space, or direction.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),
}
