//! Error classification for the reading engine.

use serde::{Deserialize, Serialize};
use terra_rules::RuleError;
use thiserror::Error;

/// Every way a reading can fail.
///
/// The engine only classifies failures; wording for end users is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// Unrecognized or center direction where a compass point is required.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// A selector received a symbol/seed combination outside its domain.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The reference dataset failed to load or is malformed.
    #[error("reference data unavailable: {0}")]
    DataUnavailable(String),

    /// A resolved key has no record. Indicates a table/dataset mismatch.
    #[error("record {0} not found")]
    NotFound(u32),
}

impl ReadingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadingError::InvalidDirection(_) => ErrorKind::InvalidDirection,
            ReadingError::InvalidSelection(_) => ErrorKind::InvalidSelection,
            ReadingError::DataUnavailable(_) => ErrorKind::DataUnavailable,
            ReadingError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl From<RuleError> for ReadingError {
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::InvalidDirection(raw) => ReadingError::InvalidDirection(raw),
            RuleError::InvalidIntention(raw) => {
                ReadingError::InvalidSelection(format!("unknown intention {raw}"))
            }
            RuleError::InvalidAssignment(raw) => {
                ReadingError::InvalidSelection(format!("bad assignment {raw}"))
            }
        }
    }
}

/// Fieldless error classification, as sent back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidDirection,
    InvalidSelection,
    DataUnavailable,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_errors_map_to_reading_errors() {
        let err: ReadingError = RuleError::InvalidDirection("X".into()).into();
        assert_eq!(err.kind(), ErrorKind::InvalidDirection);

        let err: ReadingError = RuleError::InvalidIntention("luck".into()).into();
        assert_eq!(err.kind(), ErrorKind::InvalidSelection);
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&ErrorKind::DataUnavailable).unwrap();
        assert_eq!(json, "\"DataUnavailable\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadingError::NotFound(65).to_string(), "record 65 not found");
    }
}
