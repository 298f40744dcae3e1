//! Error types for compass resolution.

use std::fmt;

/// Errors arising from compass construction or resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// The offset `(0, 0)` has no bearing.
    ZeroOffset,
    /// Tier thresholds are not finite, positive, and strictly increasing.
    InvalidThresholds {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroOffset => write!(f, "offset (0, 0) has no bearing"),
            Self::InvalidThresholds { reason } => {
                write!(f, "invalid distance thresholds: {reason}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
