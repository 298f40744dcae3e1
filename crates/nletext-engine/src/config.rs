//! Encoder configuration, validation, and error types.
//!
//! [`EncoderConfig`] gathers the knobs of every text section.
//! [`validate()`](EncoderConfig::validate) is called by
//! [`ObservationEncoder::new`](crate::ObservationEncoder::new), so an
//! encoder never runs with a broken configuration.

use std::error::Error;
use std::fmt;

use nletext_obs::{CursorConfig, MessageConfig, SurroundingsConfig};
use nletext_space::{DistanceTier, SpaceError, TierThresholds};

// ── BatchConfig ─────────────────────────────────────────────────

/// Configuration for [`BatchedEncoder`](crate::BatchedEncoder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Worker threads for parallel batches. Default: `None` (auto-detect).
    pub worker_count: Option<usize>,
}

impl BatchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`; auto-detection uses the
    /// available parallelism clamped to `[1, 16]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }
}

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected during [`EncoderConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Distance tier thresholds are malformed.
    InvalidThresholds {
        /// What went wrong.
        reason: String,
    },
    /// The ambient cutoff would report terrain across the whole map.
    InvalidAmbientCutoff {
        /// The rejected cutoff.
        cutoff: DistanceTier,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThresholds { reason } => write!(f, "invalid thresholds: {reason}"),
            Self::InvalidAmbientCutoff { cutoff } => {
                write!(f, "ambient cutoff '{cutoff}' is unbounded")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::InvalidThresholds { reason } => Self::InvalidThresholds { reason },
            other => Self::InvalidThresholds {
                reason: other.to_string(),
            },
        }
    }
}

// ── EncoderConfig ───────────────────────────────────────────────

/// Complete configuration for an [`ObservationEncoder`](crate::ObservationEncoder).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncoderConfig {
    /// Distance tier boundaries shared by the surroundings and cursor text.
    /// Default: [`TierThresholds::default`].
    pub thresholds: TierThresholds,
    /// Farthest tier at which ambient terrain is reported.
    /// Default: [`DistanceTier::VeryNear`].
    pub ambient_cutoff: DistanceTier,
    /// Message extraction. Default: blank rows collapse.
    pub message: MessageConfig,
    /// Cursor text. Default: no heading, off-map cursor renders empty.
    pub cursor: CursorConfig,
    /// Batch encoding.
    pub batch: BatchConfig,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            ambient_cutoff: DistanceTier::VeryNear,
            message: MessageConfig::default(),
            cursor: CursorConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl EncoderConfig {
    /// Check thresholds and cutoff.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if self.ambient_cutoff == DistanceTier::VeryFar {
            return Err(ConfigError::InvalidAmbientCutoff {
                cutoff: self.ambient_cutoff,
            });
        }
        Ok(())
    }

    /// The surroundings section's slice of this configuration.
    pub fn surroundings(&self) -> SurroundingsConfig {
        SurroundingsConfig {
            thresholds: self.thresholds,
            ambient_cutoff: self.ambient_cutoff,
        }
    }
}
