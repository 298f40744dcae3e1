//! Per-observation timing for the encoder.
//!
//! [`EncodeMetrics`] captures how long each text section took for one
//! observation, for profiling and for spotting pathological frames.

/// Timing collected while encoding a single observation.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeMetrics {
    /// Wall-clock time for the whole observation.
    pub total_us: u64,
    /// Surroundings text.
    pub glyphs_us: u64,
    /// Message extraction.
    pub message_us: u64,
    /// Status text.
    pub blstats_us: u64,
    /// Inventory text.
    pub inventory_us: u64,
    /// Cursor text.
    pub cursor_us: u64,
    /// Combined length of the five strings, in bytes.
    pub output_bytes: usize,
}

impl EncodeMetrics {
    /// Sum of the per-section times; at most `total_us`.
    pub fn sections_us(&self) -> u64 {
        self.glyphs_us + self.message_us + self.blstats_us + self.inventory_us + self.cursor_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = EncodeMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.sections_us(), 0);
        assert_eq!(m.output_bytes, 0);
    }

    #[test]
    fn sections_add_up() {
        let m = EncodeMetrics {
            total_us: 100,
            glyphs_us: 40,
            message_us: 5,
            blstats_us: 3,
            inventory_us: 2,
            cursor_us: 1,
            output_bytes: 0,
        };
        assert_eq!(m.sections_us(), 51);
    }
}
