//! The observation encoder facade.

use std::time::Instant;

use tracing::debug;

use nletext_core::{
    BoundsError, EncodeError, GlyphGrid, InventoryView, RawObservation, StatusVector,
    TerminalGrid, TextObservation, TtyCursor,
};
use nletext_glyph::GlyphCatalog;
use nletext_obs::{
    CursorDescriber, InventoryFormatter, ScreenTextExtractor, SpatialDescriber, StatsFormatter,
};

use crate::config::{ConfigError, EncoderConfig};
use crate::metrics::EncodeMetrics;

/// Encodes raw observations into text.
///
/// Built once from an [`EncoderConfig`]; every method is a pure function
/// of its input, so one encoder can be shared across threads.
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    config: EncoderConfig,
    surroundings: SpatialDescriber<'static>,
    messages: ScreenTextExtractor,
    stats: StatsFormatter,
    inventory: InventoryFormatter,
    cursor: CursorDescriber<'static>,
}

impl ObservationEncoder {
    /// Create an encoder over the shared glyph catalog.
    pub fn new(config: EncoderConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(GlyphCatalog::shared(), config)
    }

    /// Create an encoder over a specific catalog.
    pub fn with_catalog(
        catalog: &'static GlyphCatalog,
        config: EncoderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            surroundings: SpatialDescriber::new(catalog, &config.surroundings())?,
            messages: ScreenTextExtractor::new(config.message),
            stats: StatsFormatter::new(),
            inventory: InventoryFormatter::new(),
            cursor: CursorDescriber::new(catalog, config.thresholds, config.cursor)?,
            config,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// What surrounds the player, whose position is read from `blstats`.
    pub fn text_glyphs(
        &self,
        glyphs: &GlyphGrid<'_>,
        blstats: &StatusVector<'_>,
    ) -> Result<String, EncodeError> {
        let player = blstats.player_pos()?;
        self.surroundings.describe(glyphs, player)
    }

    /// The message or menu on screen.
    pub fn text_message(&self, tty_chars: &TerminalGrid<'_>) -> String {
        self.messages.extract(tty_chars)
    }

    /// The status lines.
    pub fn text_blstats(&self, blstats: &StatusVector<'_>) -> Result<String, BoundsError> {
        self.stats.format(blstats)
    }

    /// The inventory lines.
    pub fn text_inventory(&self, inventory: &InventoryView<'_>) -> String {
        self.inventory.format(inventory)
    }

    /// What the cursor is on.
    pub fn text_cursor(
        &self,
        glyphs: &GlyphGrid<'_>,
        blstats: &StatusVector<'_>,
        tty_cursor: TtyCursor,
    ) -> Result<String, EncodeError> {
        self.cursor.describe_tty(glyphs, blstats, tty_cursor)
    }

    /// Encode all five sections of `obs`.
    pub fn encode(&self, obs: &RawObservation<'_>) -> Result<TextObservation, EncodeError> {
        self.encode_with_metrics(obs).map(|(text, _)| text)
    }

    /// Encode all five sections of `obs`, timing each one.
    pub fn encode_with_metrics(
        &self,
        obs: &RawObservation<'_>,
    ) -> Result<(TextObservation, EncodeMetrics), EncodeError> {
        let start = Instant::now();
        let mut metrics = EncodeMetrics::default();

        let t = Instant::now();
        let text_glyphs = self.text_glyphs(&obs.glyphs, &obs.blstats)?;
        metrics.glyphs_us = elapsed_us(t);

        let t = Instant::now();
        let text_message = self.text_message(&obs.tty_chars);
        metrics.message_us = elapsed_us(t);

        let t = Instant::now();
        let text_blstats = self.text_blstats(&obs.blstats)?;
        metrics.blstats_us = elapsed_us(t);

        let t = Instant::now();
        let text_inventory = self.text_inventory(&obs.inventory);
        metrics.inventory_us = elapsed_us(t);

        let t = Instant::now();
        let text_cursor = self.text_cursor(&obs.glyphs, &obs.blstats, obs.tty_cursor)?;
        metrics.cursor_us = elapsed_us(t);

        let text = TextObservation {
            text_glyphs,
            text_message,
            text_blstats,
            text_inventory,
            text_cursor,
        };
        metrics.output_bytes = text.fields().iter().map(|(_, s)| s.len()).sum();
        metrics.total_us = elapsed_us(start);
        debug!(
            total_us = metrics.total_us,
            glyphs_us = metrics.glyphs_us,
            output_bytes = metrics.output_bytes,
            "encoded observation"
        );
        Ok((text, metrics))
    }
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nletext_core::StatusField;
    use nletext_obs::{CursorConfig, OffMapCursor};
    use nletext_test_utils::fixtures::monk_scene;

    fn encoder() -> ObservationEncoder {
        ObservationEncoder::new(EncoderConfig::default()).unwrap()
    }

    #[test]
    fn encoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObservationEncoder>();
    }

    #[test]
    fn encode_is_repeatable() {
        let obs = monk_scene();
        let raw = obs.view().unwrap();
        let enc = encoder();
        assert_eq!(enc.encode(&raw).unwrap(), enc.encode(&raw).unwrap());
    }

    #[test]
    fn metrics_cover_every_section() {
        let obs = monk_scene();
        let (text, m) = encoder()
            .encode_with_metrics(&obs.view().unwrap())
            .unwrap();
        assert!(m.sections_us() <= m.total_us);
        let bytes: usize = text.fields().iter().map(|(_, s)| s.len()).sum();
        assert_eq!(m.output_bytes, bytes);
    }

    #[test]
    fn short_status_vector_fails_encode() {
        let mut obs = monk_scene();
        obs.blstats.truncate(StatusField::Score.index());
        assert!(matches!(
            encoder().encode(&obs.view().unwrap()),
            Err(EncodeError::Bounds(BoundsError::StatusIndex { .. }))
        ));
    }

    #[test]
    fn more_prompt_frame_encodes_with_empty_cursor() {
        let mut obs = monk_scene();
        obs.set_tty_lines(&["You kill the jackal!--More--"], b' ')
            .set_cursor(0, 28);
        let text = encoder().encode(&obs.view().unwrap()).unwrap();
        assert_eq!(text.text_cursor, "");
        assert_eq!(text.text_message, "You kill the jackal!--More--");
        assert!(text.text_glyphs.starts_with("tame little dog"));
    }

    #[test]
    fn strict_cursor_policy_rejects_message_line() {
        let mut obs = monk_scene();
        obs.set_cursor(0, 3);
        let strict = ObservationEncoder::new(EncoderConfig {
            cursor: CursorConfig {
                off_map: OffMapCursor::Error,
                ..CursorConfig::default()
            },
            ..EncoderConfig::default()
        })
        .unwrap();
        assert!(matches!(
            strict.encode(&obs.view().unwrap()),
            Err(EncodeError::Bounds(BoundsError::CursorOffMap { row: 0, col: 3 }))
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = EncoderConfig {
            thresholds: nletext_space::TierThresholds {
                near: -1.0,
                ..Default::default()
            },
            ..EncoderConfig::default()
        };
        assert!(ObservationEncoder::new(cfg).is_err());
    }
}
