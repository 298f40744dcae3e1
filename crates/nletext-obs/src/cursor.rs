//! What the cursor is resting on.

use nletext_core::{BoundsError, EncodeError, GlyphGrid, MapPos, StatusVector, TtyCursor};
use nletext_glyph::GlyphCatalog;
use nletext_space::{CompassResolver, SpaceError, TierThresholds};

/// What to do with a cursor that is not over the map.
///
/// The terminal leaves its cursor on the message line whenever a
/// `--More--` or a prompt is pending, so the default renders nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffMapCursor {
    /// Report [`BoundsError::CursorOffMap`].
    Error,
    /// Render an empty cursor text.
    #[default]
    Empty,
}

/// Configuration for [`CursorDescriber`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorConfig {
    /// Prefix the text with the cursor's tier and bearing from the player.
    ///
    /// Default: `false`.
    pub include_heading: bool,
    /// Policy for a cursor on the message line. Default: [`OffMapCursor::Empty`].
    pub off_map: OffMapCursor,
}

/// Describes the cell under the cursor.
#[derive(Clone, Copy, Debug)]
pub struct CursorDescriber<'c> {
    catalog: &'c GlyphCatalog,
    compass: CompassResolver,
    config: CursorConfig,
}

impl<'c> CursorDescriber<'c> {
    /// Create a describer.
    pub fn new(
        catalog: &'c GlyphCatalog,
        thresholds: TierThresholds,
        config: CursorConfig,
    ) -> Result<Self, SpaceError> {
        Ok(Self {
            catalog,
            compass: CompassResolver::new(thresholds)?,
            config,
        })
    }

    /// Describe the cell at map position `cursor`.
    ///
    /// On the player's own cell the text is `Yourself a <name>`; anywhere
    /// else it is the name of what is shown there.
    pub fn describe(
        &self,
        grid: &GlyphGrid<'_>,
        stats: &StatusVector<'_>,
        cursor: MapPos,
    ) -> Result<String, EncodeError> {
        let code = grid.get(cursor).ok_or(BoundsError::CursorOutOfBounds {
            pos: cursor,
            rows: grid.rows(),
            cols: grid.cols(),
        })?;
        let descriptor = self.catalog.classify(code)?;
        let player = stats.player_pos()?;
        if cursor == player {
            return Ok(descriptor.self_marker().base_name);
        }
        if !self.config.include_heading {
            return Ok(descriptor.base_name.clone());
        }
        if !grid.contains(player) {
            return Err(BoundsError::PlayerOutOfBounds {
                pos: player,
                rows: grid.rows(),
                cols: grid.cols(),
            }
            .into());
        }
        match self
            .compass
            .resolve(cursor.row - player.row, cursor.col - player.col)
        {
            Ok(heading) => Ok(format!("{heading} {}", descriptor.base_name)),
            Err(_) => Ok(descriptor.base_name.clone()),
        }
    }

    /// Describe the cell under a raw terminal cursor.
    pub fn describe_tty(
        &self,
        grid: &GlyphGrid<'_>,
        stats: &StatusVector<'_>,
        cursor: TtyCursor,
    ) -> Result<String, EncodeError> {
        match cursor.map_pos() {
            Ok(pos) => self.describe(grid, stats, pos),
            Err(_) if self.config.off_map == OffMapCursor::Empty => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}
