//! Strongly-typed glyph codes and grid positions.

use std::fmt;

use crate::error::BoundsError;

/// A NetHack glyph code as stored in the observation's glyph grid.
///
/// Held as `i32` so negative garbage from a corrupt buffer can be carried
/// into a [`ClassificationError`](crate::ClassificationError) instead of
/// wrapping silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphCode(pub i32);

impl fmt::Display for GlyphCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i16> for GlyphCode {
    fn from(v: i16) -> Self {
        Self(i32::from(v))
    }
}

impl From<i32> for GlyphCode {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// A `(row, col)` position on the dungeon map.
///
/// Signed so that positions read from untrusted vectors can be represented
/// (and rejected) without overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapPos {
    /// Map row, 0 at the top.
    pub row: i64,
    /// Map column, 0 at the left.
    pub col: i64,
}

impl MapPos {
    /// Create a position.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Row-major index into a `rows x cols` grid, or `None` if off-grid.
    pub fn index_in(self, rows: usize, cols: usize) -> Option<usize> {
        let r = usize::try_from(self.row).ok()?;
        let c = usize::try_from(self.col).ok()?;
        (r < rows && c < cols).then_some(r * cols + c)
    }
}

impl fmt::Display for MapPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The terminal cursor as reported by the environment: `(row, col)` in
/// terminal cells.
///
/// Terminal row 0 is the message line, so map row `r` is drawn on
/// terminal row `r + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TtyCursor {
    /// Terminal row.
    pub row: i64,
    /// Terminal column.
    pub col: i64,
}

impl TtyCursor {
    /// Create a cursor from raw terminal coordinates.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Convert to a map position.
    ///
    /// Fails with [`BoundsError::CursorOffMap`] when the cursor is on the
    /// message line or has a negative coordinate. Whether the result lies
    /// inside a particular grid is checked by the caller.
    pub fn map_pos(self) -> Result<MapPos, BoundsError> {
        if self.row < 1 || self.col < 0 {
            return Err(BoundsError::CursorOffMap {
                row: self.row,
                col: self.col,
            });
        }
        Ok(MapPos::new(self.row - 1, self.col))
    }
}
