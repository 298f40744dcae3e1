//! Borrowed 2D views over the flat observation buffers.
//!
//! The environment hands over row-major flat arrays; these views attach
//! the shape once, at construction, so downstream code never recomputes
//! strides or trusts an unchecked length.

use crate::error::BoundsError;
use crate::id::{GlyphCode, MapPos};

/// Conventional NLE map height.
pub const MAP_ROWS: usize = 21;
/// Conventional NLE map width.
pub const MAP_COLS: usize = 79;
/// Conventional NLE terminal height.
pub const TERMINAL_ROWS: usize = 24;
/// Conventional NLE terminal width.
pub const TERMINAL_COLS: usize = 80;

fn check_shape(what: &'static str, len: usize, rows: usize, cols: usize) -> Result<(), BoundsError> {
    let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
    if len != expected {
        return Err(BoundsError::ShapeMismatch {
            what,
            expected,
            actual: len,
        });
    }
    Ok(())
}

// ── GlyphGrid ──────────────────────────────────────────────────────

/// Read-only view of the dungeon glyph map.
#[derive(Clone, Copy, Debug)]
pub struct GlyphGrid<'a> {
    cells: &'a [i16],
    rows: usize,
    cols: usize,
}

impl<'a> GlyphGrid<'a> {
    /// Wrap a row-major buffer of `rows * cols` glyph codes.
    pub fn new(cells: &'a [i16], rows: usize, cols: usize) -> Result<Self, BoundsError> {
        check_shape("glyphs", cells.len(), rows, cols)?;
        Ok(Self { cells, rows, cols })
    }

    /// Number of map rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of map columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `pos` lies on the map.
    pub fn contains(&self, pos: MapPos) -> bool {
        pos.index_in(self.rows, self.cols).is_some()
    }

    /// Glyph at `pos`, or `None` off the map.
    pub fn get(&self, pos: MapPos) -> Option<GlyphCode> {
        pos.index_in(self.rows, self.cols)
            .map(|i| GlyphCode::from(self.cells[i]))
    }

    /// All cells in row-major order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (MapPos, GlyphCode)> + 'a {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &g)| {
            let pos = MapPos::new((i / cols) as i64, (i % cols) as i64);
            (pos, GlyphCode::from(g))
        })
    }
}

// ── TerminalGrid ───────────────────────────────────────────────────

/// Read-only view of the rendered terminal (`tty_chars`).
#[derive(Clone, Copy, Debug)]
pub struct TerminalGrid<'a> {
    chars: &'a [u8],
    rows: usize,
    cols: usize,
}

impl<'a> TerminalGrid<'a> {
    /// Wrap a row-major buffer of `rows * cols` terminal bytes.
    pub fn new(chars: &'a [u8], rows: usize, cols: usize) -> Result<Self, BoundsError> {
        check_shape("tty_chars", chars.len(), rows, cols)?;
        Ok(Self { chars, rows, cols })
    }

    /// Number of terminal rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of terminal columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bytes of row `r`, or `None` past the last row.
    pub fn row(&self, r: usize) -> Option<&'a [u8]> {
        if r >= self.rows {
            return None;
        }
        let start = r * self.cols;
        Some(&self.chars[start..start + self.cols])
    }

    /// Rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        // chunks_exact panics on a zero chunk size.
        self.chars.chunks_exact(self.cols.max(1)).take(self.rows)
    }
}
