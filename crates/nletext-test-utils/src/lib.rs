//! Test utilities and observation fixtures for nletext development.
//!
//! Provides [`OwnedObservation`], an owned set of observation buffers
//! that hands out a borrowed [`RawObservation`] on demand, plus the
//! string-to-grid helpers and the canonical fixture scenes in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use nletext_core::{
    BoundsError, GlyphGrid, InventoryView, RawObservation, StatusField, StatusVector,
    TerminalGrid, TtyCursor, MAP_COLS, MAP_ROWS, TERMINAL_COLS, TERMINAL_ROWS,
};

/// Lay out `lines` as a `rows` x `cols` byte grid, padding with `fill`.
///
/// Lines longer than `cols` are cut; rows beyond `lines` are all `fill`.
pub fn strs_to_2d(lines: &[&str], rows: usize, cols: usize, fill: u8) -> Vec<u8> {
    let mut out = vec![fill; rows * cols];
    for (r, line) in lines.iter().take(rows).enumerate() {
        let bytes = line.as_bytes();
        let n = bytes.len().min(cols);
        out[r * cols..r * cols + n].copy_from_slice(&bytes[..n]);
    }
    out
}

/// Like [`strs_to_2d`], sized to the lines: as many rows as lines and as
/// many columns as the longest line.
pub fn strs_to_fitted_2d(lines: &[&str], fill: u8) -> (Vec<u8>, usize, usize) {
    let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    (strs_to_2d(lines, lines.len(), cols, fill), lines.len(), cols)
}

/// Owned buffers for one observation.
#[derive(Clone, Debug)]
pub struct OwnedObservation {
    pub glyphs: Vec<i16>,
    pub glyph_rows: usize,
    pub glyph_cols: usize,
    pub blstats: Vec<i64>,
    pub tty_chars: Vec<u8>,
    pub tty_rows: usize,
    pub tty_cols: usize,
    pub inv_letters: Vec<u8>,
    pub inv_strs: Vec<u8>,
    pub inv_rows: usize,
    pub inv_width: usize,
    pub tty_cursor: (i64, i64),
}

impl OwnedObservation {
    /// A full-size observation with every map cell set to `fill`, an
    /// all-zero status vector, a blank terminal, and no inventory.
    pub fn filled(fill: i16) -> Self {
        Self {
            glyphs: vec![fill; MAP_ROWS * MAP_COLS],
            glyph_rows: MAP_ROWS,
            glyph_cols: MAP_COLS,
            blstats: vec![0; StatusField::COUNT],
            tty_chars: vec![b' '; TERMINAL_ROWS * TERMINAL_COLS],
            tty_rows: TERMINAL_ROWS,
            tty_cols: TERMINAL_COLS,
            inv_letters: Vec::new(),
            inv_strs: Vec::new(),
            inv_rows: 0,
            inv_width: 0,
            tty_cursor: (1, 0),
        }
    }

    pub fn set_glyph(&mut self, row: usize, col: usize, code: i16) -> &mut Self {
        self.glyphs[row * self.glyph_cols + col] = code;
        self
    }

    pub fn fill_glyphs(&mut self, code: i16) -> &mut Self {
        self.glyphs.fill(code);
        self
    }

    pub fn set_stat(&mut self, field: StatusField, value: i64) -> &mut Self {
        self.blstats[field.index()] = value;
        self
    }

    /// Place the player: sets the X/Y status slots and the cursor.
    pub fn set_player(&mut self, row: usize, col: usize) -> &mut Self {
        self.set_stat(StatusField::X, col as i64);
        self.set_stat(StatusField::Y, row as i64);
        self.tty_cursor = (row as i64 + 1, col as i64);
        self
    }

    /// Replace the terminal with `lines`, sized to fit them.
    pub fn set_tty_lines(&mut self, lines: &[&str], fill: u8) -> &mut Self {
        let (chars, rows, cols) = strs_to_fitted_2d(lines, fill);
        self.tty_chars = chars;
        self.tty_rows = rows;
        self.tty_cols = cols;
        self
    }

    /// Replace the inventory with `(letter, description)` pairs.
    ///
    /// Descriptions are NUL-terminated and padded to a common width, and
    /// the letters array gets a trailing NUL, as the environment sends it.
    pub fn set_inventory(&mut self, items: &[(char, &str)]) -> &mut Self {
        let width = items.iter().map(|(_, d)| d.len() + 1).max().unwrap_or(1);
        self.inv_letters = items.iter().map(|&(l, _)| l as u8).collect();
        self.inv_letters.push(0);
        let descs: Vec<&str> = items.iter().map(|&(_, d)| d).collect();
        self.inv_strs = strs_to_2d(&descs, items.len(), width, 0);
        self.inv_rows = items.len();
        self.inv_width = width;
        self
    }

    pub fn set_cursor(&mut self, row: i64, col: i64) -> &mut Self {
        self.tty_cursor = (row, col);
        self
    }

    /// Borrow the buffers as a [`RawObservation`].
    pub fn view(&self) -> Result<RawObservation<'_>, BoundsError> {
        Ok(RawObservation {
            glyphs: GlyphGrid::new(&self.glyphs, self.glyph_rows, self.glyph_cols)?,
            blstats: StatusVector::new(&self.blstats),
            tty_chars: TerminalGrid::new(&self.tty_chars, self.tty_rows, self.tty_cols)?,
            inventory: InventoryView::new(
                &self.inv_letters,
                &self.inv_strs,
                self.inv_rows,
                self.inv_width,
            )?,
            tty_cursor: TtyCursor::new(self.tty_cursor.0, self.tty_cursor.1),
        })
    }
}
