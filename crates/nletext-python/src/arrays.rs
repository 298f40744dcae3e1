//! Borrowed core views over NumPy arrays.
//!
//! Arrays must be C-contiguous with the dtypes NLE produces: `int16`
//! glyphs, `int64` blstats, `uint8` terminal and inventory buffers.

use numpy::{PyReadonlyArray1, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::PyResult;

use nletext_core::{GlyphGrid, InventoryView, StatusVector, TerminalGrid, TtyCursor};

use crate::error::value_error;

pub(crate) fn glyph_grid<'a>(arr: &'a PyReadonlyArray2<'_, i16>) -> PyResult<GlyphGrid<'a>> {
    let (rows, cols) = (arr.shape()[0], arr.shape()[1]);
    GlyphGrid::new(arr.as_slice()?, rows, cols).map_err(value_error)
}

pub(crate) fn terminal_grid<'a>(arr: &'a PyReadonlyArray2<'_, u8>) -> PyResult<TerminalGrid<'a>> {
    let (rows, cols) = (arr.shape()[0], arr.shape()[1]);
    TerminalGrid::new(arr.as_slice()?, rows, cols).map_err(value_error)
}

pub(crate) fn status_vector<'a>(arr: &'a PyReadonlyArray1<'_, i64>) -> PyResult<StatusVector<'a>> {
    Ok(StatusVector::new(arr.as_slice()?))
}

pub(crate) fn inventory<'a>(
    strs: &'a PyReadonlyArray2<'_, u8>,
    letters: &'a PyReadonlyArray1<'_, u8>,
) -> PyResult<InventoryView<'a>> {
    let (rows, width) = (strs.shape()[0], strs.shape()[1]);
    InventoryView::new(letters.as_slice()?, strs.as_slice()?, rows, width).map_err(value_error)
}

/// `tty_cursor` arrives as any two-element integer sequence `(row, col)`.
pub(crate) fn tty_cursor(values: &[i64]) -> PyResult<TtyCursor> {
    match values {
        [row, col] => Ok(TtyCursor::new(*row, *col)),
        _ => Err(value_error(format!(
            "tty_cursor must have 2 elements, got {}",
            values.len()
        ))),
    }
}

/// Encode text as Latin-1, replacing anything outside it with `?`.
pub(crate) fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_keeps_high_bytes() {
        assert_eq!(latin1("a\u{e9}b"), vec![b'a', 0xE9, b'b']);
        assert_eq!(latin1("\u{2603}"), vec![b'?']);
    }

    #[test]
    fn cursor_needs_two_values() {
        assert_eq!(tty_cursor(&[15, 66]).unwrap(), TtyCursor::new(15, 66));
        assert!(tty_cursor(&[1, 2, 3]).is_err());
    }
}
