//! NLELanguageObsv: the text encoder as a Python class.
//!
//! Every method borrows the NumPy buffers, releases the GIL via
//! `py.detach()` while the text is built, and hands back Latin-1 `bytes`.

use numpy::{PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use nletext_core::{RawObservation, TextObservation};
use nletext_engine::{EncoderConfig, ObservationEncoder};
use nletext_obs::{CursorConfig, MessageConfig, OffMapCursor};

use crate::arrays::{glyph_grid, inventory, latin1, status_vector, terminal_grid};
use crate::error::value_error;
use crate::metrics::EncodeMetrics;

/// Translates NetHack observations into natural-language text.
#[pyclass(name = "NLELanguageObsv", frozen)]
pub(crate) struct NLELanguageObsv {
    encoder: ObservationEncoder,
}

#[pymethods]
impl NLELanguageObsv {
    /// Create an encoder.
    ///
    /// Args:
    ///     preserve_blank_lines: Keep blank rows inside menus.
    ///     cursor_heading: Prefix the cursor text with its heading from
    ///         the player.
    ///     strict_cursor: Raise ValueError when the cursor is on the
    ///         message line instead of returning empty text. Off by
    ///         default, since a pending ``--More--`` leaves it there.
    #[new]
    #[pyo3(signature = (preserve_blank_lines=false, cursor_heading=false, strict_cursor=false))]
    fn new(preserve_blank_lines: bool, cursor_heading: bool, strict_cursor: bool) -> PyResult<Self> {
        let config = EncoderConfig {
            message: MessageConfig {
                preserve_blank_lines,
            },
            cursor: CursorConfig {
                include_heading: cursor_heading,
                off_map: if strict_cursor {
                    OffMapCursor::Error
                } else {
                    OffMapCursor::Empty
                },
            },
            ..EncoderConfig::default()
        };
        let encoder = ObservationEncoder::new(config).map_err(value_error)?;
        Ok(Self { encoder })
    }

    /// Describe what surrounds the player.
    fn text_glyphs<'py>(
        &self,
        py: Python<'py>,
        glyphs: PyReadonlyArray2<'py, i16>,
        blstats: PyReadonlyArray1<'py, i64>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let glyphs = glyph_grid(&glyphs)?;
        let blstats = status_vector(&blstats)?;
        let text = py
            .detach(|| self.encoder.text_glyphs(&glyphs, &blstats))
            .map_err(value_error)?;
        Ok(PyBytes::new(py, &latin1(&text)))
    }

    /// Extract the message or menu on screen.
    fn text_message<'py>(
        &self,
        py: Python<'py>,
        tty_chars: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let tty_chars = terminal_grid(&tty_chars)?;
        let text = py.detach(|| self.encoder.text_message(&tty_chars));
        Ok(PyBytes::new(py, &latin1(&text)))
    }

    /// Render the status lines.
    fn text_blstats<'py>(
        &self,
        py: Python<'py>,
        blstats: PyReadonlyArray1<'py, i64>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let blstats = status_vector(&blstats)?;
        let text = py
            .detach(|| self.encoder.text_blstats(&blstats))
            .map_err(value_error)?;
        Ok(PyBytes::new(py, &latin1(&text)))
    }

    /// Render the inventory lines.
    fn text_inventory<'py>(
        &self,
        py: Python<'py>,
        inv_strs: PyReadonlyArray2<'py, u8>,
        inv_letters: PyReadonlyArray1<'py, u8>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let view = inventory(&inv_strs, &inv_letters)?;
        let text = py.detach(|| self.encoder.text_inventory(&view));
        Ok(PyBytes::new(py, &latin1(&text)))
    }

    /// Describe what the cursor is on.
    fn text_cursor<'py>(
        &self,
        py: Python<'py>,
        glyphs: PyReadonlyArray2<'py, i16>,
        blstats: PyReadonlyArray1<'py, i64>,
        tty_cursor: Vec<i64>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let glyphs = glyph_grid(&glyphs)?;
        let blstats = status_vector(&blstats)?;
        let cursor = crate::arrays::tty_cursor(&tty_cursor)?;
        let text = py
            .detach(|| self.encoder.text_cursor(&glyphs, &blstats, cursor))
            .map_err(value_error)?;
        Ok(PyBytes::new(py, &latin1(&text)))
    }

    /// Encode all five sections.
    ///
    /// Returns:
    ///     Dict mapping `text_glyphs`, `text_message`, `text_blstats`,
    ///     `text_inventory` and `text_cursor` to bytes.
    #[allow(clippy::too_many_arguments)]
    fn encode<'py>(
        &self,
        py: Python<'py>,
        glyphs: PyReadonlyArray2<'py, i16>,
        blstats: PyReadonlyArray1<'py, i64>,
        tty_chars: PyReadonlyArray2<'py, u8>,
        inv_letters: PyReadonlyArray1<'py, u8>,
        inv_strs: PyReadonlyArray2<'py, u8>,
        tty_cursor: Vec<i64>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let raw = RawObservation {
            glyphs: glyph_grid(&glyphs)?,
            blstats: status_vector(&blstats)?,
            tty_chars: terminal_grid(&tty_chars)?,
            inventory: inventory(&inv_strs, &inv_letters)?,
            tty_cursor: crate::arrays::tty_cursor(&tty_cursor)?,
        };
        let text = py
            .detach(|| self.encoder.encode(&raw))
            .map_err(value_error)?;
        to_dict(py, &text)
    }

    /// Encode all five sections and time them.
    ///
    /// Returns:
    ///     Tuple of (dict of bytes, EncodeMetrics).
    #[allow(clippy::too_many_arguments)]
    fn encode_with_metrics<'py>(
        &self,
        py: Python<'py>,
        glyphs: PyReadonlyArray2<'py, i16>,
        blstats: PyReadonlyArray1<'py, i64>,
        tty_chars: PyReadonlyArray2<'py, u8>,
        inv_letters: PyReadonlyArray1<'py, u8>,
        inv_strs: PyReadonlyArray2<'py, u8>,
        tty_cursor: Vec<i64>,
    ) -> PyResult<(Bound<'py, PyDict>, EncodeMetrics)> {
        let raw = RawObservation {
            glyphs: glyph_grid(&glyphs)?,
            blstats: status_vector(&blstats)?,
            tty_chars: terminal_grid(&tty_chars)?,
            inventory: inventory(&inv_strs, &inv_letters)?,
            tty_cursor: crate::arrays::tty_cursor(&tty_cursor)?,
        };
        let (text, metrics) = py
            .detach(|| self.encoder.encode_with_metrics(&raw))
            .map_err(value_error)?;
        Ok((to_dict(py, &text)?, metrics.into()))
    }

    fn __repr__(&self) -> String {
        let cfg = self.encoder.config();
        format!(
            "NLELanguageObsv(preserve_blank_lines={}, cursor_heading={})",
            cfg.message.preserve_blank_lines, cfg.cursor.include_heading,
        )
    }
}

fn to_dict<'py>(py: Python<'py>, text: &TextObservation) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    for (key, value) in text.fields() {
        d.set_item(key, PyBytes::new(py, &latin1(value)))?;
    }
    Ok(d)
}
