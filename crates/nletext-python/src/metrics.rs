//! EncodeMetrics: Python view of per-observation encoder timings.

use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Per-observation encoding metrics.
#[pyclass(frozen)]
pub(crate) struct EncodeMetrics {
    inner: nletext_engine::EncodeMetrics,
}

impl From<nletext_engine::EncodeMetrics> for EncodeMetrics {
    fn from(inner: nletext_engine::EncodeMetrics) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl EncodeMetrics {
    /// Wall-clock time for the whole observation, in microseconds.
    #[getter]
    fn total_us(&self) -> u64 {
        self.inner.total_us
    }

    /// Time spent on the surroundings text, in microseconds.
    #[getter]
    fn glyphs_us(&self) -> u64 {
        self.inner.glyphs_us
    }

    /// Time spent extracting the message, in microseconds.
    #[getter]
    fn message_us(&self) -> u64 {
        self.inner.message_us
    }

    /// Time spent on the status text, in microseconds.
    #[getter]
    fn blstats_us(&self) -> u64 {
        self.inner.blstats_us
    }

    /// Time spent on the inventory text, in microseconds.
    #[getter]
    fn inventory_us(&self) -> u64 {
        self.inner.inventory_us
    }

    /// Time spent on the cursor text, in microseconds.
    #[getter]
    fn cursor_us(&self) -> u64 {
        self.inner.cursor_us
    }

    /// Combined length of the five strings, in bytes.
    #[getter]
    fn output_bytes(&self) -> usize {
        self.inner.output_bytes
    }

    /// Convert to a plain Python dict.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let m = &self.inner;
        let d = PyDict::new(py);
        d.set_item("total_us", m.total_us)?;
        d.set_item("glyphs_us", m.glyphs_us)?;
        d.set_item("message_us", m.message_us)?;
        d.set_item("blstats_us", m.blstats_us)?;
        d.set_item("inventory_us", m.inventory_us)?;
        d.set_item("cursor_us", m.cursor_us)?;
        d.set_item("output_bytes", m.output_bytes)?;
        Ok(d)
    }

    fn __repr__(&self) -> String {
        format!(
            "EncodeMetrics(total={}us, sections={}us, bytes={})",
            self.inner.total_us,
            self.inner.sections_us(),
            self.inner.output_bytes,
        )
    }
}
