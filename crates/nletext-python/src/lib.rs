//! Python bindings for the nletext observation encoder.
//!
//! The native extension is named `_nletext`. It exposes
//! `NLELanguageObsv`, which takes the raw NetHack observation arrays as
//! NumPy arrays and returns Latin-1 `bytes` for each text section.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use pyo3::prelude::*;

mod arrays;
mod error;
mod language;
mod metrics;

/// The native `_nletext` extension module.
#[pymodule]
fn _nletext(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<language::NLELanguageObsv>()?;
    m.add_class::<metrics::EncodeMetrics>()?;
    Ok(())
}
