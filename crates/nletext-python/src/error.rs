//! Encoder errors -> Python exceptions.
//!
//! Every failure the encoder reports is a problem with the caller's
//! arrays or settings, so all of them surface as `ValueError`.

use std::fmt::Display;

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Wrap any displayable error as a `ValueError` carrying its message.
pub(crate) fn value_error(e: impl Display) -> PyErr {
    PyValueError::new_err(format!("nletext: {e}"))
}
