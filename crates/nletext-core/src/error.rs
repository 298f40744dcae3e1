//! Error types for the nletext encoder.
//!
//! Classification failures (a glyph code outside the catalog) and bounds
//! failures (a coordinate or status slot outside its array) are kept as
//! separate enums so callers can tell a corrupt observation apart from a
//! layout mismatch. [`EncodeError`] unifies both for the encoder facade.

use std::error::Error;
use std::fmt;

use crate::id::{GlyphCode, MapPos};
use crate::status::StatusField;

/// A glyph code has no entry in the glyph catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassificationError {
    /// The code is negative or not below the catalog's glyph count.
    UnknownGlyph {
        /// The offending code.
        code: GlyphCode,
        /// Number of glyphs the catalog knows (valid codes are `0..max`).
        max: u16,
    },
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGlyph { code, max } => {
                write!(f, "glyph {code} is outside the catalog range 0..{max}")
            }
        }
    }
}

impl Error for ClassificationError {}

/// A coordinate, shape, or index does not fit the array it addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// A flat buffer's length does not match the declared 2D shape.
    ShapeMismatch {
        /// Which input was malformed (e.g. `"glyphs"`).
        what: &'static str,
        /// `rows * cols` as declared.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// The player position read from the status vector lies off the map.
    PlayerOutOfBounds {
        /// The position read from the status vector.
        pos: MapPos,
        /// Map rows.
        rows: usize,
        /// Map columns.
        cols: usize,
    },
    /// The cursor lies off the map.
    CursorOutOfBounds {
        /// The cursor position in map coordinates.
        pos: MapPos,
        /// Map rows.
        rows: usize,
        /// Map columns.
        cols: usize,
    },
    /// The terminal cursor sits on a row with no map counterpart
    /// (the message line, or a negative coordinate).
    CursorOffMap {
        /// Raw terminal row.
        row: i64,
        /// Raw terminal column.
        col: i64,
    },
    /// The status vector is too short for the requested slot.
    StatusIndex {
        /// The slot that was requested.
        field: StatusField,
        /// Length of the supplied status vector.
        len: usize,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{what}: buffer holds {actual} elements, shape requires {expected}"
            ),
            Self::PlayerOutOfBounds { pos, rows, cols } => {
                write!(f, "player position {pos} outside {rows}x{cols} map")
            }
            Self::CursorOutOfBounds { pos, rows, cols } => {
                write!(f, "cursor position {pos} outside {rows}x{cols} map")
            }
            Self::CursorOffMap { row, col } => {
                write!(f, "terminal cursor ({row}, {col}) has no map position")
            }
            Self::StatusIndex { field, len } => write!(
                f,
                "status slot {field:?} (index {}) missing from vector of length {len}",
                field.index()
            ),
        }
    }
}

impl Error for BoundsError {}

/// Any failure while encoding one observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// A glyph could not be classified.
    Classification(ClassificationError),
    /// An input did not fit its declared bounds.
    Bounds(BoundsError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classification(e) => write!(f, "classification: {e}"),
            Self::Bounds(e) => write!(f, "bounds: {e}"),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Classification(e) => Some(e),
            Self::Bounds(e) => Some(e),
        }
    }
}

impl From<ClassificationError> for EncodeError {
    fn from(e: ClassificationError) -> Self {
        Self::Classification(e)
    }
}

impl From<BoundsError> for EncodeError {
    fn from(e: BoundsError) -> Self {
        Self::Bounds(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_glyph_message_names_range() {
        let e = ClassificationError::UnknownGlyph {
            code: GlyphCode(9000),
            max: 5976,
        };
        assert_eq!(e.to_string(), "glyph 9000 is outside the catalog range 0..5976");
    }

    #[test]
    fn encode_error_exposes_source() {
        let e: EncodeError = BoundsError::StatusIndex {
            field: StatusField::Alignment,
            len: 3,
        }
        .into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("bounds: "));
        assert!(e.to_string().contains("index 26"));
    }

    #[test]
    fn cursor_off_map_display() {
        let e = BoundsError::CursorOffMap { row: 0, col: 12 };
        assert_eq!(e.to_string(), "terminal cursor (0, 12) has no map position");
    }
}
