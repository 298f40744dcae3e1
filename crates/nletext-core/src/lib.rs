//! Core types for the nletext NetHack observation encoder.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the borrowed input views every translation section reads from
//! (glyph grid, status vector, terminal grid, inventory arrays, cursor),
//! the [`TextObservation`] output record, and the shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod inventory;
pub mod observation;
pub mod status;

pub use error::{BoundsError, ClassificationError, EncodeError};
pub use grid::{GlyphGrid, TerminalGrid, MAP_COLS, MAP_ROWS, TERMINAL_COLS, TERMINAL_ROWS};
pub use id::{GlyphCode, MapPos, TtyCursor};
pub use inventory::{decode_cstr, InventoryEntry, InventoryView};
pub use observation::{RawObservation, TextObservation};
pub use status::{StatusField, StatusVector};
