//! Text sections of a NetHack observation.
//!
//! Each section reads one part of the raw observation and renders it as
//! English:
//!
//! - [`SpatialDescriber`]: what is around the player, grouped by name,
//!   distance tier, and compass bearing.
//! - [`ScreenTextExtractor`]: the message line or pop-up menu, with map
//!   rendering filtered out.
//! - [`StatsFormatter`]: the bottom-line status vector.
//! - [`InventoryFormatter`]: the inventory letters and descriptions.
//! - [`CursorDescriber`]: what the cursor is on.
//!
//! All sections are pure functions of their input; none keeps state
//! between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod inventory;
pub mod message;
pub mod stats;
pub mod surroundings;

pub use cursor::{CursorConfig, CursorDescriber, OffMapCursor};
pub use inventory::InventoryFormatter;
pub use message::{MessageConfig, ScreenTextExtractor};
pub use stats::StatsFormatter;
pub use surroundings::{Sighting, SpatialDescriber, SurroundingsConfig};
