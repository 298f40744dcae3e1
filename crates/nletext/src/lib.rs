//! nletext: natural-language text observations for NetHack learning
//! environments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all nletext sub-crates. For most users, adding `nletext` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use nletext::prelude::*;
//!
//! // A dark 21x79 map with a monk at row 14, column 66.
//! let mut glyphs = vec![2359i16; MAP_ROWS * MAP_COLS];
//! glyphs[14 * MAP_COLS + 66] = 333;
//! let mut blstats = [0i64; StatusField::COUNT];
//! blstats[StatusField::X.index()] = 66;
//! blstats[StatusField::Y.index()] = 14;
//! let tty_chars = vec![b' '; TERMINAL_ROWS * TERMINAL_COLS];
//!
//! let obs = RawObservation {
//!     glyphs: GlyphGrid::new(&glyphs, MAP_ROWS, MAP_COLS).unwrap(),
//!     blstats: StatusVector::new(&blstats),
//!     tty_chars: TerminalGrid::new(&tty_chars, TERMINAL_ROWS, TERMINAL_COLS).unwrap(),
//!     inventory: InventoryView::empty(),
//!     // Terminal row 15 is map row 14.
//!     tty_cursor: TtyCursor::new(15, 66),
//! };
//!
//! let encoder = ObservationEncoder::new(EncoderConfig::default()).unwrap();
//! let text = encoder.encode(&obs).unwrap();
//! assert_eq!(text.text_cursor, "Yourself a monk");
//! assert_eq!(text.text_message, "");
//! assert!(text.text_blstats.starts_with("Strength: "));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nletext-core` | Input views, `TextObservation`, error types |
//! | [`glyph`] | `nletext-glyph` | Glyph layout and the descriptor catalog |
//! | [`space`] | `nletext-space` | Compass bearings, distance tiers, rays |
//! | [`obs`] | `nletext-obs` | The individual text sections |
//! | [`engine`] | `nletext-engine` | Single and batched observation encoders |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Input views, output record, and error types (`nletext-core`).
pub use nletext_core as types;

/// Glyph numbering and descriptors (`nletext-glyph`).
///
/// [`glyph::GlyphCatalog::shared`] is the process-wide NetHack 3.6 catalog.
pub use nletext_glyph as glyph;

/// Compass geometry (`nletext-space`).
pub use nletext_space as space;

/// Text sections (`nletext-obs`).
///
/// Each formatter can be used on its own when only one section is needed.
pub use nletext_obs as obs;

/// Observation encoders (`nletext-engine`).
///
/// [`engine::ObservationEncoder`] for one observation,
/// [`engine::BatchedEncoder`] for vectorized environments.
pub use nletext_engine as engine;

/// Common imports for typical nletext usage.
///
/// ```rust
/// use nletext::prelude::*;
/// ```
pub mod prelude {
    // Input views and output
    pub use nletext_core::{
        GlyphCode, GlyphGrid, InventoryView, MapPos, RawObservation, StatusField, StatusVector,
        TerminalGrid, TextObservation, TtyCursor, MAP_COLS, MAP_ROWS, TERMINAL_COLS,
        TERMINAL_ROWS,
    };

    // Errors
    pub use nletext_core::{BoundsError, ClassificationError, EncodeError};
    pub use nletext_engine::{BatchError, ConfigError};

    // Catalog and geometry
    pub use nletext_glyph::{GlyphCatalog, GlyphCategory, GlyphDescriptor};
    pub use nletext_space::{Bearing, CompassResolver, DistanceTier, Heading, TierThresholds};

    // Encoders and configuration
    pub use nletext_engine::{
        BatchConfig, BatchedEncoder, EncodeMetrics, EncoderConfig, ObservationEncoder,
    };
    pub use nletext_obs::{CursorConfig, MessageConfig, OffMapCursor};
}
