//! NetHack glyph catalog.
//!
//! Maps every glyph code of the NetHack 3.6 numbering (as compiled into
//! the learning environment) to a [`GlyphDescriptor`]: a category, an
//! English base name, and the grammatical flags the text generator needs
//! to decide whether and how to pluralize.
//!
//! The numbering is kept in one place, [`GlyphLayout`], as a sorted
//! interval table. Name tables for monsters, objects, and map symbols are
//! plain `const` data. The [`GlyphCatalog`] expands them once into a
//! dense descriptor table shared by every encoder.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod cmap;
pub mod descriptor;
pub mod layout;
pub mod monsters;
pub mod objects;
pub mod plural;

pub use catalog::GlyphCatalog;
pub use descriptor::{GlyphCategory, GlyphDescriptor, ObjectClass, Salience, TerrainKind};
pub use layout::{GlyphLayout, GlyphRange, GlyphSpan};
pub use plural::pluralize;
