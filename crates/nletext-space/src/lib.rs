//! Spatial vocabulary for the NetHack map.
//!
//! The [`CompassResolver`] turns a `(d_row, d_col)` offset from the player
//! into a [`Heading`]: one of sixteen compass [`Bearing`]s plus a coarse
//! [`DistanceTier`]. [`RayDirection`] and [`march`] walk the eight primary
//! directions outwards from a cell, which is how the surroundings text
//! decides what ambient terrain is in view.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compass;
pub mod error;
pub mod ray;

pub use compass::{Bearing, CompassResolver, DistanceTier, Heading, TierThresholds};
pub use error::SpaceError;
pub use ray::{march, Ray, RayDirection};
