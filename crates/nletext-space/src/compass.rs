//! Sixteen-point bearings and distance tiers.
//!
//! Offsets are `(d_row, d_col)` with rows growing southwards and columns
//! growing eastwards, matching the map grid. Angles are measured clockwise
//! from north; each bearing owns a 22.5° sector centred on its direction.

use std::fmt;

use crate::error::SpaceError;

// ── Bearing ─────────────────────────────────────────────────────

/// One of the sixteen compass points, in clockwise order from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bearing {
    /// N
    North,
    /// NNE
    NorthNorthEast,
    /// NE
    NorthEast,
    /// ENE
    EastNorthEast,
    /// E
    East,
    /// ESE
    EastSouthEast,
    /// SE
    SouthEast,
    /// SSE
    SouthSouthEast,
    /// S
    South,
    /// SSW
    SouthSouthWest,
    /// SW
    SouthWest,
    /// WSW
    WestSouthWest,
    /// W
    West,
    /// WNW
    WestNorthWest,
    /// NW
    NorthWest,
    /// NNW
    NorthNorthWest,
}

const SECTOR_DEGREES: f64 = 360.0 / 16.0;

impl Bearing {
    /// All bearings, clockwise from north.
    pub const ALL: [Bearing; 16] = [
        Self::North,
        Self::NorthNorthEast,
        Self::NorthEast,
        Self::EastNorthEast,
        Self::East,
        Self::EastSouthEast,
        Self::SouthEast,
        Self::SouthSouthEast,
        Self::South,
        Self::SouthSouthWest,
        Self::SouthWest,
        Self::WestSouthWest,
        Self::West,
        Self::WestNorthWest,
        Self::NorthWest,
        Self::NorthNorthWest,
    ];

    /// Position in clockwise order, north = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The bearing's word, e.g. `"westsouthwest"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthNorthEast => "northnortheast",
            Self::NorthEast => "northeast",
            Self::EastNorthEast => "eastnortheast",
            Self::East => "east",
            Self::EastSouthEast => "eastsoutheast",
            Self::SouthEast => "southeast",
            Self::SouthSouthEast => "southsoutheast",
            Self::South => "south",
            Self::SouthSouthWest => "southsouthwest",
            Self::SouthWest => "southwest",
            Self::WestSouthWest => "westsouthwest",
            Self::West => "west",
            Self::WestNorthWest => "westnorthwest",
            Self::NorthWest => "northwest",
            Self::NorthNorthWest => "northnorthwest",
        }
    }

    /// Bearing of an offset, or `None` for `(0, 0)`.
    pub fn from_offset(d_row: i64, d_col: i64) -> Option<Bearing> {
        if d_row == 0 && d_col == 0 {
            return None;
        }
        // atan2(east, north) is the clockwise angle from north.
        let degrees = (d_col as f64).atan2(-(d_row as f64)).to_degrees();
        let degrees = degrees.rem_euclid(360.0);
        let sector = ((degrees + SECTOR_DEGREES / 2.0) / SECTOR_DEGREES) as usize % 16;
        Some(Self::ALL[sector])
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── DistanceTier ────────────────────────────────────────────────

/// Coarse distance bucket, nearest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceTier {
    /// Touching the player.
    Adjacent,
    /// A few steps away.
    VeryNear,
    /// Within the same room, roughly.
    Near,
    /// Across the map section.
    Far,
    /// Everything beyond.
    VeryFar,
}

impl DistanceTier {
    /// All tiers, nearest first.
    pub const ALL: [DistanceTier; 5] = [
        Self::Adjacent,
        Self::VeryNear,
        Self::Near,
        Self::Far,
        Self::VeryFar,
    ];

    /// The tier's words, e.g. `"very near"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Adjacent => "adjacent",
            Self::VeryNear => "very near",
            Self::Near => "near",
            Self::Far => "far",
            Self::VeryFar => "very far",
        }
    }
}

impl fmt::Display for DistanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── TierThresholds ──────────────────────────────────────────────

/// Exclusive upper bounds on Euclidean distance for each tier.
///
/// A distance below `adjacent` is [`DistanceTier::Adjacent`], below
/// `very_near` is [`DistanceTier::VeryNear`], and so on; anything at or
/// beyond `far` is [`DistanceTier::VeryFar`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierThresholds {
    /// Default: 2.0 (the eight touching cells, diagonal √2 included).
    pub adjacent: f64,
    /// Default: 4.5.
    pub very_near: f64,
    /// Default: 6.0.
    pub near: f64,
    /// Default: 20.5.
    pub far: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            adjacent: 2.0,
            very_near: 4.5,
            near: 6.0,
            far: 20.5,
        }
    }
}

impl TierThresholds {
    /// Check the bounds are finite, positive, and strictly increasing.
    pub fn validate(&self) -> Result<(), SpaceError> {
        let bounds = self.bounds();
        if let Some(bad) = bounds.iter().find(|b| !b.is_finite() || **b <= 0.0) {
            return Err(SpaceError::InvalidThresholds {
                reason: format!("bound {bad} is not a finite positive distance"),
            });
        }
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpaceError::InvalidThresholds {
                reason: format!("bounds {bounds:?} are not strictly increasing"),
            });
        }
        Ok(())
    }

    /// Tier of a Euclidean distance.
    pub fn tier(&self, distance: f64) -> DistanceTier {
        self.bounds()
            .iter()
            .position(|&bound| distance < bound)
            .map_or(DistanceTier::VeryFar, |i| DistanceTier::ALL[i])
    }

    fn bounds(&self) -> [f64; 4] {
        [self.adjacent, self.very_near, self.near, self.far]
    }
}

// ── Heading ─────────────────────────────────────────────────────

/// Where something is, relative to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Heading {
    /// Compass bearing.
    pub bearing: Bearing,
    /// Distance bucket.
    pub tier: DistanceTier,
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tier, self.bearing)
    }
}

// ── CompassResolver ─────────────────────────────────────────────

/// Resolves map offsets into [`Heading`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompassResolver {
    thresholds: TierThresholds,
}

impl CompassResolver {
    /// Create a resolver, validating `thresholds`.
    pub fn new(thresholds: TierThresholds) -> Result<Self, SpaceError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds in use.
    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Tier of an offset. `(0, 0)` is adjacent.
    pub fn tier(&self, d_row: i64, d_col: i64) -> DistanceTier {
        self.thresholds.tier((d_row as f64).hypot(d_col as f64))
    }

    /// Heading of the offset `(d_row, d_col)`.
    pub fn resolve(&self, d_row: i64, d_col: i64) -> Result<Heading, SpaceError> {
        let bearing = Bearing::from_offset(d_row, d_col).ok_or(SpaceError::ZeroOffset)?;
        Ok(Heading {
            bearing,
            tier: self.tier(d_row, d_col),
        })
    }
}
