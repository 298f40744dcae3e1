//! Sweeps every offset reachable on a full-size map.

use nletext_core::{MAP_COLS, MAP_ROWS};
use nletext_space::{Bearing, CompassResolver, DistanceTier};

fn offsets() -> impl Iterator<Item = (i64, i64)> {
    let rows = MAP_ROWS as i64;
    let cols = MAP_COLS as i64;
    (-(rows - 1)..rows).flat_map(move |dr| (-(cols - 1)..cols).map(move |dc| (dr, dc)))
}

#[test]
fn every_nonzero_offset_resolves() {
    let compass = CompassResolver::default();
    for (dr, dc) in offsets().filter(|&o| o != (0, 0)) {
        assert!(compass.resolve(dr, dc).is_ok(), "({dr}, {dc})");
    }
}

#[test]
fn axis_offsets_use_cardinal_bearings() {
    for n in 1..MAP_ROWS as i64 {
        assert_eq!(Bearing::from_offset(-n, 0), Some(Bearing::North));
        assert_eq!(Bearing::from_offset(n, 0), Some(Bearing::South));
    }
    for n in 1..MAP_COLS as i64 {
        assert_eq!(Bearing::from_offset(0, n), Some(Bearing::East));
        assert_eq!(Bearing::from_offset(0, -n), Some(Bearing::West));
    }
}

#[test]
fn every_tier_occurs_on_the_map() {
    let compass = CompassResolver::default();
    for tier in DistanceTier::ALL {
        assert!(
            offsets()
                .filter(|&o| o != (0, 0))
                .any(|(dr, dc)| compass.tier(dr, dc) == tier),
            "{tier} never occurs"
        );
    }
}
