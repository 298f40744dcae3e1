//! Benchmark profiles for the nletext observation encoder.
//!
//! Provides pre-built observations for benchmarking:
//!
//! - [`reference_dungeon`]: one lit room with a handful of monsters and items
//! - [`crowded_dungeon`]: the same room packed with things, so the
//!   surroundings text has many groups
//! - [`scatter_positions`]: deterministic cell placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use nletext_test_utils::fixtures::{glyph, monk_scene, PLAYER_COL, PLAYER_ROW};
use nletext_test_utils::OwnedObservation;

/// Room bounds `(top, left, bottom, right)`, walls inclusive.
const ROOM: (usize, usize, usize, usize) = (8, 50, 20, 76);

/// Glyphs scattered inside the room.
const PALETTE: [i16; 10] = [
    glyph::LITTLE_DOG,
    glyph::PONY,
    glyph::MONKEY,
    glyph::ELF,
    glyph::WIZARD,
    glyph::QUARTERSTAFF,
    glyph::FOUNTAIN,
    glyph::LAVA,
    2316, // gold piece
    2353, // boulder
];

/// Build the reference profile: a walled room around the player holding
/// 12 scattered monsters and items.
pub fn reference_dungeon(seed: u64) -> OwnedObservation {
    dungeon(12, seed)
}

/// Build the stress profile: the reference room holding 120 things.
pub fn crowded_dungeon(seed: u64) -> OwnedObservation {
    dungeon(120, seed)
}

fn dungeon(things: usize, seed: u64) -> OwnedObservation {
    let (top, left, bottom, right) = ROOM;
    let mut obs = monk_scene();
    for row in top..=bottom {
        for col in left..=right {
            let code = if row == top || row == bottom {
                glyph::HORIZONTAL_WALL
            } else if col == left || col == right {
                glyph::VERTICAL_WALL
            } else if (row, col) == (PLAYER_ROW, PLAYER_COL) {
                continue;
            } else {
                glyph::ROOM_FLOOR
            };
            obs.set_glyph(row, col, code);
        }
    }

    let (rows, cols) = (bottom - top - 1, right - left - 1);
    let interior = scatter_positions(rows * cols, things, seed);
    for (i, idx) in interior.into_iter().enumerate() {
        let (row, col) = (top + 1 + idx / cols, left + 1 + idx % cols);
        if (row, col) != (PLAYER_ROW, PLAYER_COL) {
            obs.set_glyph(row, col, PALETTE[i % PALETTE.len()]);
        }
    }
    obs
}

/// Generate `n` distinct deterministic indices below `cell_count`.
///
/// Uses a simple hash of the seed with linear probing on collision.
/// `n` is capped at `cell_count`.
pub fn scatter_positions(cell_count: usize, n: usize, seed: u64) -> Vec<usize> {
    let n = n.min(cell_count);
    let mut positions = Vec::with_capacity(n);
    let mut occupied = HashSet::new();

    for i in 0..n as u64 {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i + 1).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        positions.push(pos);
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_build_valid_views() {
        reference_dungeon(42).view().unwrap();
        crowded_dungeon(42).view().unwrap();
    }

    #[test]
    fn player_is_inside_the_room() {
        let (top, left, bottom, right) = ROOM;
        assert!((top + 1..bottom).contains(&PLAYER_ROW));
        assert!((left + 1..right).contains(&PLAYER_COL));
        let obs = reference_dungeon(7);
        assert_eq!(
            obs.glyphs[PLAYER_ROW * obs.glyph_cols + PLAYER_COL],
            glyph::MONK
        );
    }

    #[test]
    fn room_walls_use_their_orientation() {
        let (top, left, bottom, right) = ROOM;
        let obs = crowded_dungeon(3);
        let at = |row: usize, col: usize| obs.glyphs[row * obs.glyph_cols + col];
        assert_eq!(at(top, left + 3), glyph::HORIZONTAL_WALL);
        assert_eq!(at(bottom, right - 3), glyph::HORIZONTAL_WALL);
        assert_eq!(at(top + 2, left), glyph::VERTICAL_WALL);
        assert_eq!(at(bottom - 2, right), glyph::VERTICAL_WALL);
        assert_eq!(at(PLAYER_ROW, PLAYER_COL), glyph::MONK);
    }

    #[test]
    fn scatter_positions_no_collisions() {
        let positions = scatter_positions(100, 10, 42);
        assert_eq!(positions.len(), 10);
        let unique: HashSet<usize> = positions.iter().copied().collect();
        assert_eq!(unique.len(), 10, "all positions should be unique");
        assert!(positions.iter().all(|&p| p < 100));
    }

    #[test]
    fn scatter_positions_deterministic_and_capped() {
        assert_eq!(scatter_positions(1000, 5, 42), scatter_positions(1000, 5, 42));
        assert_eq!(scatter_positions(4, 10, 1).len(), 4);
    }
}
