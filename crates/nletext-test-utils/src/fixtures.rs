//! Canonical observation scenes.
//!
//! - [`monk_scene`]: a monk in the dark next to a closed door, a fountain
//!   up the corridor and a pet far to the southwest.
//! - [`multi_monster_scene`]: the same layout with extra pets and a
//!   second fountain, for grouping.
//! - [`floor_scene`]: a lit room with nothing in it but the player.

use nletext_core::StatusField;

use crate::OwnedObservation;

/// Glyph codes used by the fixtures (NetHack 3.6 numbering).
pub mod glyph {
    pub const LITTLE_DOG: i16 = 16;
    pub const PONY: i16 = 99;
    pub const MONKEY: i16 = 229;
    pub const ELF: i16 = 260;
    pub const MONK: i16 = 333;
    pub const PRIESTESS: i16 = 335;
    pub const WIZARD: i16 = 341;
    pub const IXOTH: i16 = 359;
    pub const TAME_LITTLE_DOG: i16 = 397;
    pub const QUARTERSTAFF: i16 = 1967;
    pub const DARK_AREA: i16 = 2359;
    pub const VERTICAL_WALL: i16 = 2360;
    pub const HORIZONTAL_WALL: i16 = 2361;
    pub const VERTICAL_CLOSED_DOOR: i16 = 2374;
    pub const ROOM_FLOOR: i16 = 2378;
    pub const FOUNTAIN: i16 = 2390;
    pub const LAVA: i16 = 2393;
}

/// Player row in every scene.
pub const PLAYER_ROW: usize = 14;
/// Player column in every scene.
pub const PLAYER_COL: usize = 66;

/// The welcome line on the message row.
pub const WELCOME: &str = "Hello Agent, welcome to NetHack!  You are a neutral gnomish Caveman.";

/// Status slots of the monk scene, in slot order.
pub const MONK_BLSTATS: [i64; StatusField::COUNT] = [
    66, 14, 19, 1, 4, 5, 6, 7, 8, 123, 11, 12, 9, 10, 1, 13, 1, 23, 7, 10, 5, 4, 2, 21, 10, 11,
    -1,
];

/// Inventory of the monk scene.
pub const MONK_INVENTORY: [(char, &str); 2] = [
    ('a', "a blessed +1 quarterstaff (weapon in hands)"),
    ('b', "an uncursed +0 cloak of magic resistance (being worn)"),
];

fn common_scene(player_glyph: i16) -> OwnedObservation {
    let mut obs = OwnedObservation::filled(glyph::DARK_AREA);
    obs.set_glyph(PLAYER_ROW, PLAYER_COL, player_glyph)
        .set_glyph(10, 65, glyph::VERTICAL_WALL)
        .set_glyph(9, 64, glyph::FOUNTAIN)
        .set_glyph(13, 66, glyph::VERTICAL_CLOSED_DOOR)
        .set_glyph(20, 50, glyph::TAME_LITTLE_DOG)
        .set_tty_lines(&[WELCOME], 0)
        .set_inventory(&MONK_INVENTORY)
        .set_cursor(PLAYER_ROW as i64 + 1, PLAYER_COL as i64);
    obs.blstats = MONK_BLSTATS.to_vec();
    obs
}

/// A monk at (14, 66) in the dark.
pub fn monk_scene() -> OwnedObservation {
    common_scene(glyph::MONK)
}

/// The monk layout with three pets and two fountains.
pub fn multi_monster_scene() -> OwnedObservation {
    let mut obs = common_scene(glyph::IXOTH);
    obs.set_glyph(14, 18, glyph::TAME_LITTLE_DOG)
        .set_glyph(20, 51, glyph::TAME_LITTLE_DOG)
        .set_glyph(9, 63, glyph::FOUNTAIN);
    obs
}

/// A lit room of floor with the player at (14, 66) standing on floor.
pub fn floor_scene() -> OwnedObservation {
    let mut obs = monk_scene();
    obs.fill_glyphs(glyph::ROOM_FLOOR);
    obs
}
