//! Map symbol names and the fixed vocabularies of the effect runs.

use crate::descriptor::GlyphCategory::{self, AmbientFill, Terrain};
use crate::descriptor::TerrainKind::{Effect, Feature, Floor, Opening, Trap, Wall};

/// Map symbols with their own glyph.
pub const NUM_CMAP: usize = 87;

/// Map symbols in glyph order: display name and category.
pub const CMAP: [(&str, GlyphCategory); NUM_CMAP] = [
    ("dark area", AmbientFill),
    ("vertical wall", Terrain(Wall)),
    ("horizontal wall", Terrain(Wall)),
    ("northwest room corner", Terrain(Wall)),
    ("northeast room corner", Terrain(Wall)),
    ("southwest corner", Terrain(Wall)),
    ("southeast corner", Terrain(Wall)),
    ("cross wall", Terrain(Wall)),
    ("t up wall", Terrain(Wall)),
    ("t down wall", Terrain(Wall)),
    ("t west wall", Terrain(Wall)),
    ("t east wall", Terrain(Wall)),
    ("doorway", Terrain(Opening)),
    ("vertical open door", Terrain(Opening)),
    ("horizontal open door", Terrain(Opening)),
    ("vertical closed door", Terrain(Feature)),
    ("horizontal closed door", Terrain(Feature)),
    ("bars", Terrain(Feature)),
    ("tree", Terrain(Feature)),
    ("room floor", Terrain(Floor)),
    ("dark room floor", Terrain(Floor)),
    ("corridor floor", Terrain(Floor)),
    ("lit corridor floor", Terrain(Floor)),
    ("stairs up", Terrain(Feature)),
    ("stairs down", Terrain(Feature)),
    ("ladder up", Terrain(Feature)),
    ("ladder down", Terrain(Feature)),
    ("altar", Terrain(Feature)),
    ("grave", Terrain(Feature)),
    ("throne", Terrain(Feature)),
    ("sink", Terrain(Feature)),
    ("fountain", Terrain(Feature)),
    ("pool", Terrain(Feature)),
    ("ice", Terrain(Feature)),
    ("lava", Terrain(Feature)),
    ("vertical lowered drawbridge", Terrain(Opening)),
    ("horizontal lowered drawbridge", Terrain(Opening)),
    ("vertical raised drawbridge", Terrain(Feature)),
    ("horizontal raised drawbridge", Terrain(Feature)),
    ("air floor", Terrain(Opening)),
    ("cloud floor", Terrain(Opening)),
    ("water floor", Terrain(Opening)),
    ("arrow trap", Terrain(Trap)),
    ("dart trap", Terrain(Trap)),
    ("falling rock trap", Terrain(Trap)),
    ("squeaky board", Terrain(Trap)),
    ("bear trap", Terrain(Trap)),
    ("land mine", Terrain(Trap)),
    ("rolling boulder trap", Terrain(Trap)),
    ("sleeping gas trap", Terrain(Trap)),
    ("rust trap", Terrain(Trap)),
    ("fire trap", Terrain(Trap)),
    ("pit", Terrain(Trap)),
    ("spiked pit", Terrain(Trap)),
    ("hole", Terrain(Trap)),
    ("trap door", Terrain(Trap)),
    ("teleportation trap", Terrain(Trap)),
    ("level teleporter", Terrain(Trap)),
    ("magic portal", Terrain(Trap)),
    ("web", Terrain(Trap)),
    ("statue trap", Terrain(Trap)),
    ("magic trap", Terrain(Trap)),
    ("anti magic trap", Terrain(Trap)),
    ("polymorph trap", Terrain(Trap)),
    ("vibrating square", Terrain(Trap)),
    ("vertical beam", Terrain(Effect)),
    ("horizontal beam", Terrain(Effect)),
    ("left slant beam", Terrain(Effect)),
    ("right slant beam", Terrain(Effect)),
    ("dig beam", Terrain(Effect)),
    ("flash beam", Terrain(Effect)),
    ("boom left", Terrain(Effect)),
    ("boom right", Terrain(Effect)),
    ("shield 1", Terrain(Effect)),
    ("shield 2", Terrain(Effect)),
    ("shield 3", Terrain(Effect)),
    ("shield 4", Terrain(Effect)),
    ("poison cloud", Terrain(Effect)),
    ("valid position", Terrain(Effect)),
    ("swallow top left", Terrain(Effect)),
    ("swallow top center", Terrain(Effect)),
    ("swallow top right", Terrain(Effect)),
    ("swallow middle left", Terrain(Effect)),
    ("swallow middle right", Terrain(Effect)),
    ("swallow bottom left", Terrain(Effect)),
    ("swallow bottom center", Terrain(Effect)),
    ("swallow bottom right", Terrain(Effect)),
];

/// Explosion cells, row by row over the 3x3 blast.
pub const EXPLOSION_CELLS: [&str; 9] = [
    "explosion top left",
    "explosion top center",
    "explosion top right",
    "explosion middle left",
    "explosion middle center",
    "explosion middle right",
    "explosion bottom left",
    "explosion bottom center",
    "explosion bottom right",
];

/// Beam shapes of one zap kind.
pub const ZAP_SHAPES: [&str; 4] = [
    "horizontal zap beam",
    "vertical zap beam",
    "left slant zap beam",
    "right slant zap beam",
];

/// Border cells around a swallowed player.
pub const SWALLOW_CELLS: [&str; 8] = [
    "swallow top left",
    "swallow top center",
    "swallow top right",
    "swallow middle left",
    "swallow middle right",
    "swallow bottom left",
    "swallow bottom center",
    "swallow bottom right",
];

/// Warning levels, weakest first.
pub const WARNING_LEVELS: [&str; 6] = [
    "unknown creature causing you worry",
    "unknown creature causing you concern",
    "unknown creature causing you anxiety",
    "unknown creature causing you disquiet",
    "unknown creature causing you alarm",
    "unknown creature causing you dread",
];
