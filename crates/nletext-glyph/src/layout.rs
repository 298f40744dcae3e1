//! Glyph numbering layout.
//!
//! NetHack packs every displayable thing into one integer space: a run of
//! monster glyphs, then pets, the invisible marker, detected monsters,
//! corpses, ridden monsters, objects, map symbols, explosions, zap beams,
//! swallow borders, warnings, and statues. [`GlyphLayout`] records the run
//! lengths and derives the start of each run, so the numbering lives in
//! exactly one place.

use crate::{cmap, monsters, objects};

/// Which run of the glyph space a code falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphRange {
    /// A monster seen normally.
    Monster,
    /// A tame monster.
    Pet,
    /// The "remembered, unseen monster" marker.
    Invisible,
    /// A monster sensed by detection.
    Detected,
    /// A corpse, one glyph per monster.
    Body,
    /// A monster being ridden.
    Ridden,
    /// An object.
    Object,
    /// A map symbol (terrain, traps, beams).
    Cmap,
    /// A cell of an explosion.
    Explosion,
    /// A cell of a zap beam.
    Zap,
    /// A border cell while swallowed.
    Swallow,
    /// A warning level.
    Warning,
    /// A statue, one glyph per monster.
    Statue,
}

/// One run of the glyph space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSpan {
    /// Which run this is.
    pub range: GlyphRange,
    /// First code of the run.
    pub start: u16,
    /// Number of codes in the run.
    pub len: u16,
}

impl GlyphSpan {
    /// One past the last code of the run.
    pub fn end(&self) -> u16 {
        self.start + self.len
    }
}

/// Run lengths of the glyph space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphLayout {
    /// Number of monster species.
    pub monsters: u16,
    /// Number of object kinds.
    pub objects: u16,
    /// Map symbols that have their own glyph (explosion symbols excluded).
    pub cmap: u16,
    /// Cells per explosion (3x3).
    pub explosion_cells: u16,
    /// Kinds of explosion.
    pub explosion_kinds: u16,
    /// Beam shapes per zap kind.
    pub zap_shapes: u16,
    /// Kinds of zap.
    pub zap_kinds: u16,
    /// Border cells per swallowing monster.
    pub swallow_cells: u16,
    /// Warning levels.
    pub warning_levels: u16,
}

/// Number of runs in the layout.
pub const SPAN_COUNT: usize = 13;

impl GlyphLayout {
    /// NetHack 3.6 numbering as compiled into the learning environment.
    pub const NETHACK_3_6: GlyphLayout = GlyphLayout {
        monsters: monsters::NUM_MONSTERS as u16,
        objects: objects::NUM_OBJECTS as u16,
        cmap: cmap::NUM_CMAP as u16,
        explosion_cells: cmap::EXPLOSION_CELLS.len() as u16,
        explosion_kinds: 7,
        zap_shapes: cmap::ZAP_SHAPES.len() as u16,
        zap_kinds: 8,
        swallow_cells: cmap::SWALLOW_CELLS.len() as u16,
        warning_levels: cmap::WARNING_LEVELS.len() as u16,
    };

    /// All runs in code order.
    pub fn spans(&self) -> [GlyphSpan; SPAN_COUNT] {
        let runs = [
            (GlyphRange::Monster, self.monsters),
            (GlyphRange::Pet, self.monsters),
            (GlyphRange::Invisible, 1),
            (GlyphRange::Detected, self.monsters),
            (GlyphRange::Body, self.monsters),
            (GlyphRange::Ridden, self.monsters),
            (GlyphRange::Object, self.objects),
            (GlyphRange::Cmap, self.cmap),
            (
                GlyphRange::Explosion,
                self.explosion_cells * self.explosion_kinds,
            ),
            (GlyphRange::Zap, self.zap_shapes * self.zap_kinds),
            (GlyphRange::Swallow, self.swallow_cells * self.monsters),
            (GlyphRange::Warning, self.warning_levels),
            (GlyphRange::Statue, self.monsters),
        ];
        let mut start = 0u16;
        runs.map(|(range, len)| {
            let span = GlyphSpan { range, start, len };
            start += len;
            span
        })
    }

    /// Start of `range`.
    pub fn start_of(&self, range: GlyphRange) -> u16 {
        self.spans()
            .iter()
            .find(|s| s.range == range)
            .map_or(0, |s| s.start)
    }

    /// Total number of glyph codes (`MAX_GLYPH`).
    pub fn max_glyph(&self) -> u16 {
        self.spans()[SPAN_COUNT - 1].end()
    }

    /// The run containing `code` and the code's offset within it.
    pub fn locate(&self, code: u16) -> Option<(GlyphRange, u16)> {
        let spans = self.spans();
        let idx = spans.partition_point(|s| s.end() <= code);
        spans
            .get(idx)
            .filter(|s| code >= s.start)
            .map(|s| (s.range, code - s.start))
    }
}
