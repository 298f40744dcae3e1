//! Semantic descriptors attached to glyph codes.

use crate::plural;

/// Object class, as in NetHack's `objects[]` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    /// The placeholder "strange object".
    Illegal,
    /// Weapons and ammunition.
    Weapon,
    /// Armor.
    Armor,
    /// Rings.
    Ring,
    /// Amulets.
    Amulet,
    /// Tools, containers, instruments.
    Tool,
    /// Comestibles.
    Food,
    /// Potions.
    Potion,
    /// Scrolls.
    Scroll,
    /// Spellbooks.
    Spellbook,
    /// Wands.
    Wand,
    /// Gold.
    Coin,
    /// Gems, glass, and gray stones.
    Gem,
    /// Rocks, boulders, and statues.
    Rock,
    /// Heavy iron balls.
    Ball,
    /// Iron chains.
    Chain,
    /// Venom splashes.
    Venom,
}

/// What kind of map symbol a terrain glyph shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    /// Walkable floor. Never narrated.
    Floor,
    /// Walls, corners, and junctions. Blocks the view.
    Wall,
    /// Doorways, open doors, lowered drawbridges, plane floors.
    Opening,
    /// Notable dungeon furniture: closed doors, stairs, fountains, ...
    Feature,
    /// A known trap.
    Trap,
    /// Beams, shields, and other transient effects drawn as map symbols.
    Effect,
}

/// How a glyph category is treated when narrating surroundings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Salience {
    /// Reported wherever it is on the map.
    Salient,
    /// Reported only close to the player.
    Ambient,
    /// Never reported.
    Hidden,
}

/// Category of a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphCategory {
    /// A monster.
    Monster,
    /// A tame monster.
    Pet,
    /// A monster being ridden.
    Ridden,
    /// A monster sensed by detection.
    Detected,
    /// The remembered-unseen-monster marker.
    Invisible,
    /// A warning level.
    Warning,
    /// A border cell while swallowed.
    Swallow,
    /// A zap beam cell.
    ZapBeam,
    /// An explosion cell.
    Explosion,
    /// A statue.
    Statue,
    /// A corpse.
    Corpse,
    /// An object of the given class.
    Object(ObjectClass),
    /// A map symbol of the given kind.
    Terrain(TerrainKind),
    /// Unlit, unexplored background.
    AmbientFill,
    /// The player's own cell.
    SelfMarker,
}

impl GlyphCategory {
    /// Narration policy for this category.
    pub fn salience(self) -> Salience {
        match self {
            Self::Terrain(TerrainKind::Floor) | Self::SelfMarker => Salience::Hidden,
            Self::Terrain(TerrainKind::Wall | TerrainKind::Opening | TerrainKind::Effect)
            | Self::AmbientFill => Salience::Ambient,
            _ => Salience::Salient,
        }
    }
}

/// Everything the text generator needs to know about one glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphDescriptor {
    /// Category of the glyph.
    pub category: GlyphCategory,
    /// Singular English name ("tame little dog", "fountain").
    pub base_name: String,
    /// Whether the name takes a distinct plural form.
    pub countable: bool,
    /// Whether the name is a mass noun ("lava"), grouped as "area of ...".
    pub mass_noun: bool,
    /// Whether the glyph stops a line of sight when marching outwards.
    pub blocks_view: bool,
}

impl GlyphDescriptor {
    /// Build a descriptor, deriving the grammatical flags from the name.
    pub fn new(category: GlyphCategory, base_name: impl Into<String>) -> Self {
        let base_name = base_name.into();
        let mass_noun = plural::is_mass_noun(&base_name);
        let countable = !mass_noun && !plural::is_invariant(&base_name);
        let blocks_view = matches!(
            category,
            GlyphCategory::AmbientFill | GlyphCategory::Terrain(TerrainKind::Wall)
        );
        Self {
            category,
            base_name,
            countable,
            mass_noun,
            blocks_view,
        }
    }

    /// Narration policy.
    pub fn salience(&self) -> Salience {
        self.category.salience()
    }

    /// Name used for a group of several cells showing this glyph.
    pub fn plural_name(&self) -> String {
        if self.mass_noun {
            return format!("area of {}", self.base_name);
        }
        if !self.countable {
            return self.base_name.clone();
        }
        plural::pluralize(&self.base_name)
    }

    /// The same glyph seen as the player's own cell.
    ///
    /// The name becomes the self-description used by the cursor text.
    pub fn self_marker(&self) -> GlyphDescriptor {
        GlyphDescriptor {
            category: GlyphCategory::SelfMarker,
            base_name: format!("Yourself a {}", self.base_name),
            countable: false,
            mass_noun: false,
            blocks_view: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salience_partitions_categories() {
        assert_eq!(GlyphCategory::Pet.salience(), Salience::Salient);
        assert_eq!(
            GlyphCategory::Terrain(TerrainKind::Feature).salience(),
            Salience::Salient
        );
        assert_eq!(
            GlyphCategory::Terrain(TerrainKind::Trap).salience(),
            Salience::Salient
        );
        assert_eq!(
            GlyphCategory::Terrain(TerrainKind::Wall).salience(),
            Salience::Ambient
        );
        assert_eq!(GlyphCategory::AmbientFill.salience(), Salience::Ambient);
        assert_eq!(
            GlyphCategory::Terrain(TerrainKind::Floor).salience(),
            Salience::Hidden
        );
        assert_eq!(GlyphCategory::SelfMarker.salience(), Salience::Hidden);
    }

    #[test]
    fn flags_follow_name() {
        let lava = GlyphDescriptor::new(GlyphCategory::Terrain(TerrainKind::Feature), "lava");
        assert!(lava.mass_noun);
        assert!(!lava.countable);
        assert_eq!(lava.plural_name(), "area of lava");

        let boots = GlyphDescriptor::new(GlyphCategory::Object(ObjectClass::Armor), "combat boots");
        assert!(!boots.countable);
        assert_eq!(boots.plural_name(), "combat boots");

        let dog = GlyphDescriptor::new(GlyphCategory::Pet, "tame little dog");
        assert!(dog.countable);
        assert_eq!(dog.plural_name(), "tame little dogs");
    }

    #[test]
    fn only_walls_and_fill_block_view() {
        let wall = GlyphDescriptor::new(GlyphCategory::Terrain(TerrainKind::Wall), "vertical wall");
        let door = GlyphDescriptor::new(
            GlyphCategory::Terrain(TerrainKind::Feature),
            "vertical closed door",
        );
        let dark = GlyphDescriptor::new(GlyphCategory::AmbientFill, "dark area");
        assert!(wall.blocks_view);
        assert!(dark.blocks_view);
        assert!(!door.blocks_view);
    }

    #[test]
    fn self_description() {
        let monk = GlyphDescriptor::new(GlyphCategory::Monster, "monk");
        let me = monk.self_marker();
        assert_eq!(me.base_name, "Yourself a monk");
        assert_eq!(me.salience(), Salience::Hidden);
    }
}
