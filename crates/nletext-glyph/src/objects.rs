//! Object kinds in glyph order and their unidentified display names.
//!
//! Each entry carries the identified name and the unidentified appearance
//! (a weapon's "runed spear", a potion's colour, a scroll's label). The
//! display name follows what a player sees before identification.

use crate::descriptor::ObjectClass::{self, *};

/// Number of object kinds.
pub const NUM_OBJECTS: usize = 453;

/// One object kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectDef {
    /// Object class.
    pub class: ObjectClass,
    /// Identified name, if the kind has one.
    pub name: Option<&'static str>,
    /// Unidentified appearance, if any.
    pub appearance: Option<&'static str>,
}

const fn named(class: ObjectClass, name: &'static str) -> ObjectDef {
    ObjectDef {
        class,
        name: Some(name),
        appearance: None,
    }
}

const fn described(class: ObjectClass, name: &'static str, appearance: &'static str) -> ObjectDef {
    ObjectDef {
        class,
        name: Some(name),
        appearance: Some(appearance),
    }
}

const fn unnamed(class: ObjectClass, appearance: &'static str) -> ObjectDef {
    ObjectDef {
        class,
        name: None,
        appearance: Some(appearance),
    }
}

impl ObjectDef {
    /// Name shown for an unidentified object of this kind.
    pub fn display_name(&self) -> String {
        let name = self.name.unwrap_or_default();
        let appearance = self.appearance.unwrap_or_default();
        match self.class {
            Illegal | Weapon | Food | Coin | Rock | Ball | Chain => name.to_string(),
            Armor | Tool => {
                if appearance.is_empty() {
                    name.to_string()
                } else {
                    appearance.to_string()
                }
            }
            Ring => format!("{appearance} ring"),
            Amulet if appearance.contains("Amulet") => appearance.to_string(),
            Amulet => format!("{appearance} amulet"),
            Potion => format!("{appearance} potion"),
            Scroll => format!("scroll labeled {appearance}"),
            Spellbook => format!("{appearance} spellbook"),
            Wand => format!("{appearance} wand"),
            Gem if name.contains(appearance) => name.to_string(),
            Gem => format!("{appearance} {name}"),
            Venom => format!("splash of {name}"),
        }
    }
}

/// Object kinds, indexed by object number.
pub const OBJECTS: [ObjectDef; NUM_OBJECTS] = [
    // placeholder
    named(Illegal, "strange object"),
    // weapons
    named(Weapon, "arrow"),
    described(Weapon, "elven arrow", "runed arrow"),
    described(Weapon, "orcish arrow", "crude arrow"),
    named(Weapon, "silver arrow"),
    described(Weapon, "ya", "bamboo arrow"),
    named(Weapon, "crossbow bolt"),
    named(Weapon, "dart"),
    described(Weapon, "shuriken", "throwing star"),
    named(Weapon, "boomerang"),
    named(Weapon, "spear"),
    described(Weapon, "elven spear", "runed spear"),
    described(Weapon, "orcish spear", "crude spear"),
    described(Weapon, "dwarvish spear", "stout spear"),
    named(Weapon, "silver spear"),
    described(Weapon, "javelin", "throwing spear"),
    named(Weapon, "trident"),
    named(Weapon, "dagger"),
    described(Weapon, "elven dagger", "runed dagger"),
    described(Weapon, "orcish dagger", "crude dagger"),
    named(Weapon, "silver dagger"),
    named(Weapon, "athame"),
    named(Weapon, "scalpel"),
    named(Weapon, "knife"),
    named(Weapon, "stiletto"),
    named(Weapon, "worm tooth"),
    named(Weapon, "crysknife"),
    named(Weapon, "axe"),
    described(Weapon, "battle-axe", "double-headed axe"),
    named(Weapon, "short sword"),
    described(Weapon, "elven short sword", "runed short sword"),
    described(Weapon, "orcish short sword", "crude short sword"),
    described(Weapon, "dwarvish short sword", "broad short sword"),
    described(Weapon, "scimitar", "curved sword"),
    named(Weapon, "silver saber"),
    named(Weapon, "broadsword"),
    described(Weapon, "elven broadsword", "runed broadsword"),
    named(Weapon, "long sword"),
    named(Weapon, "two-handed sword"),
    described(Weapon, "katana", "samurai sword"),
    described(Weapon, "tsurugi", "long samurai sword"),
    described(Weapon, "runesword", "runed broadsword"),
    described(Weapon, "partisan", "vulgar polearm"),
    described(Weapon, "ranseur", "hilted polearm"),
    described(Weapon, "spetum", "forked polearm"),
    described(Weapon, "glaive", "single-edged polearm"),
    named(Weapon, "lance"),
    described(Weapon, "halberd", "angled poleaxe"),
    described(Weapon, "bardiche", "long poleaxe"),
    described(Weapon, "voulge", "pole cleaver"),
    described(Weapon, "dwarvish mattock", "broad pick"),
    described(Weapon, "fauchard", "pole sickle"),
    described(Weapon, "guisarme", "pruning hook"),
    described(Weapon, "bill-guisarme", "hooked polearm"),
    described(Weapon, "lucern hammer", "pronged polearm"),
    described(Weapon, "bec de corbin", "beaked polearm"),
    named(Weapon, "mace"),
    named(Weapon, "morning star"),
    named(Weapon, "war hammer"),
    named(Weapon, "club"),
    named(Weapon, "rubber hose"),
    named(Weapon, "quarterstaff"),
    described(Weapon, "aklys", "thonged club"),
    named(Weapon, "flail"),
    named(Weapon, "bullwhip"),
    named(Weapon, "bow"),
    described(Weapon, "elven bow", "runed bow"),
    described(Weapon, "orcish bow", "crude bow"),
    described(Weapon, "yumi", "long bow"),
    named(Weapon, "sling"),
    named(Weapon, "crossbow"),
    // armor
    described(Armor, "elven leather helm", "leather hat"),
    described(Armor, "orcish helm", "iron skull cap"),
    described(Armor, "dwarvish iron helm", "hard hat"),
    named(Armor, "fedora"),
    described(Armor, "cornuthaum", "conical hat"),
    described(Armor, "dunce cap", "conical hat"),
    named(Armor, "dented pot"),
    described(Armor, "helmet", "plumed helmet"),
    described(Armor, "helm of brilliance", "etched helmet"),
    described(Armor, "helm of opposite alignment", "crested helmet"),
    described(Armor, "helm of telepathy", "visored helmet"),
    named(Armor, "gray dragon scale mail"),
    named(Armor, "silver dragon scale mail"),
    named(Armor, "red dragon scale mail"),
    named(Armor, "white dragon scale mail"),
    named(Armor, "orange dragon scale mail"),
    named(Armor, "black dragon scale mail"),
    named(Armor, "blue dragon scale mail"),
    named(Armor, "green dragon scale mail"),
    named(Armor, "yellow dragon scale mail"),
    named(Armor, "gray dragon scales"),
    named(Armor, "silver dragon scales"),
    named(Armor, "red dragon scales"),
    named(Armor, "white dragon scales"),
    named(Armor, "orange dragon scales"),
    named(Armor, "black dragon scales"),
    named(Armor, "blue dragon scales"),
    named(Armor, "green dragon scales"),
    named(Armor, "yellow dragon scales"),
    named(Armor, "plate mail"),
    named(Armor, "crystal plate mail"),
    named(Armor, "bronze plate mail"),
    named(Armor, "splint mail"),
    named(Armor, "banded mail"),
    named(Armor, "dwarvish mithril-coat"),
    named(Armor, "elven mithril-coat"),
    named(Armor, "chain mail"),
    described(Armor, "orcish chain mail", "crude chain mail"),
    named(Armor, "scale mail"),
    named(Armor, "studded leather armor"),
    named(Armor, "ring mail"),
    described(Armor, "orcish ring mail", "crude ring mail"),
    named(Armor, "leather armor"),
    named(Armor, "leather jacket"),
    named(Armor, "Hawaiian shirt"),
    named(Armor, "T-shirt"),
    named(Armor, "mummy wrapping"),
    described(Armor, "elven cloak", "faded pall"),
    described(Armor, "orcish cloak", "coarse mantelet"),
    described(Armor, "dwarvish cloak", "hooded cloak"),
    described(Armor, "oilskin cloak", "slippery cloak"),
    named(Armor, "robe"),
    described(Armor, "alchemy smock", "apron"),
    named(Armor, "leather cloak"),
    described(Armor, "cloak of protection", "tattered cape"),
    described(Armor, "cloak of invisibility", "opera cloak"),
    described(Armor, "cloak of magic resistance", "ornamental cope"),
    described(Armor, "cloak of displacement", "piece of cloth"),
    named(Armor, "small shield"),
    described(Armor, "elven shield", "blue and green shield"),
    described(Armor, "Uruk-hai shield", "white-handed shield"),
    described(Armor, "orcish shield", "red-eyed shield"),
    named(Armor, "large shield"),
    described(Armor, "dwarvish roundshield", "large round shield"),
    described(Armor, "shield of reflection", "polished silver shield"),
    described(Armor, "leather gloves", "old gloves"),
    described(Armor, "gauntlets of fumbling", "padded gloves"),
    described(Armor, "gauntlets of power", "riding gloves"),
    described(Armor, "gauntlets of dexterity", "fencing gloves"),
    described(Armor, "low boots", "walking shoes"),
    described(Armor, "iron shoes", "hard shoes"),
    described(Armor, "high boots", "jackboots"),
    described(Armor, "speed boots", "combat boots"),
    described(Armor, "water walking boots", "jungle boots"),
    described(Armor, "jumping boots", "hiking boots"),
    described(Armor, "elven boots", "mud boots"),
    described(Armor, "kicking boots", "buckled boots"),
    described(Armor, "fumble boots", "riding boots"),
    described(Armor, "levitation boots", "snow boots"),
    // rings
    described(Ring, "adornment", "wooden"),
    described(Ring, "gain strength", "granite"),
    described(Ring, "gain constitution", "opal"),
    described(Ring, "increase accuracy", "clay"),
    described(Ring, "increase damage", "coral"),
    described(Ring, "protection", "black onyx"),
    described(Ring, "regeneration", "moonstone"),
    described(Ring, "searching", "tiger eye"),
    described(Ring, "stealth", "jade"),
    described(Ring, "sustain ability", "bronze"),
    described(Ring, "levitation", "agate"),
    described(Ring, "hunger", "topaz"),
    described(Ring, "aggravate monster", "sapphire"),
    described(Ring, "conflict", "ruby"),
    described(Ring, "warning", "diamond"),
    described(Ring, "poison resistance", "pearl"),
    described(Ring, "fire resistance", "iron"),
    described(Ring, "cold resistance", "brass"),
    described(Ring, "shock resistance", "copper"),
    described(Ring, "free action", "twisted"),
    described(Ring, "slow digestion", "steel"),
    described(Ring, "teleportation", "silver"),
    described(Ring, "teleport control", "gold"),
    described(Ring, "polymorph", "ivory"),
    described(Ring, "polymorph control", "emerald"),
    described(Ring, "invisibility", "wire"),
    described(Ring, "see invisible", "engagement"),
    described(Ring, "protection from shape changers", "shiny"),
    // amulets
    described(Amulet, "amulet of ESP", "circular"),
    described(Amulet, "amulet of life saving", "spherical"),
    described(Amulet, "amulet of strangulation", "oval"),
    described(Amulet, "amulet of restful sleep", "triangular"),
    described(Amulet, "amulet versus poison", "pyramidal"),
    described(Amulet, "amulet of change", "square"),
    described(Amulet, "amulet of unchanging", "concave"),
    described(Amulet, "amulet of reflection", "hexagonal"),
    described(Amulet, "amulet of magical breathing", "octagonal"),
    described(Amulet, "cheap plastic imitation of the Amulet of Yendor", "Amulet of Yendor"),
    described(Amulet, "Amulet of Yendor", "Amulet of Yendor"),
    // tools
    named(Tool, "large box"),
    named(Tool, "chest"),
    named(Tool, "ice box"),
    described(Tool, "sack", "bag"),
    described(Tool, "oilskin sack", "bag"),
    described(Tool, "bag of holding", "bag"),
    described(Tool, "bag of tricks", "bag"),
    described(Tool, "skeleton key", "key"),
    named(Tool, "lock pick"),
    named(Tool, "credit card"),
    described(Tool, "tallow candle", "candle"),
    described(Tool, "wax candle", "candle"),
    named(Tool, "brass lantern"),
    described(Tool, "oil lamp", "lamp"),
    described(Tool, "magic lamp", "lamp"),
    named(Tool, "expensive camera"),
    described(Tool, "mirror", "looking glass"),
    described(Tool, "crystal ball", "glass orb"),
    named(Tool, "lenses"),
    named(Tool, "blindfold"),
    named(Tool, "towel"),
    named(Tool, "saddle"),
    named(Tool, "leash"),
    named(Tool, "stethoscope"),
    named(Tool, "tinning kit"),
    named(Tool, "tin opener"),
    named(Tool, "can of grease"),
    named(Tool, "figurine"),
    named(Tool, "magic marker"),
    named(Tool, "land mine"),
    named(Tool, "beartrap"),
    described(Tool, "tin whistle", "whistle"),
    described(Tool, "magic whistle", "whistle"),
    described(Tool, "wooden flute", "flute"),
    described(Tool, "magic flute", "flute"),
    described(Tool, "tooled horn", "horn"),
    described(Tool, "frost horn", "horn"),
    described(Tool, "fire horn", "horn"),
    described(Tool, "horn of plenty", "horn"),
    described(Tool, "wooden harp", "harp"),
    described(Tool, "magic harp", "harp"),
    named(Tool, "bell"),
    named(Tool, "bugle"),
    described(Tool, "leather drum", "drum"),
    described(Tool, "drum of earthquake", "drum"),
    named(Tool, "pick-axe"),
    described(Tool, "grappling hook", "iron hook"),
    named(Tool, "unicorn horn"),
    described(Tool, "Candelabrum of Invocation", "candelabrum"),
    described(Tool, "Bell of Opening", "silver bell"),
    // food
    named(Food, "tripe ration"),
    named(Food, "corpse"),
    named(Food, "egg"),
    named(Food, "meatball"),
    named(Food, "meat stick"),
    named(Food, "huge chunk of meat"),
    named(Food, "meat ring"),
    named(Food, "glob of gray ooze"),
    named(Food, "glob of brown pudding"),
    named(Food, "glob of green slime"),
    named(Food, "glob of black pudding"),
    named(Food, "kelp frond"),
    named(Food, "eucalyptus leaf"),
    named(Food, "apple"),
    named(Food, "orange"),
    named(Food, "pear"),
    named(Food, "melon"),
    named(Food, "banana"),
    named(Food, "carrot"),
    named(Food, "sprig of wolfsbane"),
    named(Food, "clove of garlic"),
    named(Food, "slime mold"),
    named(Food, "lump of royal jelly"),
    named(Food, "cream pie"),
    named(Food, "candy bar"),
    named(Food, "fortune cookie"),
    named(Food, "pancake"),
    named(Food, "lembas wafer"),
    named(Food, "cram ration"),
    named(Food, "food ration"),
    named(Food, "K-ration"),
    named(Food, "C-ration"),
    named(Food, "tin"),
    // potions
    described(Potion, "gain ability", "ruby"),
    described(Potion, "restore ability", "pink"),
    described(Potion, "confusion", "orange"),
    described(Potion, "blindness", "yellow"),
    described(Potion, "paralysis", "emerald"),
    described(Potion, "speed", "dark green"),
    described(Potion, "levitation", "cyan"),
    described(Potion, "hallucination", "sky blue"),
    described(Potion, "invisibility", "brilliant blue"),
    described(Potion, "see invisible", "magenta"),
    described(Potion, "healing", "purple-red"),
    described(Potion, "extra healing", "puce"),
    described(Potion, "gain level", "milky"),
    described(Potion, "enlightenment", "swirly"),
    described(Potion, "monster detection", "bubbly"),
    described(Potion, "object detection", "smoky"),
    described(Potion, "gain energy", "cloudy"),
    described(Potion, "sleeping", "effervescent"),
    described(Potion, "full healing", "black"),
    described(Potion, "polymorph", "golden"),
    described(Potion, "booze", "brown"),
    described(Potion, "sickness", "fizzy"),
    described(Potion, "fruit juice", "dark"),
    described(Potion, "acid", "white"),
    described(Potion, "oil", "murky"),
    described(Potion, "water", "clear"),
    // scrolls
    described(Scroll, "enchant armor", "ZELGO MER"),
    described(Scroll, "destroy armor", "JUYED AWK YACC"),
    described(Scroll, "confuse monster", "NR 9"),
    described(Scroll, "scare monster", "XIXAXA XOXAXA XUXAXA"),
    described(Scroll, "remove curse", "PRATYAVAYAH"),
    described(Scroll, "enchant weapon", "DAIYEN FOOELS"),
    described(Scroll, "create monster", "LEP GEX VEN ZEA"),
    described(Scroll, "taming", "PRIRUTSENIE"),
    described(Scroll, "genocide", "ELBIB YLOH"),
    described(Scroll, "light", "VERR YED HORRE"),
    described(Scroll, "teleportation", "VENZAR BORGAVVE"),
    described(Scroll, "gold detection", "THARR"),
    described(Scroll, "food detection", "YUM YUM"),
    described(Scroll, "identify", "KERNOD WEL"),
    described(Scroll, "magic mapping", "ELAM EBOW"),
    described(Scroll, "amnesia", "DUAM XNAHT"),
    described(Scroll, "fire", "ANDOVA BEGARIN"),
    described(Scroll, "earth", "KIRJE"),
    described(Scroll, "punishment", "VE FORBRYDERNE"),
    described(Scroll, "charging", "HACKEM MUCHE"),
    described(Scroll, "stinking cloud", "VELOX NEB"),
    unnamed(Scroll, "FOOBIE BLETCH"),
    unnamed(Scroll, "TEMOV"),
    unnamed(Scroll, "GARVEN DEH"),
    unnamed(Scroll, "READ ME"),
    unnamed(Scroll, "ETAOIN SHRDLU"),
    unnamed(Scroll, "LOREM IPSUM"),
    unnamed(Scroll, "FNORD"),
    unnamed(Scroll, "KO BATE"),
    unnamed(Scroll, "ABRA KA DABRA"),
    unnamed(Scroll, "ASHPD SODALG"),
    unnamed(Scroll, "ZLORFIK"),
    unnamed(Scroll, "GNIK SISI VLE"),
    unnamed(Scroll, "HAPAX LEGOMENON"),
    unnamed(Scroll, "EIRIS SAZUN IDISI"),
    unnamed(Scroll, "PHOL ENDE WODAN"),
    unnamed(Scroll, "GHOTI"),
    unnamed(Scroll, "MAPIRO MAHAMA DIROMAT"),
    unnamed(Scroll, "VAS CORP BET MANI"),
    unnamed(Scroll, "XOR OTA"),
    described(Scroll, "mail", "stamped"),
    described(Scroll, "blank paper", "unlabeled"),
    // spellbooks
    described(Spellbook, "dig", "parchment"),
    described(Spellbook, "magic missile", "vellum"),
    described(Spellbook, "fireball", "ragged"),
    described(Spellbook, "cone of cold", "dog eared"),
    described(Spellbook, "sleep", "mottled"),
    described(Spellbook, "finger of death", "stained"),
    described(Spellbook, "light", "cloth"),
    described(Spellbook, "detect monsters", "leathery"),
    described(Spellbook, "healing", "white"),
    described(Spellbook, "knock", "pink"),
    described(Spellbook, "force bolt", "red"),
    described(Spellbook, "confuse monster", "orange"),
    described(Spellbook, "cure blindness", "yellow"),
    described(Spellbook, "drain life", "velvet"),
    described(Spellbook, "slow monster", "light green"),
    described(Spellbook, "wizard lock", "dark green"),
    described(Spellbook, "create monster", "turquoise"),
    described(Spellbook, "detect food", "cyan"),
    described(Spellbook, "cause fear", "light blue"),
    described(Spellbook, "clairvoyance", "dark blue"),
    described(Spellbook, "cure sickness", "indigo"),
    described(Spellbook, "charm monster", "magenta"),
    described(Spellbook, "haste self", "purple"),
    described(Spellbook, "detect unseen", "violet"),
    described(Spellbook, "levitation", "tan"),
    described(Spellbook, "extra healing", "plaid"),
    described(Spellbook, "restore ability", "light brown"),
    described(Spellbook, "invisibility", "dark brown"),
    described(Spellbook, "detect treasure", "gray"),
    described(Spellbook, "remove curse", "wrinkled"),
    described(Spellbook, "magic mapping", "dusty"),
    described(Spellbook, "identify", "bronze"),
    described(Spellbook, "turn undead", "copper"),
    described(Spellbook, "polymorph", "silver"),
    described(Spellbook, "teleport away", "gold"),
    described(Spellbook, "create familiar", "glittering"),
    described(Spellbook, "cancellation", "shining"),
    described(Spellbook, "protection", "dull"),
    described(Spellbook, "jumping", "thin"),
    described(Spellbook, "stone to flesh", "thick"),
    described(Spellbook, "blank paper", "plain"),
    described(Spellbook, "novel", "paperback"),
    described(Spellbook, "Book of the Dead", "papyrus"),
    // wands
    described(Wand, "light", "glass"),
    described(Wand, "secret door detection", "balsa"),
    described(Wand, "enlightenment", "crystal"),
    described(Wand, "create monster", "maple"),
    described(Wand, "wishing", "pine"),
    described(Wand, "nothing", "oak"),
    described(Wand, "striking", "ebony"),
    described(Wand, "make invisible", "marble"),
    described(Wand, "slow monster", "tin"),
    described(Wand, "speed monster", "brass"),
    described(Wand, "undead turning", "copper"),
    described(Wand, "polymorph", "silver"),
    described(Wand, "cancellation", "platinum"),
    described(Wand, "teleportation", "iridium"),
    described(Wand, "opening", "zinc"),
    described(Wand, "locking", "aluminum"),
    described(Wand, "probing", "uranium"),
    described(Wand, "digging", "iron"),
    described(Wand, "magic missile", "steel"),
    described(Wand, "fire", "hexagonal"),
    described(Wand, "cold", "short"),
    described(Wand, "sleep", "runed"),
    described(Wand, "death", "long"),
    described(Wand, "lightning", "curved"),
    unnamed(Wand, "forked"),
    unnamed(Wand, "spiked"),
    unnamed(Wand, "jeweled"),
    // coins
    named(Coin, "gold piece"),
    // gems and stones
    described(Gem, "dilithium crystal", "white"),
    described(Gem, "diamond", "white"),
    described(Gem, "ruby", "red"),
    described(Gem, "jacinth", "orange"),
    described(Gem, "sapphire", "blue"),
    described(Gem, "black opal", "black"),
    described(Gem, "emerald", "green"),
    described(Gem, "turquoise", "green"),
    described(Gem, "citrine", "yellow"),
    described(Gem, "aquamarine", "green"),
    described(Gem, "amber", "yellowish brown"),
    described(Gem, "topaz", "yellowish brown"),
    described(Gem, "jet", "black"),
    described(Gem, "opal", "white"),
    described(Gem, "chrysoberyl", "yellow"),
    described(Gem, "garnet", "red"),
    described(Gem, "amethyst", "violet"),
    described(Gem, "jasper", "red"),
    described(Gem, "fluorite", "violet"),
    described(Gem, "obsidian", "black"),
    described(Gem, "agate", "orange"),
    described(Gem, "jade", "green"),
    described(Gem, "worthless piece of white glass", "white"),
    described(Gem, "worthless piece of blue glass", "blue"),
    described(Gem, "worthless piece of red glass", "red"),
    described(Gem, "worthless piece of yellowish brown glass", "yellowish brown"),
    described(Gem, "worthless piece of orange glass", "orange"),
    described(Gem, "worthless piece of yellow glass", "yellow"),
    described(Gem, "worthless piece of black glass", "black"),
    described(Gem, "worthless piece of green glass", "green"),
    described(Gem, "worthless piece of violet glass", "violet"),
    described(Gem, "luckstone", "gray"),
    described(Gem, "loadstone", "gray"),
    described(Gem, "touchstone", "gray"),
    described(Gem, "flint", "gray"),
    named(Rock, "rock"),
    // boulders, statues, iron balls, chains, venom
    named(Rock, "boulder"),
    named(Rock, "statue"),
    named(Ball, "heavy iron ball"),
    named(Chain, "iron chain"),
    described(Venom, "blinding venom", "splash of venom"),
    described(Venom, "acid venom", "splash of venom"),];

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(i: usize) -> String {
        OBJECTS[i].display_name()
    }

    #[test]
    fn class_naming_rules() {
        assert_eq!(shown(0), "strange object");
        assert_eq!(shown(11), "elven spear");
        assert_eq!(shown(82), "gray dragon scale mail");
        assert_eq!(shown(118), "faded pall");
        assert_eq!(shown(162), "sapphire ring");
        assert_eq!(shown(185), "hexagonal amulet");
        assert_eq!(shown(187), "Amulet of Yendor");
        assert_eq!(shown(217), "magic marker");
        assert_eq!(shown(192), "bag");
        assert_eq!(shown(257), "carrot");
        assert_eq!(shown(281), "magenta potion");
        assert_eq!(shown(300), "scroll labeled NR 9");
        assert_eq!(shown(344), "mottled spellbook");
        assert_eq!(shown(385), "crystal wand");
        assert_eq!(shown(407), "forked wand");
        assert_eq!(shown(408), "spiked wand");
        assert_eq!(shown(410), "gold piece");
        assert_eq!(shown(427), "violet amethyst");
        assert_eq!(shown(433), "worthless piece of white glass");
        assert_eq!(shown(447), "boulder");
        assert_eq!(shown(449), "heavy iron ball");
        assert_eq!(shown(450), "iron chain");
        assert_eq!(shown(452), "splash of acid venom");
    }

    #[test]
    fn every_kind_has_a_display_name() {
        for (i, obj) in OBJECTS.iter().enumerate() {
            let name = obj.display_name();
            assert!(!name.trim().is_empty(), "object {i} has no display name");
            assert_eq!(name, name.trim(), "object {i} has stray whitespace");
        }
    }
}
