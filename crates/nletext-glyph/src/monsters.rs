//! Monster species names in glyph order.
//!
//! Index `i` names monster glyph `i`; the pet, detected, corpse, ridden,
//! swallow, and statue runs reuse the same index.

/// Number of monster species.
pub const NUM_MONSTERS: usize = 381;

/// Species names, indexed by monster number.
pub const MONSTERS: [&str; NUM_MONSTERS] = [
    // ants, blobs, cockatrices
    "giant ant", "killer bee", "soldier ant", "fire ant", "giant beetle", "queen bee",
    "acid blob", "quivering blob", "gelatinous cube", "chickatrice", "cockatrice", "pyrolisk",
    // dogs
    "jackal", "fox", "coyote", "werejackal", "little dog", "dingo", "dog", "large dog", "wolf",
    "werewolf", "warg", "winter wolf cub", "winter wolf", "hell hound pup", "hell hound",
    // eyes and spheres, cats
    "gas spore", "floating eye", "freezing sphere", "flaming sphere", "shocking sphere", "kitten",
    "housecat", "jaguar", "lynx", "panther", "large cat", "tiger",
    // gremlins, gargoyles, humanoids, mind flayers
    "gremlin", "gargoyle", "winged gargoyle", "hobbit", "dwarf", "bugbear", "dwarf lord",
    "dwarf king", "mind flayer", "master mind flayer",
    // imps and minor demons, jellies
    "manes", "homunculus", "imp", "lemure", "quasit", "tengu", "blue jelly", "spotted jelly",
    "ochre jelly",
    // kobolds, leprechaun, mimics, nymphs
    "kobold", "large kobold", "kobold lord", "kobold shaman", "leprechaun", "small mimic",
    "large mimic", "giant mimic", "wood nymph", "water nymph", "mountain nymph",
    // orcs, piercers
    "goblin", "hobgoblin", "orc", "hill orc", "Mordor orc", "Uruk-hai", "orc shaman",
    "orc-captain", "rock piercer", "iron piercer", "glass piercer",
    // quadrupeds, rats, rodents
    "rothe", "mumak", "leocrotta", "wumpus", "titanothere", "baluchitherium", "mastodon",
    "sewer rat", "giant rat", "rabid rat", "wererat", "rock mole", "woodchuck",
    // spiders, trappers, horses
    "cave spider", "centipede", "giant spider", "scorpion", "lurker above", "trapper", "pony",
    "white unicorn", "gray unicorn", "black unicorn", "horse", "warhorse",
    // vortices, worms, xan, lights, zruty
    "fog cloud", "dust vortex", "ice vortex", "energy vortex", "steam vortex", "fire vortex",
    "baby long worm", "baby purple worm", "long worm", "purple worm", "grid bug", "xan",
    "yellow light", "black light", "zruty",
    // angelic beings, bats, centaurs
    "couatl", "Aleax", "Angel", "ki-rin", "Archon", "bat", "giant bat", "raven", "vampire bat",
    "plains centaur", "forest centaur", "mountain centaur",
    // baby dragons
    "baby gray dragon", "baby silver dragon", "baby red dragon", "baby white dragon",
    "baby orange dragon", "baby black dragon", "baby blue dragon", "baby green dragon",
    "baby yellow dragon",
    // dragons
    "gray dragon", "silver dragon", "red dragon", "white dragon", "orange dragon", "black dragon",
    "blue dragon", "green dragon", "yellow dragon",
    // elementals, fungi
    "stalker", "air elemental", "fire elemental", "earth elemental", "water elemental", "lichen",
    "brown mold", "yellow mold", "green mold", "red mold", "shrieker", "violet fungus",
    // gnomes, giants, jabberwock
    "gnome", "gnome lord", "gnomish wizard", "gnome king", "giant", "stone giant", "hill giant",
    "fire giant", "frost giant", "ettin", "storm giant", "titan", "minotaur", "jabberwock",
    // Kops, liches
    "Keystone Kop", "Kop Sergeant", "Kop Lieutenant", "Kop Kaptain", "lich", "demilich",
    "master lich", "arch-lich",
    // mummies
    "kobold mummy", "gnome mummy", "orc mummy", "dwarf mummy", "elf mummy", "human mummy",
    "ettin mummy", "giant mummy",
    // nagas
    "red naga hatchling", "black naga hatchling", "golden naga hatchling",
    "guardian naga hatchling", "red naga", "black naga", "golden naga", "guardian naga",
    // ogres, puddings, quantum mechanic, rust monster
    "ogre", "ogre lord", "ogre king", "gray ooze", "brown pudding", "black pudding",
    "green slime", "quantum mechanic", "rust monster", "disenchanter",
    // snakes, trolls, umber hulk
    "garter snake", "snake", "water moccasin", "python", "pit viper", "cobra", "troll",
    "ice troll", "rock troll", "water troll", "Olog-hai", "umber hulk",
    // vampires, wraiths, xorn, apes
    "vampire", "vampire lord", "Vlad the Impaler", "barrow wight", "wraith", "Nazgul", "xorn",
    "monkey", "ape", "owlbear", "yeti", "carnivorous ape", "sasquatch",
    // zombies
    "kobold zombie", "gnome zombie", "orc zombie", "dwarf zombie", "elf zombie", "human zombie",
    "ettin zombie", "ghoul", "giant zombie", "skeleton",
    // golems
    "straw golem", "paper golem", "rope golem", "gold golem", "leather golem", "wood golem",
    "flesh golem", "clay golem", "stone golem", "glass golem", "iron golem",
    // humans and elves
    "human", "wererat", "werejackal", "werewolf", "elf", "Woodland-elf", "Green-elf", "Grey-elf",
    "elf-lord", "Elvenking", "doppelganger", "shopkeeper", "guard", "prisoner",
    // special humans, ghosts
    "Oracle", "aligned priest", "high priest", "soldier", "sergeant", "nurse", "lieutenant",
    "captain", "watchman", "watch captain", "Medusa", "Wizard of Yendor", "Croesus", "ghost",
    "shade",
    // demons
    "water demon", "horned devil", "succubus", "incubus", "erinys", "barbed devil", "marilith",
    "vrock", "hezrou", "bone devil", "ice devil", "nalfeshnee", "pit fiend", "sandestin",
    "balrog",
    // demon princes, riders
    "Juiblex", "Yeenoghu", "Orcus", "Geryon", "Dispater", "Baalzebub", "Asmodeus", "Demogorgon",
    "Death", "Pestilence", "Famine", "mail daemon", "djinni",
    // sea monsters, lizards
    "jellyfish", "piranha", "shark", "giant eel", "electric eel", "kraken", "newt", "gecko",
    "iguana", "baby crocodile", "lizard", "chameleon", "crocodile", "salamander",
    // player monsters
    "archeologist", "barbarian", "caveman", "cavewoman", "healer", "knight", "monk", "priest",
    "priestess", "ranger", "rogue", "samurai", "tourist", "valkyrie", "wizard",
    // quest leaders
    "Lord Carnarvon", "Pelias", "Shaman Karnov", "Hippocrates", "King Arthur", "Grand Master",
    "Arch Priest", "Orion", "Master of Thieves", "Lord Sato", "Twoflower", "Norn",
    "Neferet the Green",
    // quest nemeses
    "Minion of Huhetotl", "Thoth Amon", "Chromatic Dragon", "Cyclops", "Ixoth", "Master Kaen",
    "Nalzok", "Scorpius", "Master Assassin", "Ashikaga Takauji", "Lord Surtur", "Dark One",
    // quest guardians
    "student", "chieftain", "neanderthal", "attendant", "page", "abbot", "acolyte", "hunter",
    "thug", "ninja", "roshi", "guide", "warrior", "apprentice",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(MONSTERS[16], "little dog");
        assert_eq!(MONSTERS[58], "kobold");
        assert_eq!(MONSTERS[86], "mastodon");
        assert_eq!(MONSTERS[232], "yeti");
        assert_eq!(MONSTERS[333], "monk");
        assert_eq!(MONSTERS[359], "Ixoth");
        assert_eq!(MONSTERS[380], "apprentice");
    }
}
