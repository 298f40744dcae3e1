//! English plurals for glyph names.
//!
//! Names are short noun phrases ("tame little dog", "scroll labeled NR 9",
//! "cloak of protection"). The head noun is found first, either the first
//! word of a known head-first phrase, the part before " of ", or the last
//! word, and only that word is inflected.

/// Names ending in one of these words read the same in the plural.
const INVARIANT_ENDINGS: [&str; 6] = ["boots", "shoes", "gloves", "scales", "lenses", "bars"];

/// Terrain read as a substance rather than a count of cells.
const MASS_NOUNS: [&str; 2] = ["ice", "lava"];

/// Phrases whose head noun is the first word.
const HEAD_FIRST_PREFIXES: [&str; 7] = [
    "boom ",
    "shield ",
    "swallow ",
    "scroll ",
    "explosion ",
    "worthless piece ",
    "unknown creature ",
];

/// Whether `name` has no distinct plural.
pub fn is_invariant(name: &str) -> bool {
    INVARIANT_ENDINGS.iter().any(|e| name.ends_with(e))
}

/// Whether `name` is a mass noun.
pub fn is_mass_noun(name: &str) -> bool {
    MASS_NOUNS.contains(&name)
}

/// Plural of a glyph name.
///
/// Invariant names are returned unchanged and mass nouns become
/// "area of ...".
pub fn pluralize(name: &str) -> String {
    if is_mass_noun(name) {
        return format!("area of {name}");
    }
    if is_invariant(name) {
        return name.to_string();
    }
    for prefix in HEAD_FIRST_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return format!("{} {rest}", inflect(prefix.trim_end()));
        }
    }
    if let Some((head, tail)) = name.split_once(" of ") {
        return format!("{} of {tail}", inflect(head));
    }
    inflect(name)
}

/// Inflect the last word of `phrase`.
fn inflect(phrase: &str) -> String {
    let lower = phrase.to_ascii_lowercase();

    if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        return format!("{}ies", stem(phrase, 1));
    }
    if ["z", "x", "ch", "sh", "ss"].iter().any(|e| lower.ends_with(e)) {
        return format!("{phrase}es");
    }
    if lower.ends_with("ff") {
        return format!("{}ves", stem(phrase, 2));
    }
    if lower.ends_with('f') {
        return format!("{}ves", stem(phrase, 1));
    }
    if lower.ends_with('s') {
        return format!("{phrase}es");
    }
    format!("{phrase}s")
}

/// `phrase` without its last `cut` (ASCII) bytes.
fn stem(phrase: &str, cut: usize) -> &str {
    &phrase[..phrase.len() - cut]
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    rev.next();
    matches!(rev.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn suffix_rules() {
        assert_eq!(pluralize("monkey"), "monkeys");
        assert_eq!(pluralize("pony"), "ponies");
        assert_eq!(pluralize("wizard"), "wizards");
        assert_eq!(pluralize("priestess"), "priestesses");
        assert_eq!(pluralize("elf"), "elves");
        assert_eq!(pluralize("quarterstaff"), "quarterstaves");
        assert_eq!(pluralize("fox"), "foxes");
        assert_eq!(pluralize("couatl"), "couatls");
        assert_eq!(pluralize("fountain"), "fountains");
    }

    #[test]
    fn phrase_heads() {
        assert_eq!(pluralize("tame little dog"), "tame little dogs");
        assert_eq!(pluralize("scroll labeled NR 9"), "scrolls labeled NR 9");
        assert_eq!(pluralize("swallow bottom right"), "swallows bottom right");
        assert_eq!(pluralize("explosion middle right"), "explosions middle right");
        assert_eq!(
            pluralize("worthless piece of red glass"),
            "worthless pieces of red glass"
        );
        assert_eq!(
            pluralize("unknown creature causing you alarm"),
            "unknown creatures causing you alarm"
        );
        assert_eq!(pluralize("can of grease"), "cans of grease");
        assert_eq!(pluralize("Master of Thieves"), "Masters of Thieves");
        assert_eq!(pluralize("splash of acid venom"), "splashes of acid venom");
    }

    #[test]
    fn invariant_and_mass() {
        assert_eq!(pluralize("combat boots"), "combat boots");
        assert_eq!(pluralize("lenses"), "lenses");
        assert_eq!(pluralize("bars"), "bars");
        assert_eq!(pluralize("lava"), "area of lava");
        assert_eq!(pluralize("ice"), "area of ice");
    }

    proptest! {
        #[test]
        fn plural_extends_a_lowercase_word(word in "[a-z]{2,12}") {
            prop_assume!(!is_invariant(&word) && !is_mass_noun(&word));
            let p = pluralize(&word);
            prop_assert!(p.len() >= word.len());
            prop_assert_ne!(&p, &word);
            // Only the tail of the word changes.
            prop_assert_eq!(&p[..word.len() - 2], &word[..word.len() - 2]);
        }
    }
}
