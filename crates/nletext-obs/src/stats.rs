//! Bottom-line status text.

use std::fmt::Write as _;

use nletext_core::{BoundsError, StatusField, StatusVector};

/// Hunger labels by status code.
const HUNGER: [&str; 7] = [
    "Satiated",
    "Not Hungry",
    "Hungry",
    "Weak",
    "Fainting",
    "Fainted",
    "Starved",
];

/// Encumbrance labels by status code.
const ENCUMBRANCE: [&str; 6] = [
    "Unencumbered",
    "Burdened",
    "Stressed",
    "Strained",
    "Overtaxed",
    "Overloaded",
];

/// Condition flags in display order.
const CONDITIONS: [(i64, &str); 13] = [
    (0x0001, "Stoned"),
    (0x0002, "Slimed"),
    (0x0004, "Strangled"),
    (0x0008, "Food Poisoning"),
    (0x0010, "Terminally Ill"),
    (0x0020, "Blind"),
    (0x0040, "Deaf"),
    (0x0080, "Stunned"),
    (0x0100, "Confused"),
    (0x0200, "Hallucinating"),
    (0x0400, "Levitating"),
    (0x0800, "Flying"),
    (0x1000, "Riding"),
];

/// Alignment value of an unaligned player.
const A_NONE: i64 = -128;

/// Renders the status vector, one `Label: value` line per entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatsFormatter;

impl StatsFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render `stats`.
    ///
    /// Fails with [`BoundsError::StatusIndex`] if the vector is too short.
    pub fn format(&self, stats: &StatusVector<'_>) -> Result<String, BoundsError> {
        use StatusField::*;

        let v = |field| stats.get(field);
        let mut out = String::with_capacity(512);
        let mut line = |label: &str, value: &dyn std::fmt::Display| {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = write!(out, "{label}: {value}");
        };

        line("Strength", &Pair(v(Strength)?, '/', v(StrengthPercentage)?));
        for (label, field) in [
            ("Dexterity", Dexterity),
            ("Constitution", Constitution),
            ("Intelligence", Intelligence),
            ("Wisdom", Wisdom),
            ("Charisma", Charisma),
            ("Depth", Depth),
            ("Gold", Gold),
        ] {
            line(label, &v(field)?);
        }
        line("HP", &Pair(v(Hitpoints)?, '/', v(MaxHitpoints)?));
        line("Energy", &Pair(v(Energy)?, '/', v(MaxEnergy)?));
        line("AC", &v(ArmorClass)?);
        line("XP", &Pair(v(ExperiencePoints)?, '/', v(ExperienceLevel)?));
        line("Time", &v(Time)?);
        line("Position", &Pair(v(X)?, '|', v(Y)?));
        line("Hunger", &hunger_label(v(Hunger)?));
        line("Monster Level", &v(MonsterLevel)?);
        line("Encumbrance", &encumbrance_label(v(Encumbrance)?));
        line("Dungeon Number", &v(DungeonNumber)?);
        line("Level Number", &v(LevelNumber)?);
        line("Score", &v(Score)?);
        line("Alignment", &alignment_label(v(Alignment)?));
        line("Condition", &condition_names(v(Condition)?));
        Ok(out)
    }
}

struct Pair(i64, char, i64);

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0, self.1, self.2)
    }
}

fn label(table: &'static [&'static str], code: i64, fallback: usize) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(table[fallback])
}

/// Hunger label; unknown codes read as not hungry.
pub fn hunger_label(code: i64) -> &'static str {
    label(&HUNGER, code, 1)
}

/// Encumbrance label; unknown codes read as unencumbered.
pub fn encumbrance_label(code: i64) -> &'static str {
    label(&ENCUMBRANCE, code, 0)
}

/// Alignment label from the sign of the alignment value.
pub fn alignment_label(value: i64) -> &'static str {
    match value {
        A_NONE => "None",
        v if v < 0 => "Chaotic",
        0 => "Neutral",
        _ => "Lawful",
    }
}

/// Space-separated names of the set condition bits, or `"None"`.
pub fn condition_names(mask: i64) -> String {
    let names: Vec<&str> = CONDITIONS
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|&(_, name)| name)
        .collect();
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nletext_test_utils::fixtures::MONK_BLSTATS;
    use proptest::prelude::*;

    #[test]
    fn monk_status() {
        let text = StatsFormatter::new()
            .format(&StatusVector::new(&MONK_BLSTATS))
            .unwrap();
        let expected = "Strength: 1/19\n\
                        Dexterity: 4\n\
                        Constitution: 5\n\
                        Intelligence: 6\n\
                        Wisdom: 7\n\
                        Charisma: 8\n\
                        Depth: 9\n\
                        Gold: 10\n\
                        HP: 11/12\n\
                        Energy: 1/13\n\
                        AC: 1\n\
                        XP: 7/10\n\
                        Time: 5\n\
                        Position: 66|14\n\
                        Hunger: Fainting\n\
                        Monster Level: 23\n\
                        Encumbrance: Stressed\n\
                        Dungeon Number: 21\n\
                        Level Number: 10\n\
                        Score: 123\n\
                        Alignment: Chaotic\n\
                        Condition: Stoned Slimed Food Poisoning";
        assert_eq!(text, expected);
    }

    #[test]
    fn conditions() {
        assert_eq!(condition_names(0), "None");
        assert_eq!(condition_names(2048), "Flying");
        assert_eq!(condition_names(0x1000 | 0x20), "Blind Riding");
        assert_eq!(condition_names(0x4000), "None");
    }

    #[test]
    fn labels() {
        assert_eq!(hunger_label(0), "Satiated");
        assert_eq!(hunger_label(99), "Not Hungry");
        assert_eq!(hunger_label(-3), "Not Hungry");
        assert_eq!(encumbrance_label(5), "Overloaded");
        assert_eq!(encumbrance_label(6), "Unencumbered");
        assert_eq!(alignment_label(-128), "None");
        assert_eq!(alignment_label(-1), "Chaotic");
        assert_eq!(alignment_label(0), "Neutral");
        assert_eq!(alignment_label(3), "Lawful");
    }

    #[test]
    fn short_vector_is_a_bounds_error() {
        let short = [66, 14, 19];
        assert!(matches!(
            StatsFormatter::new().format(&StatusVector::new(&short)),
            Err(BoundsError::StatusIndex { .. })
        ));
    }

    proptest! {
        #[test]
        fn always_twenty_two_lines(values in proptest::collection::vec(any::<i64>(), 27)) {
            let text = StatsFormatter::new().format(&StatusVector::new(&values)).unwrap();
            prop_assert_eq!(text.lines().count(), 22);
        }
    }
}
