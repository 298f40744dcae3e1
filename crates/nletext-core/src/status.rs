//! The bottom-line status vector (`blstats`) and its fixed slot layout.

use crate::error::BoundsError;
use crate::id::MapPos;

/// One slot of the status vector.
///
/// Discriminants are the slot indices. The layout is fixed by the
/// environment and never reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StatusField {
    /// Player column on the map.
    X = 0,
    /// Player row on the map.
    Y = 1,
    /// Percentile strength.
    StrengthPercentage = 2,
    /// Strength.
    Strength = 3,
    /// Dexterity.
    Dexterity = 4,
    /// Constitution.
    Constitution = 5,
    /// Intelligence.
    Intelligence = 6,
    /// Wisdom.
    Wisdom = 7,
    /// Charisma.
    Charisma = 8,
    /// Score.
    Score = 9,
    /// Current hit points.
    Hitpoints = 10,
    /// Maximum hit points.
    MaxHitpoints = 11,
    /// Dungeon depth.
    Depth = 12,
    /// Gold carried.
    Gold = 13,
    /// Current energy.
    Energy = 14,
    /// Maximum energy.
    MaxEnergy = 15,
    /// Armor class.
    ArmorClass = 16,
    /// Monster level (when polymorphed).
    MonsterLevel = 17,
    /// Experience points.
    ExperiencePoints = 18,
    /// Experience level.
    ExperienceLevel = 19,
    /// Game turn.
    Time = 20,
    /// Hunger state code.
    Hunger = 21,
    /// Encumbrance code.
    Encumbrance = 22,
    /// Dungeon branch number.
    DungeonNumber = 23,
    /// Level number within the branch.
    LevelNumber = 24,
    /// Condition bitmask.
    Condition = 25,
    /// Alignment value.
    Alignment = 26,
}

impl StatusField {
    /// Number of slots in a complete status vector.
    pub const COUNT: usize = 27;

    /// Slot index of this field.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Read-only view of the status vector.
#[derive(Clone, Copy, Debug)]
pub struct StatusVector<'a> {
    values: &'a [i64],
}

impl<'a> StatusVector<'a> {
    /// Wrap a status slice. Short slices are accepted; missing slots fail
    /// on access.
    pub fn new(values: &'a [i64]) -> Self {
        Self { values }
    }

    /// Number of slots present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of `field`.
    pub fn get(&self, field: StatusField) -> Result<i64, BoundsError> {
        self.values
            .get(field.index())
            .copied()
            .ok_or(BoundsError::StatusIndex {
                field,
                len: self.values.len(),
            })
    }

    /// The player's map position (`Y` row, `X` column).
    pub fn player_pos(&self) -> Result<MapPos, BoundsError> {
        Ok(MapPos::new(self.get(StatusField::Y)?, self.get(StatusField::X)?))
    }
}
