//! The eight trigrams and the family role each one carries.

use serde::{Deserialize, Serialize};

use crate::household::{PersonId, Placement};

/// One of the eight archetypal symbols.
///
/// Declaration order is the father and his three sons, then the mother and
/// her three daughters. It doubles as the row and column order of the
/// hexagram matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigram {
    Qian,
    Zhen,
    Kan,
    Gen,
    Kun,
    Xun,
    Li,
    Dui,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Zhen,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
        Trigram::Xun,
        Trigram::Li,
        Trigram::Dui,
    ];

    /// Position in [`Trigram::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chinese character.
    pub fn glyph(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Zhen => "震",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
            Trigram::Xun => "巽",
            Trigram::Li => "离",
            Trigram::Dui => "兑",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "Qian",
            Trigram::Zhen => "Zhen",
            Trigram::Kan => "Kan",
            Trigram::Gen => "Gen",
            Trigram::Kun => "Kun",
            Trigram::Xun => "Xun",
            Trigram::Li => "Li",
            Trigram::Dui => "Dui",
        }
    }

    /// The natural image (heaven, thunder, water, ...).
    pub fn image(self) -> &'static str {
        match self {
            Trigram::Qian => "Heaven",
            Trigram::Zhen => "Thunder",
            Trigram::Kan => "Water",
            Trigram::Gen => "Mountain",
            Trigram::Kun => "Earth",
            Trigram::Xun => "Wind",
            Trigram::Li => "Fire",
            Trigram::Dui => "Lake",
        }
    }

    /// The family role this trigram stands for.
    pub fn family_role(self) -> FamilyRole {
        match self {
            Trigram::Qian => FamilyRole::Father,
            Trigram::Kun => FamilyRole::Mother,
            Trigram::Zhen => FamilyRole::EldestSon,
            Trigram::Kan => FamilyRole::MiddleSon,
            Trigram::Gen => FamilyRole::YoungestSon,
            Trigram::Xun => FamilyRole::EldestDaughter,
            Trigram::Li => FamilyRole::MiddleDaughter,
            Trigram::Dui => FamilyRole::YoungestDaughter,
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.glyph(), self.name(), self.image())
    }
}

/// Family role attached 1:1 to a trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRole {
    Father,
    Mother,
    EldestSon,
    MiddleSon,
    YoungestSon,
    EldestDaughter,
    MiddleDaughter,
    YoungestDaughter,
}

impl FamilyRole {
    /// Short identifier, matching the person id of the same role.
    pub fn id(self) -> &'static str {
        self.person().id()
    }

    /// Descriptive label.
    pub fn label(self) -> &'static str {
        match self {
            FamilyRole::Father => "Father / authority",
            FamilyRole::Mother => "Mother / caregiver",
            FamilyRole::EldestSon => "Eldest son",
            FamilyRole::MiddleSon => "Middle son",
            FamilyRole::YoungestSon => "Youngest son",
            FamilyRole::EldestDaughter => "Eldest daughter",
            FamilyRole::MiddleDaughter => "Middle daughter",
            FamilyRole::YoungestDaughter => "Youngest daughter",
        }
    }

    /// The household member who symbolically owns this role.
    pub fn person(self) -> PersonId {
        match self {
            FamilyRole::Father => PersonId::Father,
            FamilyRole::Mother => PersonId::Mother,
            FamilyRole::EldestSon => PersonId::EldestSon,
            FamilyRole::MiddleSon => PersonId::MiddleSon,
            FamilyRole::YoungestSon => PersonId::YoungestSon,
            FamilyRole::EldestDaughter => PersonId::EldestDaughter,
            FamilyRole::MiddleDaughter => PersonId::MiddleDaughter,
            FamilyRole::YoungestDaughter => PersonId::YoungestDaughter,
        }
    }
}
