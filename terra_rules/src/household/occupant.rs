//! Occupants of a direction: household members and functional spaces.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// A value that can occupy one direction of a layer.
///
/// Every placement type has a `None` value, which is also its default.
pub trait Placement: 'static + Copy + Default + PartialEq + Eq + std::fmt::Debug {
    /// Every value, `None` last.
    const ALL: &'static [Self];

    /// Stable identifier used in snapshots.
    fn id(self) -> &'static str;

    fn is_none(self) -> bool {
        self == Self::default()
    }

    /// Parse a snapshot identifier.
    fn parse(raw: &str) -> Result<Self, RuleError> {
        let folded = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.id() == folded)
            .ok_or_else(|| RuleError::InvalidAssignment(raw.to_string()))
    }
}

/// Household member identifiers.
///
/// Declaration order is the stable tie-break order for rankings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PersonId {
    Father,
    Mother,
    EldestSon,
    MiddleSon,
    YoungestSon,
    EldestDaughter,
    MiddleDaughter,
    YoungestDaughter,
    Other,
    #[default]
    None,
}

impl PersonId {
    /// Every real person, in tie-break order.
    pub const MEMBERS: [PersonId; 9] = [
        PersonId::Father,
        PersonId::Mother,
        PersonId::EldestSon,
        PersonId::MiddleSon,
        PersonId::YoungestSon,
        PersonId::EldestDaughter,
        PersonId::MiddleDaughter,
        PersonId::YoungestDaughter,
        PersonId::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PersonId::Father => "Father",
            PersonId::Mother => "Mother",
            PersonId::EldestSon => "Eldest son",
            PersonId::MiddleSon => "Middle son",
            PersonId::YoungestSon => "Youngest son",
            PersonId::EldestDaughter => "Eldest daughter",
            PersonId::MiddleDaughter => "Middle daughter",
            PersonId::YoungestDaughter => "Youngest daughter",
            PersonId::Other => "Other household member",
            PersonId::None => "Nobody",
        }
    }

    /// Reverse of [`PersonId::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }
}

impl Placement for PersonId {
    const ALL: &'static [Self] = &[
        PersonId::Father,
        PersonId::Mother,
        PersonId::EldestSon,
        PersonId::MiddleSon,
        PersonId::YoungestSon,
        PersonId::EldestDaughter,
        PersonId::MiddleDaughter,
        PersonId::YoungestDaughter,
        PersonId::Other,
        PersonId::None,
    ];

    fn id(self) -> &'static str {
        match self {
            PersonId::Father => "father",
            PersonId::Mother => "mother",
            PersonId::EldestSon => "eldest_son",
            PersonId::MiddleSon => "middle_son",
            PersonId::YoungestSon => "youngest_son",
            PersonId::EldestDaughter => "eldest_daughter",
            PersonId::MiddleDaughter => "middle_daughter",
            PersonId::YoungestDaughter => "youngest_daughter",
            PersonId::Other => "other",
            PersonId::None => "none",
        }
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Functional space categories for the tertiary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceType {
    Toilet,
    Kitchen,
    Balcony,
    Entrance,
    Storage,
    #[default]
    None,
}

impl SpaceType {
    pub fn label(self) -> &'static str {
        match self {
            SpaceType::Toilet => "Toilet / bathroom",
            SpaceType::Kitchen => "Kitchen",
            SpaceType::Balcony => "Balcony",
            SpaceType::Entrance => "Entrance",
            SpaceType::Storage => "Storage / clutter",
            SpaceType::None => "None",
        }
    }

    /// The quality this kind of space brings to its direction.
    pub fn semantic(self) -> &'static str {
        match self {
            SpaceType::Toilet => "draining, damp",
            SpaceType::Kitchen => "heat, nourishment",
            SpaceType::Balcony => "openness, exposure",
            SpaceType::Entrance => "arrival, first impression",
            SpaceType::Storage => "stagnation, accumulation",
            SpaceType::None => "",
        }
    }

    /// Standing advice for a direction holding this space.
    pub fn advisory(self) -> &'static str {
        match self {
            SpaceType::Toilet => "Keep the door closed and the room dry and well ventilated.",
            SpaceType::Kitchen => "Keep counters clear and the stove clean and in working order.",
            SpaceType::Balcony => "Keep it tidy and use plants to soften the edge.",
            SpaceType::Entrance => "Keep the path unobstructed and well lit.",
            SpaceType::Storage => "Clear what is unused and keep what remains in order.",
            SpaceType::None => "",
        }
    }
}

impl Placement for SpaceType {
    const ALL: &'static [Self] = &[
        SpaceType::Toilet,
        SpaceType::Kitchen,
        SpaceType::Balcony,
        SpaceType::Entrance,
        SpaceType::Storage,
        SpaceType::None,
    ];

    fn id(self) -> &'static str {
        match self {
            SpaceType::Toilet => "toilet",
            SpaceType::Kitchen => "kitchen",
            SpaceType::Balcony => "balcony",
            SpaceType::Entrance => "entrance",
            SpaceType::Storage => "storage",
            SpaceType::None => "none",
        }
    }
}

impl std::fmt::Display for SpaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
