//! The per-direction assignment layers and the snapshot they serialize to.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{PersonId, Placement, SpaceType};
use crate::compass::{Direction, DirectionCode};
use crate::error::RuleError;

/// One value per compass direction, `None` by default.
///
/// Serialized as a flat object keyed by direction code. The center may
/// appear in input only with a `"none"` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMap<T: Placement> {
    slots: [T; 8],
}

impl<T: Placement> Default for LayerMap<T> {
    fn default() -> Self {
        Self {
            slots: [T::default(); 8],
        }
    }
}

impl<T: Placement> LayerMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, direction: Direction) -> T {
        self.slots[direction.index()]
    }

    /// Place a value, returning what was there before.
    pub fn set(&mut self, direction: Direction, value: T) -> T {
        std::mem::replace(&mut self.slots[direction.index()], value)
    }

    /// Every direction with its value, `None` included, in compass order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, T)> + '_ {
        Direction::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// Directions holding something other than `None`.
    pub fn occupied(&self) -> impl Iterator<Item = (Direction, T)> + '_ {
        self.iter().filter(|(_, value)| !value.is_none())
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    fn from_raw(raw: BTreeMap<String, Option<String>>) -> Result<Self, RuleError> {
        let mut layer = Self::default();
        let mut seen = [false; 8];
        for (key, value) in raw {
            let value = match value {
                Some(v) => T::parse(&v)?,
                None => T::default(),
            };
            match DirectionCode::parse(&key) {
                Ok(DirectionCode::Point(direction)) => {
                    if std::mem::replace(&mut seen[direction.index()], true) {
                        return Err(RuleError::InvalidAssignment(format!(
                            "duplicate direction {direction} (\"{key}\")"
                        )));
                    }
                    layer.set(direction, value);
                }
                Ok(DirectionCode::Center) if value.is_none() => {}
                Ok(DirectionCode::Center) => {
                    return Err(RuleError::InvalidAssignment(format!(
                        "the center cannot hold {}",
                        value.id()
                    )));
                }
                Err(_) => {
                    return Err(RuleError::InvalidAssignment(format!(
                        "unknown direction {key}"
                    )));
                }
            }
        }
        Ok(layer)
    }
}

impl<T: Placement> Serialize for LayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(d, value)| (d.code(), value.id())))
    }
}

impl<'de, T: Placement> Deserialize<'de> for LayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

/// A single placement on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Primary(Direction, PersonId),
    Secondary(Direction, PersonId),
    Tertiary(Direction, SpaceType),
}

impl Assignment {
    pub fn direction(&self) -> Direction {
        match self {
            Assignment::Primary(d, _) | Assignment::Secondary(d, _) | Assignment::Tertiary(d, _) => *d,
        }
    }
}

/// The full household layout across all three layers.
///
/// This is also the persisted snapshot shape:
/// `{ "primary": {dir: person}, "secondary": {dir: person}, "tertiary": {dir: space} }`.
/// The same person may appear at any number of directions and layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignmentMap {
    #[serde(default)]
    pub primary: LayerMap<PersonId>,
    #[serde(default)]
    pub secondary: LayerMap<PersonId>,
    #[serde(default)]
    pub tertiary: LayerMap<SpaceType>,
}

impl AssignmentMap {
    /// Create an empty layout (every direction `None` on every layer).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from individual placements. Later placements on the
    /// same direction and layer replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = Assignment>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.apply(entry);
        }
        map
    }

    pub fn apply(&mut self, assignment: Assignment) {
        match assignment {
            Assignment::Primary(d, person) => {
                self.primary.set(d, person);
            }
            Assignment::Secondary(d, person) => {
                self.secondary.set(d, person);
            }
            Assignment::Tertiary(d, space) => {
                self.tertiary.set(d, space);
            }
        }
    }

    /// Builder form of [`AssignmentMap::apply`].
    pub fn with(mut self, assignment: Assignment) -> Self {
        self.apply(assignment);
        self
    }

    /// Directions whose tertiary layer holds a space type.
    pub fn flagged(&self) -> Vec<(Direction, SpaceType)> {
        self.tertiary.occupied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.tertiary.is_empty()
    }

    /// Parse a persisted snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        serde_json::from_str(json).map_err(|e| RuleError::InvalidAssignment(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_empty() {
        let map = AssignmentMap::new();
        assert!(map.is_empty());
        assert!(map.flagged().is_empty());
        for direction in Direction::ALL {
            assert_eq!(map.primary.get(direction), PersonId::None);
            assert_eq!(map.tertiary.get(direction), SpaceType::None);
        }
    }

    #[test]
    fn test_layers_are_independent() {
        let map = AssignmentMap::new()
            .with(Assignment::Primary(Direction::SW, PersonId::Mother))
            .with(Assignment::Secondary(Direction::SW, PersonId::Father))
            .with(Assignment::Tertiary(Direction::SW, SpaceType::Toilet));

        assert_eq!(map.primary.get(Direction::SW), PersonId::Mother);
        assert_eq!(map.secondary.get(Direction::SW), PersonId::Father);
        assert_eq!(map.tertiary.get(Direction::SW), SpaceType::Toilet);
        assert_eq!(map.primary.occupied().count(), 1);
        assert_eq!(map.secondary.occupied().count(), 1);
    }

    #[test]
    fn test_same_person_in_many_directions() {
        let map = AssignmentMap::from_entries([
            Assignment::Primary(Direction::N, PersonId::Father),
            Assignment::Primary(Direction::S, PersonId::Father),
            Assignment::Secondary(Direction::E, PersonId::Father),
        ]);
        assert_eq!(map.primary.occupied().count(), 2);
        assert_eq!(map.secondary.occupied().count(), 1);
    }

    #[test]
    fn test_later_entry_replaces_earlier() {
        let map = AssignmentMap::from_entries([
            Assignment::Primary(Direction::N, PersonId::Father),
            Assignment::Primary(Direction::N, PersonId::Mother),
        ]);
        assert_eq!(map.primary.get(Direction::N), PersonId::Mother);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut layer = LayerMap::<SpaceType>::new();
        layer.set(Direction::E, SpaceType::Kitchen);
        assert_eq!(layer.set(Direction::E, SpaceType::None), SpaceType::Kitchen);
        assert!(layer.is_empty());
    }

    #[test]
    fn test_snapshot_parsing() {
        let json = r#"{
            "primary": { "SW": "mother", "N": "none" },
            "secondary": { "nw": "father" },
            "tertiary": { "SW": "toilet", "C": "none", "E": null }
        }"#;
        let map = AssignmentMap::from_json_str(json).unwrap();
        assert_eq!(map.primary.get(Direction::SW), PersonId::Mother);
        assert_eq!(map.secondary.get(Direction::NW), PersonId::Father);
        assert_eq!(map.flagged(), vec![(Direction::SW, SpaceType::Toilet)]);
    }

    #[test]
    fn test_snapshot_missing_layers_default() {
        let map = AssignmentMap::from_json_str(r#"{ "primary": { "E": "eldest_son" } }"#).unwrap();
        assert_eq!(map.primary.get(Direction::E), PersonId::EldestSon);
        assert!(map.secondary.is_empty());
        assert!(map.tertiary.is_empty());
    }

    #[test]
    fn test_snapshot_rejects_bad_input() {
        assert!(AssignmentMap::from_json_str(r#"{ "primary": { "X": "mother" } }"#).is_err());
        assert!(AssignmentMap::from_json_str(r#"{ "primary": { "N": "uncle" } }"#).is_err());
        assert!(AssignmentMap::from_json_str(r#"{ "tertiary": { "C": "kitchen" } }"#).is_err());
    }

    #[test]
    fn test_snapshot_rejects_direction_named_twice() {
        let err = AssignmentMap::from_json_str(r#"{ "primary": { "N": "mother", "north": "father" } }"#)
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidAssignment(msg) if msg.contains("duplicate direction N")));

        // Twice with the same value is still a duplicate.
        assert!(AssignmentMap::from_json_str(r#"{ "tertiary": { "sw": "toilet", "SW": "toilet" } }"#).is_err());
    }

    #[test]
    fn test_snapshot_lists_every_direction() {
        let map = AssignmentMap::new().with(Assignment::Tertiary(Direction::W, SpaceType::Storage));
        let json = serde_json::to_string_pretty(&map).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tertiary"]["W"], "storage");
        assert_eq!(value["primary"]["N"], "none");
        assert_eq!(value["primary"].as_object().unwrap().len(), 8);
        assert_eq!(AssignmentMap::from_json_str(&json).unwrap(), map);
    }
}
