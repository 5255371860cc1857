//! Narrator - turns a record and a score into display text.
//!
//! Pure formatting: no selection or scoring happens here. Suggestions are
//! emitted in a fixed rule order:
//! 1. Storage flagged → clear clutter
//! 2. Toilet flagged → dryness and ventilation
//! 3. Kitchen flagged → organization
//! 4. A top-ranked person → comfort for that person

use serde::{Deserialize, Serialize};
use terra_rules::{Direction, PersonId, Placement, SpaceType};

use crate::reference_store::Record;
use crate::scorer::{RankedInfluence, ScoreResult};

const TOP_INFLUENCE_PREFIX: &str = "Top influence: ";

/// Narration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarratorConfig {
    /// Closing line of every export.
    pub disclaimer: String,
    /// Upper bound on "act on this first" suggestions.
    pub max_actions: usize,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            disclaimer: "For reflection and entertainment only; not professional advice.".to_string(),
            max_actions: 4,
        }
    }
}

/// A direction holding a space type, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedSpace {
    pub direction: Direction,
    pub space: SpaceType,
    /// What the space brings to its direction ("draining, damp", ...).
    pub semantic: String,
    pub advisory: String,
}

/// Everything a caller needs to render one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayBundle {
    pub title: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub home_impact: String,
    pub usage: String,
    pub energy: String,
    /// Empty when the dataset carries no person effect.
    pub person_effect: String,
    /// Extra sentences attached by the caller.
    pub notes: Vec<String>,
    pub influence: Vec<RankedInfluence>,
    pub flagged: Vec<FlaggedSpace>,
    /// "Act on this first", in rule order.
    pub actions: Vec<String>,
    pub disclaimer: String,
}

impl DisplayBundle {
    pub fn top_influence(&self) -> Option<&RankedInfluence> {
        self.influence.first()
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Plain-text rendering for copying. Stable lines, not meant to be parsed
    /// beyond [`top_person_from_export`].
    pub fn to_export_text(&self) -> String {
        let mut lines = vec![
            self.title.clone(),
            format!("Summary: {}", self.summary),
            format!("Home impact: {}", self.home_impact),
            format!("Usage: {}", self.usage),
            format!("Energy: {}", self.energy),
        ];

        if !self.person_effect.is_empty() {
            lines.push(format!("Person effect: {}", self.person_effect));
        }

        if !self.tags.is_empty() {
            lines.push(format!("Tags: {}", self.tags.join(", ")));
        }

        lines.extend(self.notes.iter().cloned());

        if let Some(top) = self.top_influence() {
            lines.push(format!(
                "{TOP_INFLUENCE_PREFIX}{} ({:.2})",
                top.person.label(),
                top.score
            ));
        }

        if !self.flagged.is_empty() {
            let flagged: Vec<String> = self
                .flagged
                .iter()
                .map(|f| format!("{} {} ({})", f.direction, f.space.label(), f.semantic))
                .collect();
            lines.push(format!("Flagged: {}", flagged.join(", ")));
        }

        if !self.actions.is_empty() {
            lines.push("Act on this first:".to_string());
            lines.extend(
                self.actions
                    .iter()
                    .enumerate()
                    .map(|(i, action)| format!("{}. {}", i + 1, action)),
            );
        }

        lines.push(self.disclaimer.clone());
        lines.join("\n")
    }
}

/// Recover the top-ranked person from export text.
pub fn top_person_from_export(text: &str) -> Option<PersonId> {
    let line = text
        .lines()
        .find_map(|line| line.strip_prefix(TOP_INFLUENCE_PREFIX))?;
    let label = line.rsplit_once(" (").map_or(line, |(label, _)| label);
    PersonId::from_label(label)
}

/// Composes display bundles.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// Compose the bundle for a selected record and a layout score.
    pub fn compose(&self, record: &Record, score: &ScoreResult) -> DisplayBundle {
        let influence = score.ranking();
        let flagged: Vec<FlaggedSpace> = score
            .flagged
            .iter()
            .map(|(direction, space)| FlaggedSpace {
                direction: *direction,
                space: *space,
                semantic: space.semantic().to_string(),
                advisory: space.advisory().to_string(),
            })
            .collect();

        let mut tags: Vec<String> = Vec::new();
        for space in flagged.iter().map(|f| f.space) {
            let tag = format!("space:{}", space.id());
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        DisplayBundle {
            title: format!("{} | {}", record.number, record.name),
            tags,
            summary: record.summary.clone(),
            home_impact: record.home_impact.clone(),
            usage: record.usage.clone(),
            energy: record.energy.clone(),
            person_effect: record.person_effect.clone(),
            notes: Vec::new(),
            actions: self.actions(score, influence.first()),
            influence,
            flagged,
            disclaimer: self.config.disclaimer.clone(),
        }
    }

    fn actions(&self, score: &ScoreResult, top: Option<&RankedInfluence>) -> Vec<String> {
        let mut actions = Vec::new();

        if score.is_flagged(SpaceType::Storage) {
            actions.push(format!(
                "Clear clutter from the storage in the {}; let nothing sit unused.",
                directions_of(score, SpaceType::Storage)
            ));
        }
        if score.is_flagged(SpaceType::Toilet) {
            actions.push(format!(
                "Keep the bathroom in the {} dry and ventilated, door closed.",
                directions_of(score, SpaceType::Toilet)
            ));
        }
        if score.is_flagged(SpaceType::Kitchen) {
            actions.push(format!(
                "Organize the kitchen in the {}: clear counters, clean stove.",
                directions_of(score, SpaceType::Kitchen)
            ));
        }
        if let Some(top) = top {
            actions.push(format!(
                "Make the {}'s spaces restful and comfortable; this layout leans on them most.",
                top.person.label().to_lowercase()
            ));
        }

        actions.truncate(self.config.max_actions);
        actions
    }
}

fn directions_of(score: &ScoreResult, space: SpaceType) -> String {
    let labels: Vec<&str> = score
        .flagged
        .iter()
        .filter(|(_, s)| *s == space)
        .map(|(d, _)| d.label())
        .collect();
    labels.join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_store::{fixture_records, RecordKey};
    use crate::scorer::{score, ScoreWeights};
    use terra_rules::{Assignment, AssignmentMap};

    fn record(number: u32) -> Record {
        let key = RecordKey::new(number).unwrap();
        fixture_records().remove(key.index())
    }

    fn layout(entries: Vec<Assignment>) -> ScoreResult {
        score(&AssignmentMap::from_entries(entries), ScoreWeights::default())
    }

    #[test]
    fn test_title_and_fields() {
        let bundle = Narrator::default().compose(&record(12), &ScoreResult::default());
        assert_eq!(bundle.title, "12 | Record 12");
        assert_eq!(bundle.summary, "Summary 12");
        assert_eq!(bundle.energy, "Energy 12");
        assert!(bundle.actions.is_empty());
        assert!(bundle.influence.is_empty());
    }

    #[test]
    fn test_action_rule_order() {
        // Inserted kitchen first, storage last: output order is fixed anyway.
        let score = layout(vec![
            Assignment::Tertiary(Direction::E, SpaceType::Kitchen),
            Assignment::Tertiary(Direction::SW, SpaceType::Toilet),
            Assignment::Tertiary(Direction::N, SpaceType::Storage),
            Assignment::Primary(Direction::NW, PersonId::Father),
        ]);

        let bundle = Narrator::default().compose(&record(1), &score);

        assert_eq!(bundle.actions.len(), 4);
        assert!(bundle.actions[0].contains("clutter"));
        assert!(bundle.actions[0].contains("North"));
        assert!(bundle.actions[1].contains("ventilated"));
        assert!(bundle.actions[2].contains("Organize the kitchen in the East"));
        assert!(bundle.actions[3].contains("father"));
    }

    #[test]
    fn test_unflagged_spaces_give_no_actions() {
        let score = layout(vec![Assignment::Tertiary(Direction::S, SpaceType::Balcony)]);
        let bundle = Narrator::default().compose(&record(3), &score);

        // Balcony has no rule; the direction owner still tops the ranking.
        assert_eq!(bundle.actions.len(), 1);
        assert!(bundle.actions[0].contains("middle daughter"));
        assert_eq!(bundle.flagged.len(), 1);
        assert_eq!(bundle.tags, vec!["space:balcony".to_string()]);
    }

    #[test]
    fn test_max_actions() {
        let score = layout(vec![
            Assignment::Tertiary(Direction::E, SpaceType::Kitchen),
            Assignment::Tertiary(Direction::N, SpaceType::Storage),
        ]);
        let narrator = Narrator::new(NarratorConfig {
            max_actions: 1,
            ..Default::default()
        });

        let bundle = narrator.compose(&record(2), &score);
        assert_eq!(bundle.actions.len(), 1);
        assert!(bundle.actions[0].contains("clutter"));
    }

    #[test]
    fn test_export_contains_sections() {
        let score = layout(vec![
            Assignment::Primary(Direction::SW, PersonId::Mother),
            Assignment::Tertiary(Direction::SW, SpaceType::Toilet),
        ]);
        let bundle = Narrator::default()
            .compose(&record(2), &score)
            .with_tags(vec!["direction:SW".to_string()])
            .with_note("A note.");

        let text = bundle.to_export_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2 | Record 2");
        assert!(text.contains("Tags: space:toilet, direction:SW"));
        assert!(text.contains("A note."));
        assert!(text.contains("Top influence: Mother (0.75)"));
        assert!(text.contains("Flagged: SW Toilet / bathroom (draining, damp)"));
        assert!(!text.contains("Person effect:"));
        assert!(text.contains("1. Keep the bathroom in the Southwest"));
        assert_eq!(*lines.last().unwrap(), NarratorConfig::default().disclaimer);
    }

    #[test]
    fn test_person_effect_and_semantics_carried() {
        let mut with_effect = record(8);
        with_effect.person_effect = "Draws the household together.".to_string();
        let score = layout(vec![Assignment::Tertiary(Direction::N, SpaceType::Storage)]);

        let bundle = Narrator::default().compose(&with_effect, &score);
        assert_eq!(bundle.person_effect, "Draws the household together.");
        assert_eq!(bundle.flagged[0].semantic, "stagnation, accumulation");

        let text = bundle.to_export_text();
        assert!(text.contains("Person effect: Draws the household together."));
        assert!(text.contains("Flagged: N Storage / clutter (stagnation, accumulation)"));
    }

    #[test]
    fn test_export_round_trips_top_person() {
        for person in PersonId::MEMBERS {
            let score = layout(vec![
                Assignment::Primary(Direction::N, person),
                Assignment::Secondary(Direction::S, PersonId::Other),
            ]);
            let text = Narrator::default().compose(&record(5), &score).to_export_text();
            assert_eq!(top_person_from_export(&text), score.top().map(|t| t.person));
        }
    }

    #[test]
    fn test_export_without_score_has_no_top() {
        let text = Narrator::default()
            .compose(&record(5), &ScoreResult::default())
            .to_export_text();
        assert_eq!(top_person_from_export(&text), None);
        assert!(!text.contains("Act on this first"));
    }
}
