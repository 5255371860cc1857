//! Scorer - weighted attribution of a household layout to its members.
//!
//! For every direction:
//! 1. A primary (sleeping) occupant earns the primary weight
//! 2. A secondary (daily use) occupant earns the secondary weight
//! 3. A tertiary space type earns the tertiary weight for whoever the
//!    direction's trigram symbolically belongs to, regardless of who is
//!    actually placed there
//!
//! The result is rebuilt from scratch on every call; nothing is cached.

mod tally;

pub use tally::*;

use serde::{Deserialize, Serialize};
use terra_rules::{direction_to_symbol, AssignmentMap, Direction, Layer, PersonId, SpaceType};
use tracing::debug;

use crate::config::ConfigError;

/// Weight per assignment layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub primary: f64,
    pub secondary: f64,
    pub tertiary: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            primary: 0.60,
            secondary: 0.25,
            tertiary: 0.15,
        }
    }
}

impl ScoreWeights {
    pub fn for_layer(&self, layer: Layer) -> f64 {
        match layer {
            Layer::Primary => self.primary,
            Layer::Secondary => self.secondary,
            Layer::Tertiary => self.tertiary,
        }
    }

    /// Weights must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for layer in Layer::ALL {
            let weight = self.for_layer(layer);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{layer:?} weight {weight} must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }
}

/// Per-person influence and the flagged directions of one layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    pub tally: InfluenceTally,
    /// Directions holding a space type, in compass order.
    pub flagged: Vec<(Direction, SpaceType)>,
}

impl ScoreResult {
    pub fn score_of(&self, person: PersonId) -> f64 {
        self.tally.get(person)
    }

    /// People with a positive score, highest first.
    pub fn ranking(&self) -> Vec<RankedInfluence> {
        self.tally.ranked()
    }

    pub fn top(&self) -> Option<RankedInfluence> {
        self.tally.leader()
    }

    pub fn is_flagged(&self, space: SpaceType) -> bool {
        self.flagged.iter().any(|(_, s)| *s == space)
    }
}

/// Scores assignment layouts with a fixed set of weights.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score a layout. Never fails; an empty layout yields an empty result.
    pub fn score(&self, assignments: &AssignmentMap) -> ScoreResult {
        let mut tally = InfluenceTally::new();

        for (_, person) in assignments.primary.occupied() {
            tally.add_weight(person, self.weights.primary);
        }

        for (_, person) in assignments.secondary.occupied() {
            tally.add_weight(person, self.weights.secondary);
        }

        for (direction, _) in assignments.tertiary.occupied() {
            let owner = direction_to_symbol(direction).family_role().person();
            tally.add_weight(owner, self.weights.tertiary);
        }

        let result = ScoreResult {
            tally,
            flagged: assignments.flagged(),
        };

        debug!(
            ranked = result.ranking().len(),
            flagged = result.flagged.len(),
            top = ?result.top().map(|t| t.person),
            "layout scored"
        );
        result
    }
}

/// Score a layout with the given weights.
pub fn score(assignments: &AssignmentMap, weights: ScoreWeights) -> ScoreResult {
    Scorer::new(weights).score(assignments)
}
