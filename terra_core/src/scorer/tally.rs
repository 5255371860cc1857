//! Accumulated influence per household member.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use terra_rules::PersonId;

/// Units per 1.0 of weight when comparing scores.
const SCORE_RESOLUTION: f64 = 1e9;

/// One person's accumulated weight, as it appears in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedInfluence {
    pub person: PersonId,
    pub score: f64,
}

/// Weight accumulated per person.
///
/// Every household member has an entry, zero included; `PersonId::None`
/// never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceTally {
    weights: BTreeMap<PersonId, f64>,
}

impl Default for InfluenceTally {
    fn default() -> Self {
        Self {
            weights: PersonId::MEMBERS.iter().map(|p| (*p, 0.0)).collect(),
        }
    }
}

impl InfluenceTally {
    /// A tally with every member at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add weight to a person (accumulates). Adding to `None` does nothing.
    pub fn add_weight(&mut self, person: PersonId, weight: f64) {
        if person == PersonId::None {
            return;
        }
        *self.weights.entry(person).or_insert(0.0) += weight;
    }

    pub fn get(&self, person: PersonId) -> f64 {
        self.weights.get(&person).copied().unwrap_or(0.0)
    }

    /// People with a positive score, highest first; equal scores keep
    /// `PersonId` declaration order.
    ///
    /// Scores are compared at nanounit resolution, so sums that differ only
    /// by float rounding rank as ties.
    pub fn ranked(&self) -> Vec<RankedInfluence> {
        let mut ranked: Vec<_> = self
            .weights
            .iter()
            .filter(|(_, score)| quantize(**score) > 0)
            .map(|(person, score)| RankedInfluence {
                person: *person,
                score: *score,
            })
            .collect();

        ranked.sort_by_key(|r| (Reverse(quantize(r.score)), r.person));
        ranked
    }

    /// The first entry of [`InfluenceTally::ranked`].
    pub fn leader(&self) -> Option<RankedInfluence> {
        self.ranked().into_iter().next()
    }
}

fn quantize(score: f64) -> i64 {
    (score * SCORE_RESOLUTION).round() as i64
}
