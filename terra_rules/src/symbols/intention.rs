//! The intention vocabulary for two-axis readings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RuleError;

/// What the occupant wants a space to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intention {
    Stability,
    Career,
    Health,
    Growth,
    Visibility,
    Harmony,
    Purpose,
    InnerFocus,
}

impl Intention {
    pub const ALL: [Intention; 8] = [
        Intention::Stability,
        Intention::Career,
        Intention::Health,
        Intention::Growth,
        Intention::Visibility,
        Intention::Harmony,
        Intention::Purpose,
        Intention::InnerFocus,
    ];

    /// Canonical key, as used in requests.
    pub fn key(self) -> &'static str {
        match self {
            Intention::Stability => "stability",
            Intention::Career => "career",
            Intention::Health => "health",
            Intention::Growth => "growth",
            Intention::Visibility => "visibility",
            Intention::Harmony => "harmony",
            Intention::Purpose => "purpose",
            Intention::InnerFocus => "inner-focus",
        }
    }

    /// Parse an intention key; case, `_` and `-` are not significant.
    pub fn parse(raw: &str) -> Result<Self, RuleError> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Intention::ALL
            .into_iter()
            .find(|i| i.key().replace('-', "") == folded)
            .ok_or_else(|| RuleError::InvalidIntention(raw.to_string()))
    }
}

impl FromStr for Intention {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intention::parse(s)
    }
}

impl std::fmt::Display for Intention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
