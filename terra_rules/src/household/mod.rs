//! Household layout: who or what the caller has placed at each direction.

mod assignment;
mod occupant;

pub use assignment::*;
pub use occupant::*;

use serde::{Deserialize, Serialize};

/// The three independent assignment layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Where each person sleeps.
    Primary,
    /// Where each person spends most waking time.
    Secondary,
    /// Functional space types (toilet, kitchen, ...).
    Tertiary,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Primary, Layer::Secondary, Layer::Tertiary];
}
