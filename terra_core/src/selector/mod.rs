//! Selector - deterministic mapping from symbols (and a seed) to a record key.
//!
//! Four strategies, kept separate because their contracts differ:
//!
//! | Strategy | Inputs | Guarantee |
//! |----------|--------|-----------|
//! | Direct | symbol | 8 possible outcomes |
//! | Seeded offset | symbol, seed | periodic in the seed with period 64 |
//! | Pool indexed | symbol, seed | key drawn from the symbol's 8-entry pool |
//! | Matrix | upper, lower | bijection of the 8×8 grid onto 1..=64 |

mod tables;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use terra_rules::{intention_to_symbol, Intention, Trigram};
use tracing::debug;

use crate::error::ReadingError;
use crate::reference_store::RecordKey;

/// Names of the selection strategies, as used in config and requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Direct,
    SeededOffset,
    PoolIndexed,
    Matrix,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Direct => "direct",
            StrategyKind::SeededOffset => "seeded_offset",
            StrategyKind::PoolIndexed => "pool_indexed",
            StrategyKind::Matrix => "matrix",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "direct" => Ok(StrategyKind::Direct),
            "seeded_offset" => Ok(StrategyKind::SeededOffset),
            "pool_indexed" => Ok(StrategyKind::PoolIndexed),
            "matrix" => Ok(StrategyKind::Matrix),
            _ => Err(ReadingError::InvalidSelection(format!("unknown strategy {s}"))),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The raw second input of a reading: a numeric seed or an intention key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedOrIntention {
    Seed(i64),
    Text(String),
}

impl SeedOrIntention {
    /// The numeric seed, parsing text if needed.
    pub fn seed(&self) -> Result<i64, ReadingError> {
        match self {
            SeedOrIntention::Seed(seed) => Ok(*seed),
            SeedOrIntention::Text(text) => text.trim().parse().map_err(|_| {
                ReadingError::InvalidSelection(format!("seed {text:?} is not an integer"))
            }),
        }
    }

    pub fn intention(&self) -> Result<Intention, ReadingError> {
        match self {
            SeedOrIntention::Text(text) => Ok(Intention::parse(text)?),
            SeedOrIntention::Seed(seed) => Err(ReadingError::InvalidSelection(format!(
                "expected an intention, got seed {seed}"
            ))),
        }
    }
}

impl From<i64> for SeedOrIntention {
    fn from(seed: i64) -> Self {
        SeedOrIntention::Seed(seed)
    }
}

impl From<&str> for SeedOrIntention {
    fn from(text: &str) -> Self {
        SeedOrIntention::Text(text.to_string())
    }
}

/// A fully resolved selection, ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SelectionStrategy {
    Direct { symbol: Trigram },
    SeededOffset { symbol: Trigram, seed: i64 },
    PoolIndexed { symbol: Trigram, seed: i64 },
    Matrix { upper: Trigram, lower: Trigram },
}

impl SelectionStrategy {
    /// Resolve a strategy from its kind, the direction's symbol, and the raw
    /// seed or intention.
    ///
    /// Seed strategies default to seed 0 when nothing is given; the matrix
    /// requires an intention.
    pub fn resolve(
        kind: StrategyKind,
        symbol: Trigram,
        input: Option<&SeedOrIntention>,
    ) -> Result<Self, ReadingError> {
        let strategy = match kind {
            StrategyKind::Direct => SelectionStrategy::Direct { symbol },
            StrategyKind::SeededOffset => SelectionStrategy::SeededOffset {
                symbol,
                seed: input.map(SeedOrIntention::seed).transpose()?.unwrap_or(0),
            },
            StrategyKind::PoolIndexed => SelectionStrategy::PoolIndexed {
                symbol,
                seed: input.map(SeedOrIntention::seed).transpose()?.unwrap_or(0),
            },
            StrategyKind::Matrix => {
                let intention = input
                    .ok_or_else(|| {
                        ReadingError::InvalidSelection("matrix selection needs an intention".into())
                    })?
                    .intention()?;
                SelectionStrategy::Matrix {
                    upper: symbol,
                    lower: intention_to_symbol(intention),
                }
            }
        };
        Ok(strategy)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            SelectionStrategy::Direct { .. } => StrategyKind::Direct,
            SelectionStrategy::SeededOffset { .. } => StrategyKind::SeededOffset,
            SelectionStrategy::PoolIndexed { .. } => StrategyKind::PoolIndexed,
            SelectionStrategy::Matrix { .. } => StrategyKind::Matrix,
        }
    }

    /// The symbol taken from the direction.
    pub fn upper(&self) -> Trigram {
        match *self {
            SelectionStrategy::Direct { symbol }
            | SelectionStrategy::SeededOffset { symbol, .. }
            | SelectionStrategy::PoolIndexed { symbol, .. } => symbol,
            SelectionStrategy::Matrix { upper, .. } => upper,
        }
    }

    /// The symbol taken from the intention, matrix only.
    pub fn lower(&self) -> Option<Trigram> {
        match *self {
            SelectionStrategy::Matrix { lower, .. } => Some(lower),
            _ => None,
        }
    }

    pub fn select(&self) -> Result<RecordKey, ReadingError> {
        let key = match *self {
            SelectionStrategy::Direct { symbol } => select_direct(symbol),
            SelectionStrategy::SeededOffset { symbol, seed } => select_seeded_offset(symbol, seed),
            SelectionStrategy::PoolIndexed { symbol, seed } => select_pool_indexed(symbol, seed),
            SelectionStrategy::Matrix { upper, lower } => select_matrix(upper, lower),
        }?;
        debug!(strategy = %self.kind(), upper = self.upper().name(), key = key.get(), "record selected");
        Ok(key)
    }
}

fn table_key(number: u32) -> Result<RecordKey, ReadingError> {
    RecordKey::new(number)
        .ok_or_else(|| ReadingError::InvalidSelection(format!("table entry {number} out of range")))
}

/// Offset base of a symbol, in 1..=8.
pub fn base_index(symbol: Trigram) -> u32 {
    tables::base_index(symbol)
}

/// The ordered candidate pool of a symbol.
pub fn pool(symbol: Trigram) -> Result<Vec<RecordKey>, ReadingError> {
    tables::pool_numbers(symbol).into_iter().map(table_key).collect()
}

/// One fixed record per symbol.
pub fn select_direct(symbol: Trigram) -> Result<RecordKey, ReadingError> {
    table_key(tables::direct_number(symbol))
}

/// `((base_index(symbol) + seed - 1) mod 64) + 1`, for any `i64` seed.
pub fn select_seeded_offset(symbol: Trigram, seed: i64) -> Result<RecordKey, ReadingError> {
    let base = i128::from(base_index(symbol));
    let offset = (base + i128::from(seed) - 1).rem_euclid(64);
    let number = u32::try_from(offset + 1)
        .map_err(|_| ReadingError::InvalidSelection(format!("seed {seed} out of range")))?;
    table_key(number)
}

/// `pool(symbol)[|seed| mod 8]`.
pub fn select_pool_indexed(symbol: Trigram, seed: i64) -> Result<RecordKey, ReadingError> {
    let slot = (seed.unsigned_abs() % 8) as usize;
    table_key(tables::pool_numbers(symbol)[slot])
}

/// The record at `[upper][lower]` of the 8×8 matrix.
pub fn select_matrix(upper: Trigram, lower: Trigram) -> Result<RecordKey, ReadingError> {
    table_key(tables::MATRIX[upper.index()][lower.index()])
}
