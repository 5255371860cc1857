//! Compass directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RuleError;

/// One of the eight compass points a reading can be taken from.
///
/// The center of the plan is deliberately not a variant: it carries no
/// symbol and accepts no assignment. See [`DirectionCode`] for the raw form
/// that can still name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Position in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The short compass code ("N", "SW", ...).
    pub fn code(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Direction::N => "North",
            Direction::NE => "Northeast",
            Direction::E => "East",
            Direction::SE => "Southeast",
            Direction::S => "South",
            Direction::SW => "Southwest",
            Direction::W => "West",
            Direction::NW => "Northwest",
        }
    }

    /// Parse a raw direction code, rejecting the center sentinel.
    pub fn parse(raw: &str) -> Result<Self, RuleError> {
        DirectionCode::parse(raw)?.point().ok_or_else(|| {
            RuleError::InvalidDirection(format!("{} is the center and has no direction", raw.trim()))
        })
    }
}

impl FromStr for Direction {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A raw direction as a caller may supply it, center included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionCode {
    Point(Direction),
    Center,
}

impl DirectionCode {
    /// Parse a code such as `"sw"`, `"South-West"`, `"north"` or `"C"`.
    ///
    /// Input is trimmed and case-folded; spaces, hyphens and underscores are
    /// ignored so that long names line up with the short codes.
    pub fn parse(raw: &str) -> Result<Self, RuleError> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let code = match folded.as_str() {
            "N" | "NORTH" => DirectionCode::Point(Direction::N),
            "NE" | "NORTHEAST" => DirectionCode::Point(Direction::NE),
            "E" | "EAST" => DirectionCode::Point(Direction::E),
            "SE" | "SOUTHEAST" => DirectionCode::Point(Direction::SE),
            "S" | "SOUTH" => DirectionCode::Point(Direction::S),
            "SW" | "SOUTHWEST" => DirectionCode::Point(Direction::SW),
            "W" | "WEST" => DirectionCode::Point(Direction::W),
            "NW" | "NORTHWEST" => DirectionCode::Point(Direction::NW),
            "C" | "CENTER" | "CENTRE" => DirectionCode::Center,
            _ => return Err(RuleError::InvalidDirection(raw.to_string())),
        };
        Ok(code)
    }

    /// The concrete direction, if this is not the center.
    pub fn point(self) -> Option<Direction> {
        match self {
            DirectionCode::Point(direction) => Some(direction),
            DirectionCode::Center => None,
        }
    }
}
