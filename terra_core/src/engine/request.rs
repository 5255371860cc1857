//! Reading requests and responses, in the shape the UI layer exchanges.

use serde::{Deserialize, Serialize};
use terra_rules::{AssignmentMap, Direction, FamilyRole, Trigram};

use crate::error::{ErrorKind, ReadingError};
use crate::narrator::DisplayBundle;
use crate::reference_store::Record;
use crate::scorer::ScoreResult;
use crate::selector::{SeedOrIntention, StrategyKind};

/// Tag echoed when a request carries none.
pub const DEFAULT_TAG: &str = "general";

/// Reading fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingMode {
    /// Direction and seed only.
    #[default]
    Basic,
    /// Direction and intention, plus layout scoring when assignments are given.
    Full,
}

/// Who uses the space being read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupant {
    /// `"you"` for the person asking, or any label ("partner", "child", ...).
    pub role: String,
    #[serde(default)]
    pub shared_with_user: bool,
}

impl Occupant {
    /// One sentence on how the space bears on this occupant, through the
    /// family role of the direction's trigram.
    pub fn relationship_effect(&self, symbol: Trigram) -> String {
        let family = symbol.family_role().label();
        let role = self.role.trim();

        if role.eq_ignore_ascii_case("you") {
            format!("This space primarily reflects {family} energy back to you.")
        } else if self.shared_with_user {
            format!(
                "This space may influence how you and this {role} interact, especially through themes associated with {family}."
            )
        } else {
            format!(
                "This space may subtly affect your relationship with this {role} through {family}-type dynamics."
            )
        }
    }
}

/// A reading request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    /// Raw direction code; validated by the engine.
    pub direction: String,
    #[serde(default)]
    pub seed_or_intention: Option<SeedOrIntention>,
    #[serde(default)]
    pub mode: ReadingMode,
    /// Overrides the strategy configured for the mode.
    #[serde(default)]
    pub strategy: Option<StrategyKind>,
    #[serde(default)]
    pub assignments: Option<AssignmentMap>,
    #[serde(default)]
    pub occupant: Option<Occupant>,
    /// Free-form label echoed into the result.
    #[serde(default)]
    pub tag: Option<String>,
}

impl ReadingRequest {
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            seed_or_intention: None,
            mode: ReadingMode::Basic,
            strategy: None,
            assignments: None,
            occupant: None,
            tag: None,
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed_or_intention = Some(SeedOrIntention::Seed(seed));
        self
    }

    pub fn with_intention(mut self, intention: impl Into<String>) -> Self {
        self.seed_or_intention = Some(SeedOrIntention::Text(intention.into()));
        self
    }

    pub fn with_mode(mut self, mode: ReadingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_assignments(mut self, assignments: AssignmentMap) -> Self {
        self.assignments = Some(assignments);
        self
    }

    pub fn with_occupant(mut self, role: impl Into<String>, shared_with_user: bool) -> Self {
        self.occupant = Some(Occupant {
            role: role.into(),
            shared_with_user,
        });
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// A successful reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingBundle {
    pub record: Record,
    pub direction: Direction,
    pub upper: Trigram,
    pub lower: Option<Trigram>,
    pub family_role: FamilyRole,
    pub strategy: StrategyKind,
    pub mode: ReadingMode,
    pub tag: String,
    pub relationship_effect: Option<String>,
    /// Present in full mode when assignments were supplied.
    pub score: Option<ScoreResult>,
    pub display: DisplayBundle,
}

impl ReadingBundle {
    pub fn export_text(&self) -> String {
        self.display.to_export_text()
    }
}

/// What the UI layer receives: the bundle, or `{ "error": kind }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingResponse {
    Success(Box<ReadingBundle>),
    Failure { error: ErrorKind },
}

impl ReadingResponse {
    pub fn from_result(result: Result<ReadingBundle, ReadingError>) -> Self {
        match result {
            Ok(bundle) => ReadingResponse::Success(Box::new(bundle)),
            Err(e) => ReadingResponse::Failure { error: e.kind() },
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            ReadingResponse::Success(_) => None,
            ReadingResponse::Failure { error } => Some(*error),
        }
    }
}
