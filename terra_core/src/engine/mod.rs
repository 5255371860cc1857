//! Reading Engine - orchestrates one reading from request to bundle.
//!
//! 1. **Direction**: parse the code and map it to its trigram
//! 2. **Selection**: resolve the strategy and pick a record key
//! 3. **Lookup**: load the reference dataset (once) and fetch the record
//! 4. **Scoring**: score the household layout, full mode only
//! 5. **Narration**: compose the display bundle
//!
//! Steps 1 and 2 fail fast, before the store is consulted.

mod request;

pub use request::*;

use std::sync::Arc;
use terra_rules::{direction_to_symbol, Direction};
use tracing::debug;

use crate::config::{SelectionConfig, TerraConfig};
use crate::error::ReadingError;
use crate::narrator::Narrator;
use crate::reference_store::ReferenceStore;
use crate::scorer::{ScoreResult, Scorer};
use crate::selector::{SelectionStrategy, StrategyKind};

pub struct ReadingEngine {
    store: Arc<ReferenceStore>,
    scorer: Scorer,
    narrator: Narrator,
    selection: SelectionConfig,
}

impl ReadingEngine {
    /// Create an engine over an existing store.
    pub fn new(store: Arc<ReferenceStore>, config: &TerraConfig) -> Self {
        Self {
            store,
            scorer: Scorer::new(config.weights),
            narrator: Narrator::new(config.narrator.clone()),
            selection: config.selection,
        }
    }

    /// Create an engine with a fresh store over the configured dataset.
    pub fn from_config(config: &TerraConfig) -> Self {
        let store = ReferenceStore::from_shared(config.dataset.source());
        Self::new(Arc::new(store), config)
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Forget the store's cached load outcome so the next reading fetches
    /// again. A store shared with other holders is replaced by a fresh one
    /// over the same source; the other holders keep their outcome.
    pub fn reset_store(&mut self) {
        if let Some(store) = Arc::get_mut(&mut self.store) {
            store.reset();
            return;
        }
        let source = self.store.source();
        self.store = Arc::new(ReferenceStore::from_shared(source));
    }

    /// The strategy a request resolves to.
    pub fn strategy_for(&self, request: &ReadingRequest) -> StrategyKind {
        request.strategy.unwrap_or(match request.mode {
            ReadingMode::Basic => self.selection.basic,
            ReadingMode::Full => self.selection.full,
        })
    }

    /// Produce a reading.
    pub async fn read(&self, request: &ReadingRequest) -> Result<ReadingBundle, ReadingError> {
        let direction = Direction::parse(&request.direction)?;
        let upper = direction_to_symbol(direction);

        let strategy = SelectionStrategy::resolve(
            self.strategy_for(request),
            upper,
            request.seed_or_intention.as_ref(),
        )?;
        let key = strategy.select()?;

        self.store.load().await?;
        let record = self.store.lookup(key.get())?.clone();

        let score = match (request.mode, &request.assignments) {
            (ReadingMode::Full, Some(assignments)) => Some(self.scorer.score(assignments)),
            _ => None,
        };

        let tag = request
            .tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TAG)
            .to_string();

        let relationship_effect = request
            .occupant
            .as_ref()
            .map(|occupant| occupant.relationship_effect(upper));

        let family_role = upper.family_role();
        let mut tags = vec![
            format!("direction:{direction}"),
            format!("upper:{}", upper.name().to_lowercase()),
            format!("role:{}", family_role.id()),
        ];
        if let Some(lower) = strategy.lower() {
            tags.push(format!("lower:{}", lower.name().to_lowercase()));
        }
        tags.push(format!("tag:{tag}"));

        let symbols = match strategy.lower() {
            Some(lower) => format!("Symbols: {upper} over {lower}"),
            None => format!("Symbol: {upper}"),
        };
        let mut display = self
            .narrator
            .compose(&record, score.as_ref().unwrap_or(&ScoreResult::default()))
            .with_tags(tags)
            .with_note(symbols);
        if let Some(effect) = &relationship_effect {
            display = display.with_note(effect.clone());
        }

        debug!(
            direction = %direction,
            strategy = %strategy.kind(),
            key = key.get(),
            scored = score.is_some(),
            "reading composed"
        );

        Ok(ReadingBundle {
            record,
            direction,
            upper,
            lower: strategy.lower(),
            family_role,
            strategy: strategy.kind(),
            mode: request.mode,
            tag,
            relationship_effect,
            score,
            display,
        })
    }

    /// [`ReadingEngine::read`], folded into the UI response shape.
    pub async fn respond(&self, request: &ReadingRequest) -> ReadingResponse {
        ReadingResponse::from_result(self.read(request).await)
    }
}
