//! Reference Store - the cached, read-only 64-record dataset.
//!
//! The store owns a [`RecordSource`] and loads from it at most once. Every
//! caller that arrives before the load resolves waits on the same in-flight
//! fetch, and every caller afterwards sees the same cached outcome. A failed
//! load stays failed until the owner calls [`ReferenceStore::reset`].

mod record;
mod source;

pub use record::*;
pub use source::*;

#[cfg(test)]
pub(crate) use record::{fixture_json, fixture_records};

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::ReadingError;

pub struct ReferenceStore {
    source: Arc<dyn RecordSource>,
    cache: OnceCell<Result<Arc<Dataset>, ReadingError>>,
}

impl ReferenceStore {
    /// Create a store over the given source. Nothing is fetched yet.
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    pub fn from_shared(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// A store over the dataset compiled into this crate.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Load the dataset, or return the cached outcome of an earlier load.
    pub async fn load(&self) -> Result<Arc<Dataset>, ReadingError> {
        self.cache
            .get_or_init(|| async {
                let description = self.source.describe();
                match self.source.fetch().await {
                    Ok(dataset) => {
                        info!(source = %description, records = dataset.len(), "reference dataset loaded");
                        Ok(Arc::new(dataset))
                    }
                    Err(e) => {
                        warn!(source = %description, error = %e, "reference dataset failed to load");
                        Err(e)
                    }
                }
            })
            .await
            .clone()
    }

    /// Look up a record in the loaded dataset.
    ///
    /// Fails with `DataUnavailable` if [`ReferenceStore::load`] has not
    /// succeeded, and with `NotFound` for a number outside 1..=64.
    pub fn lookup(&self, number: u32) -> Result<&Record, ReadingError> {
        match self.cache.get() {
            Some(Ok(dataset)) => dataset.lookup(number),
            Some(Err(e)) => Err(e.clone()),
            None => Err(ReadingError::DataUnavailable(
                "dataset has not been loaded".to_string(),
            )),
        }
    }

    /// Whether a load has completed successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(self.cache.get(), Some(Ok(_)))
    }

    /// Forget the cached outcome so the next [`ReferenceStore::load`] fetches again.
    pub fn reset(&mut self) {
        self.cache.take();
    }

    /// The backing source, shared.
    pub fn source(&self) -> Arc<dyn RecordSource> {
        self.source.clone()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

impl std::fmt::Debug for ReferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceStore")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
