//! Where the reference dataset comes from.

use async_trait::async_trait;
use std::path::PathBuf;

use super::Dataset;
use crate::error::ReadingError;

/// The dataset bundled with the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../../../data/hexagrams64.json");

/// A backing resource for the reference dataset.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and validate the full dataset.
    async fn fetch(&self) -> Result<Dataset, ReadingError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// A JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch(&self) -> Result<Dataset, ReadingError> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ReadingError::DataUnavailable(format!("{}: {e}", self.path.display()))
        })?;
        Dataset::from_json(&json)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// The dataset compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

#[async_trait]
impl RecordSource for EmbeddedSource {
    async fn fetch(&self) -> Result<Dataset, ReadingError> {
        Dataset::from_json(EMBEDDED_DATASET)
    }

    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }
}

/// A dataset held as a JSON string in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    json: String,
}

impl InlineSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl RecordSource for InlineSource {
    async fn fetch(&self) -> Result<Dataset, ReadingError> {
        Dataset::from_json(&self.json)
    }

    fn describe(&self) -> String {
        format!("inline dataset ({} bytes)", self.json.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_store::fixture_json;
    use std::io::Write;

    #[tokio::test]
    async fn test_embedded_dataset_is_complete() {
        let dataset = EmbeddedSource.fetch().await.unwrap();
        assert_eq!(dataset.len(), 64);
        assert!(!dataset.lookup(1).unwrap().name.is_empty());
    }

    #[tokio::test]
    async fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(fixture_json().as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let dataset = source.fetch().await.unwrap();
        assert_eq!(dataset.lookup(64).unwrap().name, "Record 64");
        assert!(source.describe().starts_with("file "));
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let source = JsonFileSource::new("/nonexistent/hexagrams64.json");
        assert!(matches!(
            source.fetch().await,
            Err(ReadingError::DataUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_inline_source_rejects_garbage() {
        let source = InlineSource::new("{ not json");
        assert!(matches!(
            source.fetch().await,
            Err(ReadingError::DataUnavailable(_))
        ));
    }
}
