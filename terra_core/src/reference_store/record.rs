//! Reference records and the validated 64-record dataset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ReadingError;

/// Number of records in a complete dataset.
pub const RECORD_COUNT: usize = 64;

/// A record number, always within 1..=64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RecordKey(u8);

impl RecordKey {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = RECORD_COUNT as u32;

    pub fn new(number: u32) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    /// Zero-based position in a dataset.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Every key in ascending order.
    pub fn all() -> impl Iterator<Item = RecordKey> {
        (1..=RECORD_COUNT as u8).map(RecordKey)
    }
}

impl TryFrom<u32> for RecordKey {
    type Error = String;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        RecordKey::new(number).ok_or_else(|| format!("record key {number} outside 1..=64"))
    }
}

impl From<RecordKey> for u32 {
    fn from(key: RecordKey) -> Self {
        key.get()
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(alias = "key")]
    pub number: RecordKey,
    pub name: String,
    pub summary: String,
    pub home_impact: String,
    pub usage: String,
    pub energy: String,
    /// How the record bears on the person living with it. Not every dataset has it.
    #[serde(default)]
    pub person_effect: String,
}

impl Record {
    pub fn key(&self) -> RecordKey {
        self.number
    }
}

/// The two shapes a dataset file may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDataset {
    List(Vec<Record>),
    Keyed(BTreeMap<String, Record>),
}

/// A complete, validated dataset: exactly one record per key 1..=64.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Indexed by `key - 1`.
    records: Vec<Record>,
}

impl Dataset {
    /// Validate a set of records.
    pub fn from_records(mut records: Vec<Record>) -> Result<Self, ReadingError> {
        if records.len() != RECORD_COUNT {
            return Err(ReadingError::DataUnavailable(format!(
                "expected {RECORD_COUNT} records, found {}",
                records.len()
            )));
        }

        records.sort_by_key(|r| r.number);
        for (expected, record) in RecordKey::all().zip(&records) {
            if record.number != expected {
                // Sorted and counted, so a gap means a duplicate somewhere.
                return Err(ReadingError::DataUnavailable(format!(
                    "duplicate or missing record near key {expected}"
                )));
            }
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of records, or an object keyed by record number.
    pub fn from_json(json: &str) -> Result<Self, ReadingError> {
        let raw: RawDataset = serde_json::from_str(json)
            .map_err(|e| ReadingError::DataUnavailable(format!("malformed dataset: {e}")))?;

        let records = match raw {
            RawDataset::List(records) => records,
            RawDataset::Keyed(map) => {
                let mut records = Vec::with_capacity(map.len());
                for (key, record) in map {
                    if key.trim().parse::<u32>().ok() != Some(record.number.get()) {
                        return Err(ReadingError::DataUnavailable(format!(
                            "entry \"{key}\" holds record {}",
                            record.number
                        )));
                    }
                    records.push(record);
                }
                records
            }
        };

        Self::from_records(records)
    }

    pub fn get(&self, key: RecordKey) -> &Record {
        &self.records[key.index()]
    }

    /// Look up a raw record number.
    pub fn lookup(&self, number: u32) -> Result<&Record, ReadingError> {
        RecordKey::new(number)
            .map(|key| self.get(key))
            .ok_or(ReadingError::NotFound(number))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build a complete placeholder dataset, for tests.
#[cfg(test)]
pub(crate) fn fixture_records() -> Vec<Record> {
    RecordKey::all()
        .map(|key| Record {
            number: key,
            name: format!("Record {key}"),
            summary: format!("Summary {key}"),
            home_impact: format!("Impact {key}"),
            usage: format!("Usage {key}"),
            energy: format!("Energy {key}"),
            person_effect: String::new(),
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn fixture_json() -> String {
    serde_json::to_string(&fixture_records()).unwrap()
}
