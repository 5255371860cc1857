//! End-to-end readings against the shipped dataset.

use std::sync::Arc;
use terra_core::*;
use terra_rules::{Assignment, AssignmentMap, Direction, PersonId, SpaceType, Trigram};

const DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/hexagrams64.json");

fn engine() -> ReadingEngine {
    let store = ReferenceStore::new(JsonFileSource::new(DATASET));
    ReadingEngine::new(Arc::new(store), &TerraConfig::default())
}

#[tokio::test]
async fn test_shipped_dataset_matches_embedded() {
    let from_file = ReferenceStore::new(JsonFileSource::new(DATASET));
    let embedded = ReferenceStore::embedded();

    let file = from_file.load().await.unwrap();
    let inline = embedded.load().await.unwrap();
    assert_eq!(file.len(), 64);
    assert_eq!(file.records(), inline.records());
}

#[tokio::test]
async fn test_every_direction_reads_in_both_modes() {
    let engine = engine();

    for direction in Direction::ALL {
        let basic = engine
            .read(&ReadingRequest::new(direction.code()).with_seed(5))
            .await
            .unwrap();
        assert_eq!(basic.direction, direction);
        assert!(pool(basic.upper).unwrap().contains(&basic.record.number));

        let full = engine
            .read(
                &ReadingRequest::new(direction.label())
                    .with_intention("harmony")
                    .with_mode(ReadingMode::Full),
            )
            .await
            .unwrap();
        assert_eq!(full.lower, Some(Trigram::Kun));
        assert_eq!(full.upper, basic.upper);
    }
}

#[tokio::test]
async fn test_full_reading_export() {
    let layout = AssignmentMap::from_entries([
        Assignment::Primary(Direction::N, PersonId::MiddleSon),
        Assignment::Secondary(Direction::N, PersonId::Father),
        Assignment::Tertiary(Direction::E, SpaceType::Storage),
        Assignment::Tertiary(Direction::NE, SpaceType::Kitchen),
    ]);
    let request = ReadingRequest::new("N")
        .with_intention("career")
        .with_mode(ReadingMode::Full)
        .with_assignments(layout)
        .with_occupant("partner", true)
        .with_tag("work");

    let bundle = engine().read(&request).await.unwrap();

    // Water over water.
    assert_eq!(bundle.record.number.get(), 29);
    assert_eq!(bundle.record.name, "The Abysmal");

    // 0.60 primary; eldest son takes E's tertiary weight, youngest son NE's.
    let score = bundle.score.as_ref().unwrap();
    assert!((score.score_of(PersonId::MiddleSon) - 0.60).abs() < 1e-9);
    assert!((score.score_of(PersonId::Father) - 0.25).abs() < 1e-9);
    assert!((score.score_of(PersonId::EldestSon) - 0.15).abs() < 1e-9);
    assert!((score.score_of(PersonId::YoungestSon) - 0.15).abs() < 1e-9);

    let text = bundle.export_text();
    assert!(text.starts_with("29 | The Abysmal"));
    assert!(text.contains("Top influence: Middle son (0.60)"));
    assert!(text.contains("tag:work"));
    assert!(text.contains("role:middle_son"));
    assert!(text.contains("Symbols: 坎 Kan (Water) over 坎 Kan (Water)"));
    assert!(text.contains("Person effect: Whoever spends time here"));
    assert!(text.contains("E Storage / clutter (stagnation, accumulation)"));
    assert!(text.contains("you and this partner interact"));
    assert_eq!(top_person_from_export(&text), Some(PersonId::MiddleSon));

    // Storage before kitchen before the top person.
    let actions = &bundle.display.actions;
    assert_eq!(actions.len(), 3);
    assert!(actions[0].contains("storage in the East"));
    assert!(actions[1].contains("kitchen in the Northeast"));
    assert!(actions[2].contains("middle son"));
}

#[tokio::test]
async fn test_concurrent_readings_share_one_load() {
    let engine = Arc::new(engine());

    let handles: Vec<_> = (0..16)
        .map(|seed| {
            let engine = engine.clone();
            tokio::spawn(async move {
                engine
                    .read(&ReadingRequest::new("SE").with_seed(seed))
                    .await
                    .map(|bundle| bundle.record.number.get())
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let number = handle.await.unwrap().unwrap();
        let expected = pool(Trigram::Xun).unwrap()[seed % 8].get();
        assert_eq!(number, expected);
    }
    assert!(engine.store().is_loaded());
}

#[tokio::test]
async fn test_missing_dataset_is_unavailable() {
    let store = ReferenceStore::new(JsonFileSource::new("/nonexistent/hexagrams.json"));
    let engine = ReadingEngine::new(Arc::new(store), &TerraConfig::default());

    let response = engine.respond(&ReadingRequest::new("W").with_seed(1)).await;
    assert_eq!(response.error(), Some(ErrorKind::DataUnavailable));
}
