//! Integration tests for the CSV store behind a scoring engine

use athlete_perf_application::{
    ApplicationError, AthleteStorePort, FixedDifficultySource, ScoringEngine,
};
use athlete_perf_infrastructure::CsvAthleteStore;
use athlete_perf_testing::{alice, bob, random_records, strategies, temp_data_file};
use proptest::prelude::*;

#[test]
fn test_engine_state_survives_restart() {
    let (_dir, path) = temp_data_file();
    let source = FixedDifficultySource::new(1.2, 1.1, 1.3);

    let mut engine = ScoringEngine::load(CsvAthleteStore::new(&path), source.clone()).unwrap();
    engine.register("Alice", 80.0, 90.0, 70.0).unwrap();
    engine.register("Bob", 50.0, 50.0, 50.0).unwrap();
    engine.register("Alice", 70.0, 70.0, 70.0).unwrap();

    let reloaded = ScoringEngine::load(CsvAthleteStore::new(&path), source).unwrap();

    assert!(reloaded.load_warnings().is_empty());
    let names: Vec<&str> = reloaded.registry().records().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(reloaded.registry().get("Alice"), engine.registry().get("Alice"));
    assert_eq!(reloaded.registry().get("Alice").unwrap().final_score(), 70);
}

#[test]
fn test_fixture_records_round_trip() {
    let (_dir, path) = temp_data_file();
    let store = CsvAthleteStore::new(&path);
    let records = random_records(30);
    let refs: Vec<_> = records.iter().collect();

    store.save(&refs).unwrap();
    let outcome = store.load().unwrap();

    assert_eq!(outcome.records, records);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_failed_write_rolls_back_registry() {
    let (dir, path) = temp_data_file();
    let store = CsvAthleteStore::new(&path);
    store.save(&[&alice(), &bob()]).unwrap();

    let mut engine = ScoringEngine::load(store, FixedDifficultySource::neutral()).unwrap();

    // Swap the directory out from under the engine so the next write fails
    std::fs::remove_dir_all(dir.path()).unwrap();

    let err = engine.register("Carol", 95.0, 40.0, 60.0).unwrap_err();
    assert!(matches!(err, ApplicationError::Persistence(_)));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(engine.registry().len(), 2);
    assert!(!engine.registry().contains("Carol"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_saved_records_reload_identically(
        records in proptest::collection::vec(strategies::athlete_record(), 0..12)
    ) {
        let (_dir, path) = temp_data_file();
        let store = CsvAthleteStore::new(&path);

        let mut registry = athlete_perf_application::Registry::new();
        for record in records {
            registry.upsert(record);
        }
        let refs: Vec<_> = registry.records().collect();
        store.save(&refs).unwrap();

        let outcome = store.load().unwrap();
        prop_assert!(outcome.warnings.is_empty());
        let reloaded: Vec<_> = outcome.records.iter().collect();
        prop_assert_eq!(reloaded, refs);
    }
}
