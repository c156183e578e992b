//! Test fixtures for generating athletes with realistic data.

use crate::builders::AthleteRecordBuilder;
use athlete_perf_domain::AthleteRecord;
use fake::{faker::name::en::Name, Fake};
use std::path::PathBuf;
use tempfile::TempDir;

/// Alice: (80, 90, 70) on neutral difficulties, final 80, qualified
pub fn alice() -> AthleteRecord {
    AthleteRecordBuilder::new()
        .with_name("Alice")
        .with_scores(80.0, 90.0, 70.0)
        .build()
}

/// Bob: (50, 50, 50) with difficulties (1.2, 1.1, 1.3), final 50, not qualified
pub fn bob() -> AthleteRecord {
    AthleteRecordBuilder::new()
        .with_name("Bob")
        .with_uniform_score(50.0)
        .with_difficulties(1.2, 1.1, 1.3)
        .build()
}

/// A random full name
pub fn random_athlete_name() -> String {
    Name().fake()
}

/// A score in [0, 100] with one decimal
pub fn random_score() -> f64 {
    let tenths: u16 = (0..=1000).fake();
    f64::from(tenths) / 10.0
}

/// A difficulty in {1.0, 1.1, 1.2, 1.3}
pub fn random_difficulty() -> f64 {
    let step: u8 = (0..=3).fake();
    f64::from(10 + step) / 10.0
}

/// A random, valid record
pub fn random_record() -> AthleteRecord {
    AthleteRecordBuilder::new()
        .with_name(random_athlete_name())
        .with_scores(random_score(), random_score(), random_score())
        .with_difficulties(random_difficulty(), random_difficulty(), random_difficulty())
        .build()
}

/// `count` random records with distinct names
pub fn random_records(count: usize) -> Vec<AthleteRecord> {
    (0..count)
        .map(|i| {
            AthleteRecordBuilder::new()
                .with_name(format!("{} #{}", random_athlete_name(), i))
                .with_scores(random_score(), random_score(), random_score())
                .with_difficulties(random_difficulty(), random_difficulty(), random_difficulty())
                .build()
        })
        .collect()
}

/// A data file path inside a fresh temporary directory.
///
/// The file itself is not created; keep the `TempDir` alive for the test.
pub fn temp_data_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temporary directory");
    let path = dir.path().join("participants_data.csv");
    (dir, path)
}
