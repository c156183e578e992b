//! CSV row layout for stored athletes.

use athlete_perf_domain::{
    AthleteName, AthleteRecord, Difficulties, Scores, TestDimension, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Column names, in file order
pub const HEADER: [&str; 9] = [
    "Name",
    "Resistance",
    "Strength",
    "Velocity",
    "Resistence_Difficulty",
    "Strength_Difficulty",
    "Velocity_Difficulty",
    "Final_Punctuation",
    "Qualified",
];

/// One stored athlete as read from disk.
///
/// Files written by older tools spell the first score column `Resistence`;
/// both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Resistance", alias = "Resistence")]
    pub resistance: f64,
    #[serde(rename = "Strength")]
    pub strength: f64,
    #[serde(rename = "Velocity")]
    pub velocity: f64,
    #[serde(rename = "Resistence_Difficulty")]
    pub resistance_difficulty: f64,
    #[serde(rename = "Strength_Difficulty")]
    pub strength_difficulty: f64,
    #[serde(rename = "Velocity_Difficulty")]
    pub velocity_difficulty: f64,
    #[serde(rename = "Final_Punctuation")]
    pub final_punctuation: f64,
    #[serde(rename = "Qualified")]
    pub qualified: String,
}

impl CsvRow {
    /// Rebuild and re-validate the record this row describes
    pub fn into_record(self) -> Result<AthleteRecord, ValidationError> {
        let name = AthleteName::parse(self.name)?;
        let scores = Scores::new(self.resistance, self.strength, self.velocity)?;
        let difficulties = Difficulties::new(
            self.resistance_difficulty,
            self.strength_difficulty,
            self.velocity_difficulty,
        )?;
        let qualified = parse_qualified(&self.qualified)?;

        AthleteRecord::from_stored(name, scores, difficulties, self.final_punctuation, qualified)
    }
}

fn parse_qualified(value: &str) -> Result<bool, ValidationError> {
    match value {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(ValidationError::InvalidQualifiedFlag(other.to_string())),
    }
}

/// Borrowed row used when writing; field order matches [`HEADER`]
#[derive(Debug, Serialize)]
pub(crate) struct CsvRowRef<'a> {
    name: &'a str,
    resistance: f64,
    strength: f64,
    velocity: f64,
    resistance_difficulty: f64,
    strength_difficulty: f64,
    velocity_difficulty: f64,
    final_punctuation: u8,
    qualified: &'static str,
}

impl<'a> From<&'a AthleteRecord> for CsvRowRef<'a> {
    fn from(record: &'a AthleteRecord) -> Self {
        let scores = record.scores();
        let difficulties = record.difficulties();
        Self {
            name: record.name().as_str(),
            resistance: scores.get(TestDimension::Resistance),
            strength: scores.get(TestDimension::Strength),
            velocity: scores.get(TestDimension::Velocity),
            resistance_difficulty: difficulties.get(TestDimension::Resistance),
            strength_difficulty: difficulties.get(TestDimension::Strength),
            velocity_difficulty: difficulties.get(TestDimension::Velocity),
            final_punctuation: record.final_score(),
            qualified: record.qualified_display(),
        }
    }
}
