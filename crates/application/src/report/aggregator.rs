//! Read-only aggregation over the registry.

use super::charts::{BarChart, Heatmap, PieChart};
use crate::registry::Registry;
use crate::scoring::stats::{self, Description};
use crate::{ApplicationError, ApplicationResult};
use athlete_perf_domain::{AthleteRecord, TestDimension, TestTriple};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One line of the general report table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub final_score: u8,
    /// "Yes" or "No"
    pub qualified: String,
}

/// Pearson correlation between the raw scores of each pair of tests.
///
/// Rows and columns follow `dimensions`. A cell is `None` when fewer than two
/// athletes are registered or either test has zero variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub dimensions: [TestDimension; 3],
    pub values: [[Option<f64>; 3]; 3],
}

impl CorrelationMatrix {
    /// Build the matrix from per-test score columns
    pub fn from_columns(columns: &TestTriple<Vec<f64>>) -> Self {
        let mut values = [[None; 3]; 3];
        for row in TestDimension::ALL {
            for col in TestDimension::ALL {
                values[row.index()][col.index()] = stats::pearson(&columns[row], &columns[col]);
            }
        }

        Self {
            dimensions: TestDimension::ALL,
            values,
        }
    }

    /// Correlation between two tests
    pub fn get(&self, a: TestDimension, b: TestDimension) -> Option<f64> {
        self.values[a.index()][b.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub average_score: f64,
    pub qualified_count: usize,
    pub not_qualified_count: usize,
    pub correlation_matrix: CorrelationMatrix,
    /// Descriptive statistics over final scores
    pub description: Description,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralReportCharts {
    pub qualification: PieChart,
    pub correlation: Heatmap,
}

/// Summary of every registered athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralReport {
    pub table: Vec<ReportRow>,
    pub stats: Statistics,
    pub charts: GeneralReportCharts,
}

/// Per-test figures for one athlete
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestBreakdown {
    pub dimension: TestDimension,
    pub score: f64,
    pub difficulty: f64,
    /// `score * difficulty`
    pub weighted: f64,
}

/// Full detail for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualReport {
    pub name: String,
    pub final_score: u8,
    pub qualified: bool,
    pub breakdown: Vec<TestBreakdown>,
    pub charts: Vec<BarChart>,
}

impl IndividualReport {
    fn from_record(record: &AthleteRecord) -> Self {
        let scores = *record.scores().as_triple();
        let difficulties = *record.difficulties().as_triple();
        let weighted = record.weighted_contributions();

        let breakdown = TestDimension::ALL
            .iter()
            .map(|&dimension| TestBreakdown {
                dimension,
                score: scores[dimension],
                difficulty: difficulties[dimension],
                weighted: weighted[dimension],
            })
            .collect();

        Self {
            name: record.name().to_string(),
            final_score: record.final_score(),
            qualified: record.qualified(),
            breakdown,
            charts: vec![
                BarChart::scores(scores),
                BarChart::difficulties(difficulties),
                BarChart::weighted(weighted),
            ],
        }
    }

    /// "Yes" or "No"
    pub fn qualified_display(&self) -> &'static str {
        if self.qualified {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Builds reports from a borrowed registry; never mutates it
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    registry: &'a Registry,
}

impl<'a> Aggregator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Summary table and statistics; `None` when no athlete is registered
    #[instrument(skip(self), fields(athletes = self.registry.len()))]
    pub fn general_report(&self) -> Option<GeneralReport> {
        let records: Vec<&AthleteRecord> = self.registry.records().collect();

        let table: Vec<ReportRow> = records
            .iter()
            .map(|r| ReportRow {
                name: r.name().to_string(),
                final_score: r.final_score(),
                qualified: r.qualified_display().to_string(),
            })
            .collect();

        let final_scores: Vec<f64> = records.iter().map(|r| f64::from(r.final_score())).collect();
        let description = stats::describe(&final_scores)?;

        let qualified_count = records.iter().filter(|r| r.qualified()).count();
        let not_qualified_count = records.len() - qualified_count;

        let columns = TestTriple::from_fn(|d| records.iter().map(|r| r.scores().get(d)).collect::<Vec<f64>>());
        let correlation_matrix = CorrelationMatrix::from_columns(&columns);

        debug!(
            average = description.mean,
            qualified = qualified_count,
            "General report computed"
        );

        Some(GeneralReport {
            table,
            charts: GeneralReportCharts {
                qualification: PieChart::qualification(qualified_count, not_qualified_count),
                correlation: Heatmap::correlation(&correlation_matrix),
            },
            stats: Statistics {
                average_score: description.mean,
                qualified_count,
                not_qualified_count,
                correlation_matrix,
                description,
            },
        })
    }

    /// Detail for one athlete by exact name; `Ok(None)` when unknown
    pub fn individual_report(&self, name: &str) -> ApplicationResult<Option<IndividualReport>> {
        if name.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Athlete name cannot be empty".to_string(),
            ));
        }

        Ok(self.registry.get(name).map(IndividualReport::from_record))
    }
}
