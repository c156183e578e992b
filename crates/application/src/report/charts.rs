//! Chart projections.
//!
//! These are plain numeric descriptions of the charts a front end draws; no
//! rendering happens here.

use super::CorrelationMatrix;
use athlete_perf_domain::{TestDimension, TestTriple, DIFFICULTY_MAX, DIFFICULTY_MIN, SCORE_MAX, SCORE_MIN};
use serde::{Deserialize, Serialize};

/// One slice of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the total, in percent, rounded to one decimal
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Qualified versus non-qualified athletes
    pub fn qualification(qualified: usize, not_qualified: usize) -> Self {
        let total = qualified + not_qualified;
        let percentage = |count: usize| {
            if total == 0 {
                0.0
            } else {
                (count as f64 * 1000.0 / total as f64).round() / 10.0
            }
        };

        Self {
            title: "Qualified proportions".to_string(),
            slices: vec![
                PieSlice {
                    label: "Qualified".to_string(),
                    count: qualified,
                    percentage: percentage(qualified),
                },
                PieSlice {
                    label: "Non-Qualified".to_string(),
                    count: not_qualified,
                    percentage: percentage(not_qualified),
                },
            ],
        }
    }
}

/// Square grid of optional values with axis labels and formatted cell text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub title: String,
    pub labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
    /// Cell text with two decimals, or "n/a" when the value is undefined
    pub cell_labels: Vec<Vec<String>>,
}

impl Heatmap {
    pub fn correlation(matrix: &CorrelationMatrix) -> Self {
        let cells: Vec<Vec<Option<f64>>> = matrix.values.iter().map(|row| row.to_vec()).collect();
        let cell_labels = cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(value) => format!("{:.2}", value),
                        None => "n/a".to_string(),
                    })
                    .collect()
            })
            .collect();

        Self {
            title: "Score correlation".to_string(),
            labels: matrix.dimensions.iter().map(|d| d.display_name().to_string()).collect(),
            cells,
            cell_labels,
        }
    }
}

/// A bar chart with one bar per test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fixed y-axis range, when the chart has one
    pub y_range: Option<(f64, f64)>,
}

impl BarChart {
    fn per_test(title: &str, values: TestTriple<f64>, y_range: Option<(f64, f64)>) -> Self {
        Self {
            title: title.to_string(),
            labels: TestDimension::ALL.iter().map(|d| d.display_name().to_string()).collect(),
            values: values.to_array().to_vec(),
            y_range,
        }
    }

    pub fn scores(scores: TestTriple<f64>) -> Self {
        Self::per_test("Punctuation by test", scores, Some((SCORE_MIN, SCORE_MAX)))
    }

    pub fn difficulties(difficulties: TestTriple<f64>) -> Self {
        Self::per_test(
            "Difficulties by test",
            difficulties,
            Some((DIFFICULTY_MIN, DIFFICULTY_MAX)),
        )
    }

    pub fn weighted(contributions: TestTriple<f64>) -> Self {
        Self::per_test("Final punctuation", contributions, None)
    }
}
