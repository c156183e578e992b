//! Text renderings of report charts

use athlete_perf_application::{BarChart, Heatmap, PieChart};
use colored::*;
use comfy_table::{Cell, Color};

use super::TableFormatter;

/// Width of a full bar, in characters
const BAR_WIDTH: usize = 40;

/// Renders chart projections for a terminal
pub struct ChartRenderer;

impl ChartRenderer {
    /// One proportional bar per slice
    pub fn pie(chart: &PieChart) -> String {
        let label_width = chart.slices.iter().map(|s| s.label.len()).max().unwrap_or(0);

        let mut out = format!("{}\n", chart.title.bold());
        for slice in &chart.slices {
            out.push_str(&format!(
                "  {:<width$}  {}  {:>5.1}% ({})\n",
                slice.label,
                bar(slice.percentage / 100.0),
                slice.percentage,
                slice.count,
                width = label_width,
            ));
        }
        out
    }

    /// Horizontal bars scaled to the chart's range, or to its largest value
    pub fn bar(chart: &BarChart) -> String {
        let label_width = chart.labels.iter().map(String::len).max().unwrap_or(0);
        let (low, high) = chart.y_range.unwrap_or_else(|| {
            let max = chart.values.iter().copied().fold(0.0_f64, f64::max);
            (0.0, max)
        });

        let mut out = format!("{}\n", chart.title.bold());
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            let fraction = if high > low {
                (value - low) / (high - low)
            } else {
                0.0
            };
            out.push_str(&format!(
                "  {:<width$}  {}  {:.2}\n",
                label,
                bar(fraction),
                value,
                width = label_width,
            ));
        }
        out
    }

    /// Grid of labelled cells; undefined cells are dimmed
    pub fn heatmap(chart: &Heatmap) -> String {
        let mut table = TableFormatter::new();

        let mut header = vec![Cell::new("")];
        header.extend(chart.labels.iter().map(Cell::new));
        table.set_header(header);

        for (label, (values, texts)) in chart
            .labels
            .iter()
            .zip(chart.cells.iter().zip(&chart.cell_labels))
        {
            let mut row = vec![Cell::new(label)];
            row.extend(values.iter().zip(texts).map(|(value, text)| {
                let cell = TableFormatter::number(text);
                match value {
                    Some(v) if *v >= 0.5 => cell.fg(Color::Green),
                    Some(v) if *v <= -0.5 => cell.fg(Color::Red),
                    Some(_) => cell,
                    None => cell.fg(Color::DarkGrey),
                }
            }));
            table.add_row(row);
        }

        format!("{}\n{}\n", chart.title.bold(), table)
    }
}

fn bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
