//! General report command

use anyhow::Result;
use athlete_perf_application::{Description, GeneralReport};

use crate::commands::CommandContext;
use crate::output::{colors, ChartRenderer, Formattable, OutputFormat, TableFormatter};

impl Formattable for GeneralReport {
    fn format_table(&self) -> Result<String> {
        let athletes = TableFormatter::simple(
            vec!["Name", "Final Punctuation", "Qualified"],
            self.table.iter().map(|row| {
                vec![
                    comfy_table::Cell::new(&row.name),
                    TableFormatter::number(row.final_score),
                    comfy_table::Cell::new(&row.qualified),
                ]
            }),
        );

        let summary = TableFormatter::key_value(vec![
            ("Average score", format!("{:.2}", self.stats.average_score)),
            ("Qualified", self.stats.qualified_count.to_string()),
            ("Not qualified", self.stats.not_qualified_count.to_string()),
        ]);

        Ok([
            colors::bold("Athletes").to_string(),
            athletes,
            colors::bold("Statistics").to_string(),
            summary,
            describe_table(&self.stats.description),
            ChartRenderer::pie(&self.charts.qualification),
            ChartRenderer::heatmap(&self.charts.correlation),
        ]
        .join("\n"))
    }
}

fn describe_table(description: &Description) -> String {
    let std = description
        .std
        .map(|s| format!("{:.2}", s))
        .unwrap_or_else(|| "n/a".to_string());

    TableFormatter::simple(
        vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"],
        [vec![
            description.count.to_string(),
            format!("{:.2}", description.mean),
            std,
            format!("{:.2}", description.min),
            format!("{:.2}", description.q25),
            format!("{:.2}", description.median),
            format!("{:.2}", description.q75),
            format!("{:.2}", description.max),
        ]],
    )
}

/// Render the general report, or a notice when nobody is registered
pub fn render(ctx: &CommandContext) -> Result<String> {
    match ctx.engine.general_report() {
        Some(report) => report.format(ctx.format),
        None if ctx.format == OutputFormat::Json => Ok("null".to_string()),
        None => Ok(colors::warning("No athletes registered yet.").to_string()),
    }
}

/// Print the general report
pub fn general(ctx: &CommandContext) -> Result<()> {
    ctx.emit(&render(ctx)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;

    fn populate(ctx: &mut CommandContext) {
        ctx.engine.register("Alice", 80.0, 90.0, 70.0).unwrap();
        ctx.engine.register("Bob", 50.0, 50.0, 50.0).unwrap();
        ctx.engine.register("Carol", 95.0, 40.0, 60.0).unwrap();
    }

    #[test]
    fn test_empty_registry() {
        colored::control::set_override(false);
        let (_dir, ctx) = context(OutputFormat::Table);
        assert_eq!(render(&ctx).unwrap(), "No athletes registered yet.");

        let (_dir, ctx) = context(OutputFormat::Json);
        assert_eq!(render(&ctx).unwrap(), "null");
    }

    #[test]
    fn test_table_report_sections() {
        colored::control::set_override(false);
        let (_dir, mut ctx) = context(OutputFormat::Table);
        populate(&mut ctx);

        let rendered = render(&ctx).unwrap();
        for expected in [
            "Alice",
            "Carol",
            "Average score",
            "75%",
            "Qualified proportions",
            "Score correlation",
        ] {
            assert!(rendered.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_json_report() {
        let (_dir, mut ctx) = context(OutputFormat::Json);
        populate(&mut ctx);

        let value: serde_json::Value = serde_json::from_str(&render(&ctx).unwrap()).unwrap();
        assert_eq!(value["table"].as_array().unwrap().len(), 3);
        assert_eq!(value["stats"]["description"]["count"], 3);
    }
}
