//! Individual report command

use anyhow::{bail, Result};
use athlete_perf_application::IndividualReport;

use crate::commands::CommandContext;
use crate::output::{colors, ChartRenderer, Formattable, TableFormatter};

impl Formattable for IndividualReport {
    fn format_table(&self) -> Result<String> {
        let header = TableFormatter::key_value(vec![
            ("Name", self.name.clone()),
            ("Final punctuation", self.final_score.to_string()),
            ("Qualified", colors::verdict(self.qualified).to_string()),
        ]);

        let breakdown = TableFormatter::simple(
            vec!["Test", "Score", "Difficulty", "Weighted"],
            self.breakdown.iter().map(|b| {
                vec![
                    comfy_table::Cell::new(b.dimension.display_name()),
                    TableFormatter::number(format!("{:.1}", b.score)),
                    TableFormatter::number(format!("{:.1}", b.difficulty)),
                    TableFormatter::number(format!("{:.2}", b.weighted)),
                ]
            }),
        );

        let mut sections = vec![header, breakdown];
        sections.extend(self.charts.iter().map(ChartRenderer::bar));
        Ok(sections.join("\n"))
    }
}

/// Look up one athlete by exact name, after trimming
pub fn render(ctx: &CommandContext, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Enter a name");
    }

    match ctx.engine.individual_report(name)? {
        Some(report) => report.format(ctx.format),
        None => bail!("Athlete not found: {}", name),
    }
}

/// Print one athlete's report
pub fn show(ctx: &CommandContext, name: &str) -> Result<()> {
    ctx.emit(&render(ctx, name)?);
    Ok(())
}
