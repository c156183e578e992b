//! Register command

use anyhow::{bail, Result};
use athlete_perf_domain::{TestDimension, TestTriple};
use colored::Colorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::commands::CommandContext;
use crate::interactive::{self, check_name};
use crate::output::{colors, Formattable, TableFormatter};

/// Values given on the command line; missing ones are prompted for
#[derive(Debug, Clone, Default)]
pub struct RegisterArgs {
    pub name: Option<String>,
    pub resistance: Option<f64>,
    pub strength: Option<f64>,
    pub velocity: Option<f64>,
}

impl RegisterArgs {
    fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.resistance.is_some()
            && self.strength.is_some()
            && self.velocity.is_some()
    }
}

/// Result of a registration, as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationSummary {
    pub name: String,
    pub final_score: u8,
    pub qualified: bool,
    pub data_file: String,
}

impl RegistrationSummary {
    pub fn status(&self) -> &'static str {
        if self.qualified {
            "QUALIFIED"
        } else {
            "Not Qualified"
        }
    }
}

impl Formattable for RegistrationSummary {
    fn format_table(&self) -> Result<String> {
        let status = if self.qualified {
            colors::success(self.status())
        } else {
            colors::error(self.status())
        };
        let table = TableFormatter::key_value(vec![
            ("Name", self.name.clone()),
            ("Final Score", self.final_score.to_string()),
            ("Status", status.to_string()),
        ]);
        Ok(format!(
            "{}\n{}\n{}",
            colors::success("Athlete Registered!").bold(),
            table,
            colors::dim(&format!("Data saved to {}", self.data_file)),
        ))
    }
}

/// Register an athlete, prompting for anything not given
pub fn register(ctx: &mut CommandContext, args: RegisterArgs) -> Result<()> {
    let args = if args.is_complete() {
        args
    } else if std::io::stdin().is_terminal() {
        complete_interactively(args)?
    } else {
        bail!("Name and all three scores are required when not running interactively");
    };

    let summary = run(ctx, args)?;
    ctx.emit(&summary.format(ctx.format)?);
    Ok(())
}

fn complete_interactively(args: RegisterArgs) -> Result<RegisterArgs> {
    let name = match args.name {
        Some(name) => name,
        None => interactive::prompt_name()?,
    };
    let given = TestTriple::new(args.resistance, args.strength, args.velocity);
    let mut scores = [0.0; 3];
    for dimension in TestDimension::ALL {
        scores[dimension.index()] = match given[dimension] {
            Some(score) => score,
            None => interactive::prompt_score(dimension)?,
        };
    }

    Ok(RegisterArgs {
        name: Some(name),
        resistance: Some(scores[0]),
        strength: Some(scores[1]),
        velocity: Some(scores[2]),
    })
}

/// Register from complete arguments
pub fn run(ctx: &mut CommandContext, args: RegisterArgs) -> Result<RegistrationSummary> {
    let (Some(name), Some(resistance), Some(strength), Some(velocity)) =
        (args.name, args.resistance, args.strength, args.velocity)
    else {
        bail!("Name and all three scores are required");
    };
    let name = check_name(&name).map_err(anyhow::Error::msg)?.to_string();

    let outcome = ctx.engine.register(&name, resistance, strength, velocity)?;
    tracing::debug!(name = %name, final_score = outcome.final_score, "Registered from CLI");

    Ok(RegistrationSummary {
        name,
        final_score: outcome.final_score,
        qualified: outcome.qualified,
        data_file: ctx.data_file().display().to_string(),
    })
}
