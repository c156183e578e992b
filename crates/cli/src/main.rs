//! Athlete Performance CLI
//!
//! Command-line interface for registering athletes and reading their reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use athlete_perf_application::ApplicationError;
use athlete_perf_cli::commands::register::RegisterArgs;
use athlete_perf_cli::commands::{register, report, show, CommandContext};
use athlete_perf_cli::config::Config;
use athlete_perf_cli::interactive;
use athlete_perf_cli::output::{OutputFormat, TableFormatter};
use athlete_perf_common::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "athlete-perf")]
#[command(author, version, about = "Athlete performance scoring")]
#[command(long_about = "Register athletes' resistance, strength and velocity scores.\n\n\
    Each registration draws difficulty multipliers, computes a weighted final score, \
    decides qualification and saves the whole registry to CSV.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (overrides config)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// CSV data file (overrides config)
    #[arg(long, global = true, env = "ATHLETE_PERF_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register an athlete, or overwrite one with the same name
    #[command(alias = "r", alias = "add")]
    Register {
        /// Athlete name; prompted for when omitted
        name: Option<String>,

        /// Resistance score (0-100)
        #[arg(allow_negative_numbers = true)]
        resistance: Option<f64>,

        /// Strength score (0-100)
        #[arg(allow_negative_numbers = true)]
        strength: Option<f64>,

        /// Velocity score (0-100)
        #[arg(allow_negative_numbers = true)]
        velocity: Option<f64>,
    },

    /// Show the general report for every athlete
    #[command(alias = "g", alias = "general")]
    Report,

    /// Show one athlete's report
    #[command(alias = "s", alias = "individual")]
    Show {
        /// Athlete name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show or change CLI configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "athlete-perf", &mut std::io::stdout());
}

fn run_config(config: &mut Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => {
            println!("{}", TableFormatter::key_value(config.entries()));
        }
        Some(ConfigCommands::Set { key, value }) => {
            config.set(&key, &value)?;
            println!("{} {} = {}", "Set".green(), key, value);
        }
        Some(ConfigCommands::Get { key }) => match config.get(&key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!("No value for configuration key: {}", key),
        },
        Some(ConfigCommands::Reset { yes }) => {
            if yes || interactive::confirm("Reset configuration to defaults?")? {
                config.reset()?;
                println!("{}", "Configuration reset to defaults".green());
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    // Handle completions command early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if !config.colored {
        colored::control::set_override(false);
    }

    if let Commands::Config { command } = cli.command {
        return run_config(&mut config, command);
    }

    let app_config = AppConfig::load()?;
    athlete_perf_common::init_tracing(
        app_config.telemetry.json_logging,
        if cli.verbose || config.debug {
            "debug"
        } else {
            app_config.telemetry.log_level.as_str()
        },
    )?;

    let mut ctx = CommandContext::new(config, &app_config, cli.data_file)?;

    match cli.command {
        Commands::Register {
            name,
            resistance,
            strength,
            velocity,
        } => register::register(
            &mut ctx,
            RegisterArgs {
                name,
                resistance,
                strength,
                velocity,
            },
        ),
        Commands::Report => report::general(&ctx),
        Commands::Show { name } => show::show(&ctx, &name),
        Commands::Config { .. } | Commands::Completions { .. } => {
            // Already handled above
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if verbose {
            eprintln!("\n{}", "Details:".dimmed());
            eprintln!("{:?}", e);
        }
        let code = e
            .downcast_ref::<ApplicationError>()
            .map(ApplicationError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
