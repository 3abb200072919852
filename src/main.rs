use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use pacer::config::AppConfig;
use pacer::error::PacerError;
use pacer::jobs::{Job, Readings};
use pacer::logging::{self, LogLevel};
use pacer::parse;
use pacer::shell::Shell;

/// Pacer - Running Pace Calculator
///
/// An interactive calculator for running pace, duration, and distance.
/// Pick the quantity to derive and supply the other two in free-form
/// notation ('10km', 'marathon', '45:00', '5:30 min/km', ...).
#[derive(Parser)]
#[command(name = "pacer")]
#[command(version = "0.1.0")]
#[command(about = "Running pace, duration, and distance calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format (pretty, json, compact)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate pace from distance and duration
    Pace {
        /// Distance, e.g. '10km', '5k', '400m', 'marathon'
        #[arg(short, long)]
        distance: String,

        /// Duration, e.g. '45:00', '1:30:00', '90'
        #[arg(short = 't', long)]
        duration: String,
    },

    /// Calculate duration from pace and distance
    Duration {
        /// Pace, e.g. '5:30 min/km', '300 sec/km'
        #[arg(short, long)]
        pace: String,

        /// Distance, e.g. '10km', '5k', '400m', 'marathon'
        #[arg(short, long)]
        distance: String,
    },

    /// Calculate distance from pace and duration
    Distance {
        /// Pace, e.g. '5:30 min/km', '300 sec/km'
        #[arg(short, long)]
        pace: String,

        /// Duration, e.g. '45:00', '1:30:00', '90'
        #[arg(short = 't', long)]
        duration: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    logging::init_logging(&config.log)?;

    match cli.command {
        Some(command) => run_command(command),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(stdin.lock(), stdout.lock(), config.shell);
            shell.run()?;
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    if cli.verbose > 0 {
        config.log.level = match cli.verbose {
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
    }

    if let Some(format) = &cli.log_format {
        config.log.format = format.parse().map_err(PacerError::Configuration)?;
    }

    Ok(config)
}

fn run_command(command: Commands) -> Result<()> {
    let (job, readings) = match command {
        Commands::Pace { distance, duration } => (
            Job::Pace,
            Readings {
                distance_m: Some(parse::parse_distance(&distance)?),
                duration_secs: Some(parse::parse_duration(&duration)?),
                pace_sec_per_m: None,
            },
        ),
        Commands::Duration { pace, distance } => (
            Job::Duration,
            Readings {
                distance_m: Some(parse::parse_distance(&distance)?),
                duration_secs: None,
                pace_sec_per_m: Some(parse::parse_pace(&pace)?),
            },
        ),
        Commands::Distance { pace, duration } => (
            Job::Distance,
            Readings {
                distance_m: None,
                duration_secs: Some(parse::parse_duration(&duration)?),
                pace_sec_per_m: Some(parse::parse_pace(&pace)?),
            },
        ),
    };

    let line = job.execute(&readings)?;
    println!("{}", line.green().bold());
    Ok(())
}
