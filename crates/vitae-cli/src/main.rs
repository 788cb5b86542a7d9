mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Deterministic resume parser and ATS compatibility scorer.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a plain-text resume and print its ATS analysis
    Analyze {
        /// Path to the resume text file
        file: PathBuf,

        /// Job title for the requirement profile
        #[arg(long)]
        job_title: Option<String>,

        /// Company for the requirement profile
        #[arg(long)]
        company: Option<String>,

        /// Comma-separated required skills; enables weighted scoring
        #[arg(long)]
        required: Option<String>,

        /// Comma-separated preferred skills; enables weighted scoring
        #[arg(long)]
        preferred: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = commands::analyze::Format::Text)]
        format: commands::analyze::Format,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    match &cli.command {
        Command::Analyze {
            file,
            job_title,
            company,
            required,
            preferred,
            format,
            pretty,
        } => commands::analyze::run(
            file,
            job_title.as_deref(),
            company.as_deref(),
            required.as_deref(),
            preferred.as_deref(),
            *format,
            *pretty,
        ),
    }
}
