// ABOUTME: Command-line report generator for habit and health tracking exports
// ABOUTME: Reads a JSON array of records and prints per-field and attendance summaries as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

//! Habitrack report generator.
//!
//! Usage:
//! ```bash
//! # Summarize every numeric field of an export
//! habitrack-report --input weights.json --pretty
//!
//! # Selected fields with a 30-day forecast, read from stdin
//! cat scale.json | habitrack-report --field weight --field heart_rate --horizon 30
//!
//! # Gym check-ins
//! habitrack-report --input visits.json --attendance -v
//! ```

use anyhow::Result;
use clap::Parser;
use habitrack::logging::LoggingConfig;
use habitrack::report::{ReportGenerator, ReportOptions, SeriesReport};
use habitrack::AppResult;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Path value meaning "read from standard input"
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(
    name = "habitrack-report",
    about = "Habitrack series report generator",
    long_about = "Summarize a JSON array of tracking records: trends, streaks, records, forecasts and zones"
)]
struct ReportArgs {
    /// JSON file with an array of records, or `-` for stdin
    #[arg(long, short = 'i', default_value = STDIN_PATH)]
    input: PathBuf,

    /// Field to summarize (repeatable); defaults to every numeric field
    #[arg(long = "field", short = 'f')]
    fields: Vec<String>,

    /// Forecast horizon in days, overriding HABITRACK_FORECAST_HORIZON_DAYS
    #[arg(long)]
    horizon: Option<u32>,

    /// Include streaks, check-in records and heatmaps
    #[arg(long)]
    attendance: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl ReportArgs {
    fn options(&self) -> ReportOptions {
        let mut options = ReportOptions::default().with_fields(self.fields.iter().cloned());
        if let Some(days) = self.horizon {
            options = options.with_horizon(days);
        }
        if self.attendance {
            options = options.with_attendance();
        }
        options
    }

    fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }
}

fn run(args: &ReportArgs) -> AppResult<SeriesReport> {
    let generator = ReportGenerator::from_env()?;
    let options = args.options();

    if args.reads_stdin() {
        generator.generate_from_reader(io::stdin().lock(), &options)
    } else {
        generator.generate_from_path(&args.input, &options)
    }
}

fn write_report(report: &SeriesReport, pretty: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, report)?;
    } else {
        serde_json::to_writer(&mut stdout, report)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = ReportArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    match run(&args) {
        Ok(report) => {
            info!(fields = report.fields.len(), "Report generated");
            write_report(&report, args.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("habitrack-report: {e}");
            let status = u8::try_from(e.code.exit_status()).unwrap_or(1);
            Ok(ExitCode::from(status))
        }
    }
}
