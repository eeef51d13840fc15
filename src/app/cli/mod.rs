//! CLI Adapter.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::api::{self, BatchOptions};
use crate::app::config::ConfigOverrides;
use crate::domain::{AppError, FailurePolicy};

#[derive(Parser)]
#[command(name = "smt-batch")]
#[command(version)]
#[command(
    about = "Run the Boogie verifier over every .bpl file one level below a directory",
    long_about = None
)]
struct Cli {
    /// Root directory; each immediate subdirectory is processed as a group
    root: PathBuf,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Verifier executable (overrides config)
    #[arg(long)]
    verifier: Option<PathBuf>,
    /// Root of the mirrored output tree (overrides config)
    #[arg(short, long)]
    output_root: Option<PathBuf>,
    /// Value passed as -timeLimit:<SECS> (overrides config)
    #[arg(short, long, value_name = "SECS")]
    time_limit: Option<u32>,
    /// Behavior when a verifier invocation fails: continue or abort
    #[arg(long, value_name = "POLICY")]
    on_error: Option<FailurePolicy>,
    /// Write a JSON report of every invocation to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// Exit with status 1 when any invocation failed
    #[arg(long)]
    strict: bool,
    /// Log progress details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_batch(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "smt_batch=info,warn" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}

fn run_batch(cli: Cli) -> Result<i32, AppError> {
    let options = BatchOptions {
        root: cli.root,
        config_path: cli.config,
        overrides: ConfigOverrides {
            verifier: cli.verifier,
            output_root: cli.output_root,
            time_limit_secs: cli.time_limit,
            on_error: cli.on_error,
        },
    };

    let (report, aborted) = match api::run_batch(options) {
        Ok(report) => (report, None),
        Err(mut e) => match e.take_partial_report() {
            Some(report) => (report, Some(e)),
            None => return Err(e),
        },
    };

    if let Some(path) = &cli.report {
        api::write_report(&report, path)?;
    }

    println!("{}", report.summary_line());
    for failure in report.failures() {
        println!("  FAILED {}: {}", failure.source.display(), failure.status.describe());
    }

    if let Some(e) = aborted {
        return Err(e);
    }
    Ok(if cli.strict && report.has_failures() { 1 } else { 0 })
}
