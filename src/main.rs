//! `pipdeptree-annotate`: mark each package in `pipdeptree` output with its build style.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]); a wrong argument count exits `1` with a usage line.
//! 2. Load the marks config ([`config::load_config`]).
//! 3. Build the lookup table from the JSON report ([`lookup::load_report`]).
//! 4. Stream stdin to stdout, annotating known packages ([`annotator::annotate_stream`]).
//! 5. Optionally print a summary to stderr (`--summary`, [`report`]).

mod annotator;
mod cli;
mod config;
mod lookup;
mod models;
mod report;

use std::io::{self, BufWriter};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use annotator::annotate_stream;
use cli::{parse_args, usage, ArgsError};
use config::load_config;
use lookup::load_report;

fn main() -> Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ArgsError::Display(err)) => err.exit(),
        Err(ArgsError::Usage { program }) => {
            eprintln!("{}", usage(&program));
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let table = load_report(&cli.json_file)?;
    if table.is_empty() {
        warn!(path = %cli.json_file.display(), "report lists no packages, nothing will be annotated");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = annotate_stream(
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        &table,
        &config.marks,
    )?;

    info!("{}", report::terminal::summary_line(&summary));

    if cli.summary {
        report::terminal::render(&summary, &cli.json_file, table.len());
    }

    Ok(())
}

/// Logs go to stderr so stdout stays a byte-exact copy of the input stream.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("pipdeptree_annotate={}", level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
