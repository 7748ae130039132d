use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pipdeptree-annotate",
    about = "Annotate pipdeptree output with pyproject.toml / setup.py usage",
    version
)]
pub struct Cli {
    /// JSON report: an array of {"package", "pyproject_toml", "setup_py"} objects
    pub json_file: PathBuf,

    /// Marks config file [default: ./.pipdeptree-annotate/config.toml, fallback ~/.config/pipdeptree-annotate/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a summary of annotated packages to stderr
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of argument parsing that is not a runnable [`Cli`].
#[derive(Debug)]
pub enum ArgsError {
    /// `--help` / `--version`; clap prints these itself.
    Display(clap::Error),
    /// Wrong positional count or unknown flag.
    Usage { program: String },
}

/// Parse `args` (argv including the program name).
pub fn parse_args<I, T>(args: I) -> Result<Cli, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    Cli::try_parse_from(&args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Display(err),
        _ => ArgsError::Usage { program },
    })
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} <json_file>", program)
}
