//! Wavepath - shortest and longest paths by wavefront simulation
//!
//! Builds a small weighted undirected graph from an edge list and answers
//! path queries between named vertices.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use wavepath_core::error::{ExitCode as WavepathExitCode, WavepathError};
use wavepath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WavepathExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Report a clap failure.
///
/// No `Cli` exists yet, so JSON mode is detected from the raw arguments.
/// Help and version output always go through clap.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let error = match parse_error_to_json(&err, std::env::args().skip(1)) {
        Some(error) => error,
        None => err.exit(),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// The error to print as a JSON envelope, or `None` when clap should print it
fn parse_error_to_json<I>(err: &clap::Error, args: I) -> Option<WavepathError>
where
    I: IntoIterator<Item = String>,
{
    if !json_requested(args) {
        return None;
    }
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => Some(WavepathError::UsageError(err.to_string())),
        _ => Some(WavepathError::Other(err.to_string())),
    }
}

/// Whether the raw arguments ask for `--format json`, in either spelling
fn json_requested<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
