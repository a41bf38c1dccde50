//! CLI module for the ps2 checklist
//!
//! Running `ps2` with no arguments checks every task and prints the report on stdout.
//!
//! ## Flags
//!
//! - `-v, --verbose` - Also print per-task detail on stderr
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! `execute` returns `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//!
//! The exit code does not reflect how many tasks passed; graders read the report instead.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::process;

use clap::Parser;

use crate::checklist::{ReferenceSuite, TaskSuite, run_checklist};
use crate::report::{DetailReporter, LineReporter, Tee};
use crate::version::PS2_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Check the ps2 task functions and print a pass/fail tally
#[derive(Parser, Debug)]
#[command(name = "ps2")]
#[command(version = PS2_VERSION)]
#[command(about = "Check the ps2 task functions and print a pass/fail tally", long_about = None)]
pub struct Cli {
    /// Also print per-task detail on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Run the checklist against the reference suite on stdout/stderr and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let stderr = io::stderr();
    let color = stderr.is_terminal();
    execute_with(&cli, &ReferenceSuite, io::stdout().lock(), stderr.lock(), color)
}

/// Run the checklist against `suite`, writing the report to `out` and verbose detail to `err`.
///
/// ## Errors
///
/// Returns a failure (exit code 1) only when a report cannot be written. Failing tasks still exit 0.
pub fn execute_with(
    cli: &Cli,
    suite: &dyn TaskSuite,
    out: impl Write,
    err: impl Write,
    color: bool,
) -> CliResult<ExitCode> {
    let lines = LineReporter::new(out);

    let result = if cli.verbose {
        let mut reporter = Tee {
            first: lines,
            second: DetailReporter::new(err, color),
        };
        run_checklist(suite, &mut reporter)
    } else {
        let mut reporter = lines;
        run_checklist(suite, &mut reporter)
    };

    let summary = result.map_err(|e| CliError::failure(format!("Error: {e}")))?;
    tracing::debug!(%summary, "report written");
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
