//! Reporting of checklist results.
//!
//! ## TaskReporter Trait
//!
//! The runner hands every outcome to a [`TaskReporter`] and never prints by itself, so the wire format and the
//! human-readable detail are separate implementations:
//!
//! - [`LineReporter`] writes the `TASK:`/`SUMMARY:` lines graders parse.
//! - [`DetailReporter`] writes one PASSED/FAILED line per task with the observed values.
//! - [`Tee`] forwards to two reporters.
//!
//! [`reader`] parses the wire format back.

pub mod reader;

use std::io::{self, Write};

use thiserror::Error;

use crate::checklist::{Summary, TaskOutcome};

pub use reader::{parse_summary, parse_task_points};

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Trait for reporting checklist results.
pub trait TaskReporter {
    /// Called after each task is checked, in checklist order.
    fn on_task_complete(&mut self, outcome: &TaskOutcome) -> Result<(), ReportError>;

    /// Called once, after the last task.
    fn on_run_complete(&mut self, summary: &Summary) -> Result<(), ReportError>;
}

// ============================================================================
// Wire format
// ============================================================================

/// Writes the grader-facing lines:
///
/// ```text
/// TASK:lift_a_car=1
/// TASK:unit_price=1
/// TASK:collatz=1
/// SUMMARY:3/3
/// ```
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TaskReporter for LineReporter<W> {
    fn on_task_complete(&mut self, outcome: &TaskOutcome) -> Result<(), ReportError> {
        writeln!(self.out, "TASK:{}={}", outcome.task, outcome.points())?;
        Ok(())
    }

    fn on_run_complete(&mut self, summary: &Summary) -> Result<(), ReportError> {
        writeln!(self.out, "SUMMARY:{summary}")?;
        self.out.flush()?;
        Ok(())
    }
}

// ============================================================================
// Verbose detail
// ============================================================================

/// Human-readable per-task detail, meant for stderr.
pub struct DetailReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> DetailReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> TaskReporter for DetailReporter<W> {
    fn on_task_complete(&mut self, outcome: &TaskOutcome) -> Result<(), ReportError> {
        let status = if outcome.passed {
            self.paint("32", "PASSED")
        } else {
            self.paint("31", "FAILED")
        };
        writeln!(self.out, "{} ... {} ({})", outcome.task, status, outcome.measurement)?;
        Ok(())
    }

    fn on_run_complete(&mut self, summary: &Summary) -> Result<(), ReportError> {
        let failed = summary.max.saturating_sub(summary.points);
        let mut parts = Vec::new();
        if summary.points > 0 {
            parts.push(self.paint("32", &format!("{} passed", summary.points)));
        }
        if failed > 0 {
            parts.push(self.paint("31", &format!("{failed} failed")));
        }
        writeln!(self.out, "====== {} ======", parts.join(", "))?;
        Ok(())
    }
}

// ============================================================================
// Fan-out
// ============================================================================

/// Forwards every event to `first`, then to `second`.
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: TaskReporter, B: TaskReporter> TaskReporter for Tee<A, B> {
    fn on_task_complete(&mut self, outcome: &TaskOutcome) -> Result<(), ReportError> {
        self.first.on_task_complete(outcome)?;
        self.second.on_task_complete(outcome)
    }

    fn on_run_complete(&mut self, summary: &Summary) -> Result<(), ReportError> {
        self.first.on_run_complete(summary)?;
        self.second.on_run_complete(summary)
    }
}
