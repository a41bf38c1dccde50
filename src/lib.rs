#![forbid(unsafe_code)]
//! ps2 fixed-point checklist
//!
//! Calls each ps2 task function once with a hardcoded input, compares the result against one expected value, and
//! reports a pass/fail line per task followed by a tally. The task functions themselves live in `ps2_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod checklist;
pub mod cli;
pub mod report;
pub mod version;

pub use checklist::{MAX_POINTS, ReferenceSuite, Summary, Task, TaskOutcome, TaskSuite, run_checklist};
pub use report::{LineReporter, ReportError, TaskReporter, parse_summary, parse_task_points};
