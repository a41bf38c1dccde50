//! The fixed ps2 checklist.
//!
//! Three tasks, each called once with a hardcoded input and compared against one expected value:
//!
//! | Task         | Call                          | Expected | Comparison          |
//! |--------------|-------------------------------|----------|---------------------|
//! | `lift_a_car` | `lift_a_car(2, 80, 1400)`     | `0.22`   | within [`TOLERANCE`] |
//! | `unit_price` | `unit_price(4.00, 2, 100)`    | `2.00`   | within [`TOLERANCE`] |
//! | `collatz`    | `collatz(6)`                  | `9`      | exact               |
//!
//! ## TaskSuite Trait
//!
//! The functions under test are reached through [`TaskSuite`], whose default methods call into `ps2_core`.
//! A suite that overrides one method replaces exactly one task, which keeps the checks independent of each other.
//!
//! ## State
//!
//! The pass counter lives inside [`run_checklist`] and is returned as a [`Summary`]. Nothing outlives a run.

use std::fmt;

use ps2_core::{TOLERANCE, approx_eq};

use crate::report::{ReportError, TaskReporter};

/// Number of tasks in the checklist (the summary denominator).
pub const MAX_POINTS: u32 = Task::ALL.len() as u32;

// ============================================================================
// Tasks
// ============================================================================

/// A task in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    LiftACar,
    UnitPrice,
    Collatz,
}

impl Task {
    /// All tasks, in the order they are checked and reported.
    pub const ALL: [Task; 3] = [Task::LiftACar, Task::UnitPrice, Task::Collatz];

    /// Name used on the `TASK:<name>=` line.
    pub fn name(self) -> &'static str {
        match self {
            Task::LiftACar => "lift_a_car",
            Task::UnitPrice => "unit_price",
            Task::Collatz => "collatz",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// What a single check observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Float result, graded with [`approx_eq`] and [`TOLERANCE`].
    Float { actual: f64, expected: f64 },
    /// Integer result, graded by equality.
    Exact { actual: u32, expected: u32 },
}

impl Measurement {
    pub fn passed(&self) -> bool {
        match *self {
            Measurement::Float { actual, expected } => approx_eq(actual, expected, TOLERANCE),
            Measurement::Exact { actual, expected } => actual == expected,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Float { actual, expected } => {
                write!(f, "actual={actual:.4} expected={expected:.2} (±{TOLERANCE})")
            }
            Measurement::Exact { actual, expected } => write!(f, "actual={actual} expected={expected}"),
        }
    }
}

/// Result of checking one task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskOutcome {
    pub task: Task,
    pub measurement: Measurement,
    pub passed: bool,
}

impl TaskOutcome {
    fn new(task: Task, measurement: Measurement) -> Self {
        Self {
            task,
            measurement,
            passed: measurement.passed(),
        }
    }

    /// `1` if the task passed, `0` otherwise.
    pub fn points(&self) -> u32 {
        u32::from(self.passed)
    }
}

/// Tally of a checklist run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub points: u32,
    pub max: u32,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.points == self.max
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.points, self.max)
    }
}

// ============================================================================
// Suite
// ============================================================================

/// The functions under test.
///
/// Default methods call the `ps2_core` implementations.
pub trait TaskSuite {
    fn lift_a_car(&self, stick_length: i32, human_weight: i32, car_weight: i32) -> f64 {
        ps2_core::lift_a_car(stick_length, human_weight, car_weight)
    }

    fn unit_price(&self, pack_price: f64, rolls_count: i32, pieces_count: i32) -> f64 {
        ps2_core::unit_price(pack_price, rolls_count, pieces_count)
    }

    fn collatz(&self, number: u32) -> u32 {
        ps2_core::collatz(number)
    }
}

/// The `ps2_core` implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceSuite;

impl TaskSuite for ReferenceSuite {}

/// Call one task of `suite` with its fixed input.
pub fn check_task(suite: &dyn TaskSuite, task: Task) -> TaskOutcome {
    let measurement = match task {
        Task::LiftACar => Measurement::Float {
            actual: suite.lift_a_car(2, 80, 1400),
            expected: 0.22,
        },
        Task::UnitPrice => Measurement::Float {
            actual: suite.unit_price(4.00, 2, 100),
            expected: 2.00,
        },
        Task::Collatz => Measurement::Exact {
            actual: suite.collatz(6),
            expected: 9,
        },
    };
    TaskOutcome::new(task, measurement)
}

// ============================================================================
// Runner
// ============================================================================

/// Check every task of `suite` in order and report each outcome, then the summary.
///
/// ## Errors
///
/// Returns [`ReportError`] if the reporter cannot write. Task failures are not errors.
#[tracing::instrument(skip_all)]
pub fn run_checklist(suite: &dyn TaskSuite, reporter: &mut dyn TaskReporter) -> Result<Summary, ReportError> {
    let mut points = 0;

    for task in Task::ALL {
        let outcome = check_task(suite, task);
        tracing::debug!(task = %task, measurement = %outcome.measurement, passed = outcome.passed, "checked task");
        points += outcome.points();
        reporter.on_task_complete(&outcome)?;
    }

    let summary = Summary {
        points,
        max: MAX_POINTS,
    };
    if !summary.all_passed() {
        tracing::info!(%summary, "checklist finished with failures");
    }
    reporter.on_run_complete(&summary)?;
    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================
