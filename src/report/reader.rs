//! Reading a report back.
//!
//! Graders run the checklist binary and award points from its stdout. A missing or malformed `TASK:` line is worth
//! zero points; it is never an error.

use crate::checklist::Summary;

/// Points awarded to `task` by a report.
///
/// ## Returns
/// - (`i32`): the value on the first line starting with `TASK:<task>=`, or `0` when there is no such line or the
///   value is not an integer.
///
/// ## Notes
/// - The value runs up to the next `=`, so `TASK:collatz=1=x` reads as `1`.
/// - Signed values are read as written; a negative value lowers the total.
pub fn parse_task_points(output: &str, task: &str) -> i32 {
    let prefix = format!("TASK:{task}=");
    output
        .lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .and_then(|rest| rest.split('=').next())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Read the `SUMMARY:<points>/<max>` line of a report, if present and well-formed.
pub fn parse_summary(output: &str) -> Option<Summary> {
    let line = output.lines().find_map(|line| line.strip_prefix("SUMMARY:"))?;
    let (points, max) = line.trim().split_once('/')?;
    Some(Summary {
        points: points.parse().ok()?,
        max: max.parse().ok()?,
    })
}
