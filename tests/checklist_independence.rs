//! Checks that a broken task only costs its own point.
//!
//! Every combination of broken tasks is run through the checklist and the report is compared line by line.

use ps2::checklist::{Task, TaskSuite, run_checklist};
use ps2::report::LineReporter;
use ps2::{parse_summary, parse_task_points};

/// A suite where the tasks named in `broken` return a wrong value.
struct PartlyBroken {
    broken: Vec<Task>,
}

impl TaskSuite for PartlyBroken {
    fn lift_a_car(&self, stick_length: i32, human_weight: i32, car_weight: i32) -> f64 {
        let arm = ps2_core::lift_a_car(stick_length, human_weight, car_weight);
        // The plain `L * h / (h + c)` balance is half the expected arm.
        if self.broken.contains(&Task::LiftACar) { arm / 2.0 } else { arm }
    }

    fn unit_price(&self, pack_price: f64, rolls_count: i32, pieces_count: i32) -> f64 {
        if self.broken.contains(&Task::UnitPrice) {
            pack_price / f64::from(rolls_count * pieces_count)
        } else {
            ps2_core::unit_price(pack_price, rolls_count, pieces_count)
        }
    }

    fn collatz(&self, number: u32) -> u32 {
        if self.broken.contains(&Task::Collatz) {
            ps2_core::collatz_steps(number)
        } else {
            ps2_core::collatz(number)
        }
    }
}

fn report_for(suite: &dyn TaskSuite) -> String {
    let mut reporter = LineReporter::new(Vec::new());
    run_checklist(suite, &mut reporter).expect("writing to a Vec cannot fail");
    String::from_utf8(reporter.into_inner()).expect("report is UTF-8")
}

fn broken_subsets() -> Vec<Vec<Task>> {
    (0..1u8 << Task::ALL.len())
        .map(|mask| {
            Task::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| t)
                .collect()
        })
        .collect()
}

#[test]
fn test_each_broken_task_shows_zero_on_its_own_line() {
    for broken in broken_subsets() {
        let report = report_for(&PartlyBroken { broken: broken.clone() });

        for task in Task::ALL {
            let expected = i32::from(!broken.contains(&task));
            assert_eq!(
                parse_task_points(&report, task.name()),
                expected,
                "task {task} with broken={broken:?}:\n{report}"
            );
        }
    }
}

#[test]
fn test_numerator_drops_by_one_per_broken_task() {
    for broken in broken_subsets() {
        let report = report_for(&PartlyBroken { broken: broken.clone() });
        let summary = parse_summary(&report).expect("missing SUMMARY line");

        assert_eq!(summary.max, 3);
        assert_eq!(summary.points as usize, 3 - broken.len(), "broken={broken:?}");
    }
}

#[test]
fn test_line_order_is_fixed() {
    let report = report_for(&PartlyBroken { broken: vec![Task::UnitPrice] });
    let prefixes: Vec<&str> = report.lines().map(|l| l.split('=').next().unwrap_or(l)).collect();

    assert_eq!(
        prefixes,
        ["TASK:lift_a_car", "TASK:unit_price", "TASK:collatz", "SUMMARY:2/3"]
    );
}
