//! Lever balance for lifting a car with a stick.
//!
//! The stick pivots on a fulcrum. The car presses on one end, the human leans on the other, and the lever law
//! (`force * arm` equal on both sides) fixes where the fulcrum has to sit.

/// Return the car-side arm of a balanced lever.
///
/// ## Parameters
/// - `stick_length`: length from the stick's midpoint to either end; the full span is `2 * stick_length`.
/// - `human_weight`: weight leaning on the far end.
/// - `car_weight`: weight resting on the near end.
///
/// ## Returns
/// - (`f64`): distance from the car end to the fulcrum, in the unit of `stick_length`, such that
///   `car_weight * arm == human_weight * (span - arm)`.
///
/// ## Notes
/// - The arm ratio `arm / (span - arm)` equals `human_weight / car_weight`, the mechanical advantage.
/// - Weights summing to zero yield NaN.
///
/// ## Examples
/// ```rust
/// use ps2_core::lift_a_car;
/// assert!((lift_a_car(2, 80, 1400) - 0.2162).abs() < 1e-4);
/// ```
pub fn lift_a_car(stick_length: i32, human_weight: i32, car_weight: i32) -> f64 {
    let span = 2.0 * f64::from(stick_length);
    let human = f64::from(human_weight);
    let car = f64::from(car_weight);
    span * human / (human + car)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torques_balance() {
        let arm = lift_a_car(2, 80, 1400);
        let span = 4.0;
        assert!((1400.0 * arm - 80.0 * (span - arm)).abs() < 1e-9);
    }

    #[test]
    fn test_equal_weights_pivot_at_midpoint() {
        assert!((lift_a_car(3, 70, 70) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_weightless_human_puts_pivot_under_car() {
        assert_eq!(lift_a_car(2, 0, 1400), 0.0);
    }

    #[test]
    fn test_zero_weights_are_nan() {
        assert!(lift_a_car(2, 0, 0).is_nan());
    }
}
