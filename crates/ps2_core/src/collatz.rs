//! Collatz sequence lengths.
//!
//! Each term maps to `n / 2` when even and `3n + 1` when odd, until the sequence reaches 1.

/// Count the transitions needed to reach 1 from `number`.
///
/// ## Returns
/// - (`u32`): number of map applications; `0` for a start of `1` and for the degenerate start `0`.
///
/// ## Notes
/// - Terms are computed in `u64`. Every start below 2^32 peaks below `u64::MAX / 2`, so `3n + 1` cannot overflow.
pub fn collatz_steps(number: u32) -> u32 {
    if number == 0 {
        return 0;
    }
    let mut count = 0;
    let mut num = u64::from(number);
    while num != 1 {
        num = if num % 2 == 0 { num / 2 } else { 3 * num + 1 };
        count += 1;
    }
    count
}

/// Return the length of the Collatz sequence from `number` down to 1, both ends included.
///
/// ## Returns
/// - (`u32`): `collatz_steps(number) + 1`; `0` for the start `0`, which has no sequence.
///
/// ## Examples
/// ```rust
/// use ps2_core::collatz;
/// // 6, 3, 10, 5, 16, 8, 4, 2, 1
/// assert_eq!(collatz(6), 9);
/// assert_eq!(collatz(1), 1);
/// ```
pub fn collatz(number: u32) -> u32 {
    if number == 0 {
        return 0;
    }
    collatz_steps(number) + 1
}
