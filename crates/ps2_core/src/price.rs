//! Unit pricing for multi-packs.

/// Return the price of one roll from the price of a whole pack.
///
/// ## Parameters
/// - `pack_price`: price of the pack.
/// - `rolls_count`: rolls in the pack.
/// - `_pieces_count`: pieces per roll. Does not affect the per-roll price.
///
/// ## Returns
/// - (`f64`): `pack_price / rolls_count`. A zero `rolls_count` yields infinity (or NaN for a free pack).
///
/// ## Examples
/// ```rust
/// use ps2_core::unit_price;
/// assert!((unit_price(4.00, 2, 100) - 2.00).abs() < 1e-12);
/// ```
pub fn unit_price(pack_price: f64, rolls_count: i32, _pieces_count: i32) -> f64 {
    pack_price / f64::from(rolls_count)
}
