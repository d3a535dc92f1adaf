//! Payout math for splitting a trip's fare between driver and platform.

/// Flat platform fee deducted from every billed trip, in currency units.
pub const FEE_PER_TRIP: f64 = 1.65;

/// Fraction of the post-fee fare the driver keeps.
pub const DRIVER_SHARE: f64 = 0.80;

/// Driver take-home for one billed trip.
///
/// Formula: `(cost - FEE_PER_TRIP) * DRIVER_SHARE`
///
/// The result is intentionally unrounded; callers summing payouts round once
/// at the end so per-trip rounding never drifts the total.
pub fn driver_take_home(cost: f64) -> f64 {
    (cost - FEE_PER_TRIP) * DRIVER_SHARE
}

/// Round a currency amount to whole cents.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
