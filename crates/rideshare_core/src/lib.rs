pub mod driver;
pub mod error;
pub mod passenger;
pub mod payout;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
pub mod trip;
