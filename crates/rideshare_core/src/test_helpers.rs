//! Test helpers for common test setup and utilities.
//!
//! This module provides shared fixtures to reduce duplication across test files.

use chrono::{DateTime, TimeZone, Utc};

use crate::driver::{Driver, DriverInput};
use crate::trip::{Trip, TripInput};

/// A well-known valid vehicle id used across test files for consistency.
pub const TEST_VEHICLE_ID: &str = "WBWSS52P9NEYLVDE9";

/// A fixed reference instant all helper trips start from.
///
/// # Panics
///
/// Panics if the hard-coded date is rejected by chrono (should never happen).
pub fn test_start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 4, 5, 14, 1, 0)
        .single()
        .expect("test start time should be a valid instant")
}

/// Build a billed, rated trip lasting `minutes` from the reference instant.
///
/// # Panics
///
/// Panics if the resulting trip fails validation (only possible with a rating
/// outside [1, 5]).
pub fn billed_trip(id: u64, cost: f64, minutes: i64, rating: u8) -> Trip {
    let start = test_start_time();
    Trip::new(TripInput {
        id,
        start_time: Some(start),
        end_time: Some(start + chrono::TimeDelta::minutes(minutes)),
        cost: Some(cost),
        rating: Some(rating),
        ..Default::default()
    })
    .expect("helper trip should be valid")
}

/// Build an unbilled (in-progress) trip with timestamps but no cost.
///
/// # Panics
///
/// Panics if the resulting trip fails validation (should never happen).
pub fn in_progress_trip(id: u64, minutes: i64) -> Trip {
    let start = test_start_time();
    Trip::new(TripInput {
        id,
        start_time: Some(start),
        end_time: Some(start + chrono::TimeDelta::minutes(minutes)),
        ..Default::default()
    })
    .expect("helper trip should be valid")
}

/// Build a valid driver with the given trips pre-attached.
///
/// # Panics
///
/// Panics if the driver fails validation (should never happen with the
/// well-known test vehicle id).
pub fn test_driver(id: u64, trips: Vec<Trip>) -> Driver {
    Driver::new(DriverInput {
        id,
        name: "test driver".to_string(),
        vehicle_id: TEST_VEHICLE_ID.to_string(),
        trips,
        ..Default::default()
    })
    .expect("helper driver should be valid")
}
