//! A single ride record, validated once at construction and immutable after.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RideShareError;

/// Construction input for [`Trip`]. Every field except `id` is optional;
/// absent means "not known / not applicable", never zero. Build with struct
/// update syntax over `Default`:
///
/// ```
/// use rideshare_core::trip::{Trip, TripInput};
///
/// let trip = Trip::new(TripInput {
///     id: 8,
///     cost: Some(12.50),
///     rating: Some(5),
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(trip.rating(), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    pub id: u64,
    /// Back-reference to the owning driver; opaque to the trip itself.
    pub driver_id: Option<u64>,
    /// Back-reference to the passenger; opaque to the trip itself.
    pub passenger_id: Option<u64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Fare billed to the passenger. `None` marks an in-progress trip.
    pub cost: Option<f64>,
    /// Passenger rating, 1 to 5. `None` if the trip was never rated.
    pub rating: Option<u8>,
}

/// An immutable ride record. Invariants held after construction:
/// a present rating is in [1, 5], and a present start/end pair satisfies
/// `start <= end`. Deliberately not deserializable; the only way in is
/// [`Trip::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    id: u64,
    driver_id: Option<u64>,
    passenger_id: Option<u64>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    cost: Option<f64>,
    rating: Option<u8>,
}

impl Trip {
    /// Validate and construct a trip. Fails with [`RideShareError::InvalidRating`]
    /// or [`RideShareError::InvalidTimeRange`]; on failure no trip exists.
    pub fn new(input: TripInput) -> Result<Self, RideShareError> {
        if let Some(rating) = input.rating {
            if !(1..=5).contains(&rating) {
                return Err(RideShareError::InvalidRating(rating));
            }
        }
        if let (Some(start), Some(end)) = (input.start_time, input.end_time) {
            if start > end {
                return Err(RideShareError::InvalidTimeRange { start, end });
            }
        }
        Ok(Self {
            id: input.id,
            driver_id: input.driver_id,
            passenger_id: input.passenger_id,
            start_time: input.start_time,
            end_time: input.end_time,
            cost: input.cost,
            rating: input.rating,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn driver_id(&self) -> Option<u64> {
        self.driver_id
    }

    pub fn passenger_id(&self) -> Option<u64> {
        self.passenger_id
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    /// A trip with no cost yet has not been billed.
    pub fn is_in_progress(&self) -> bool {
        self.cost.is_none()
    }

    /// Elapsed time between start and end. Fails with
    /// [`RideShareError::MissingTimestamp`] when either side is absent;
    /// never negative thanks to the construction invariant.
    pub fn duration(&self) -> Result<TimeDelta, RideShareError> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Ok(end - start),
            _ => Err(RideShareError::MissingTimestamp(self.id)),
        }
    }
}
