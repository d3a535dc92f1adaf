//! A driver and the aggregate metrics computed over their trip history.

use serde::{Deserialize, Serialize};

use crate::error::RideShareError;
use crate::payout::{driver_take_home, round_to_cents};
use crate::trip::Trip;

/// Required length of a vehicle identification number.
pub const VEHICLE_ID_LEN: usize = 17;

const SECS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DriverStatus {
    #[default]
    Available,
    Unavailable,
}

/// Construction input for [`Driver`]. `status` and `trips` default when not
/// supplied (struct update syntax over `Default`); `id`, `name` and
/// `vehicle_id` are always caller-provided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverInput {
    pub id: u64,
    pub name: String,
    pub vehicle_id: String,
    pub status: DriverStatus,
    pub trips: Vec<Trip>,
}

/// A driver with their trip history. The trip list only ever grows, through
/// [`Driver::add_trip`]; there is no removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: u64,
    name: String,
    vehicle_id: String,
    status: DriverStatus,
    trips: Vec<Trip>,
}

impl Driver {
    /// Validate and construct a driver. The id must be positive and the
    /// vehicle id exactly 17 ASCII-alphanumeric characters.
    pub fn new(input: DriverInput) -> Result<Self, RideShareError> {
        if input.id == 0 {
            return Err(RideShareError::InvalidDriverId(input.id));
        }
        if input.vehicle_id.len() != VEHICLE_ID_LEN
            || !input.vehicle_id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(RideShareError::InvalidVehicleId(input.vehicle_id));
        }
        Ok(Self {
            id: input.id,
            name: input.name,
            vehicle_id: input.vehicle_id,
            status: input.status,
            trips: input.trips,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    /// Trips in attachment order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Append a completed or in-progress trip. Order-preserving; duplicates
    /// are not checked for.
    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Total take-home across billed trips, rounded to cents once at the end.
    /// In-progress trips (no cost) contribute nothing.
    pub fn total_revenue(&self) -> f64 {
        let total: f64 = self
            .trips
            .iter()
            .filter_map(|trip| trip.cost())
            .map(driver_take_home)
            .sum();
        round_to_cents(total)
    }

    /// Take-home per hour driven, over trips that are billed and have a
    /// positive recorded duration. Returns 0.0 when no trip qualifies.
    pub fn average_hourly_revenue(&self) -> f64 {
        let mut revenue = 0.0;
        let mut hours = 0.0;
        for trip in &self.trips {
            let Some(cost) = trip.cost() else {
                continue;
            };
            let Ok(duration) = trip.duration() else {
                continue;
            };
            let secs = duration.num_seconds();
            if secs <= 0 {
                continue;
            }
            revenue += driver_take_home(cost);
            hours += secs as f64 / SECS_PER_HOUR;
        }
        if hours == 0.0 {
            return 0.0;
        }
        round_to_cents(revenue / hours)
    }

    /// Arithmetic mean of present ratings, as a float in [1.0, 5.0].
    /// Returns 0.0 when no trip carries a rating.
    pub fn average_rating(&self) -> f64 {
        let ratings: Vec<u8> = self.trips.iter().filter_map(|trip| trip.rating()).collect();
        if ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        f64::from(sum) / ratings.len() as f64
    }
}
