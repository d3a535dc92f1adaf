//! Serde row types for the tabular record files.
//!
//! Optional columns stay `Option` so an empty CSV cell is "absent", never
//! coerced to zero. Timestamps are RFC 3339.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DriverRecord {
    pub id: u64,
    pub name: String,
    pub vin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassengerRecord {
    pub id: u64,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    pub id: u64,
    pub driver_id: Option<u64>,
    pub passenger_id: Option<u64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub rating: Option<u8>,
}
