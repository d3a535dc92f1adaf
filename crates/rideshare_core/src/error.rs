use chrono::{DateTime, Utc};

/// Validation failures raised by `Trip` and `Driver` construction and by
/// `Trip::duration`. All of them abort the calling operation; no partially
/// constructed value is ever produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RideShareError {
    #[error("invalid rating {0}: must be between 1 and 5")]
    InvalidRating(u8),
    #[error("start time {start} cannot be later than end time {end}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("invalid driver id {0}: must be positive")]
    InvalidDriverId(u64),
    #[error("invalid vehicle id {0:?}: must be exactly 17 alphanumeric characters")]
    InvalidVehicleId(String),
    #[error("trip {0} is missing a start or end timestamp")]
    MissingTimestamp(u64),
}
