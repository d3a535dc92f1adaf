use rideshare_core::error::RideShareError;

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse csv record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] RideShareError),
    #[error("trip {trip_id} references unknown driver {driver_id}")]
    UnknownDriver { trip_id: u64, driver_id: u64 },
    #[error("trip {trip_id} references unknown passenger {passenger_id}")]
    UnknownPassenger { trip_id: u64, passenger_id: u64 },
    #[error("trip {0} is not assigned to any driver")]
    UnassignedTrip(u64),
}
