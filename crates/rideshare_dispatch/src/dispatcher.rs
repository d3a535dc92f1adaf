//! Loads record files and wires trips onto their owning drivers.

use std::path::Path;

use rideshare_core::driver::{Driver, DriverInput};
use rideshare_core::passenger::Passenger;
use rideshare_core::trip::{Trip, TripInput};
use tracing::{debug, info};

use crate::error::DispatchError;
use crate::records::{DriverRecord, PassengerRecord, TripRecord};

/// Holds the loaded fleet. Drivers own their trips; passengers are kept for
/// back-reference lookups only.
#[derive(Debug, Default)]
pub struct Dispatcher {
    drivers: Vec<Driver>,
    passengers: Vec<Passenger>,
}

impl Dispatcher {
    /// Load drivers, passengers and trips from CSV files. Each trip row must
    /// name an existing driver (and, when present, an existing passenger);
    /// domain validation failures from the core constructors propagate as-is.
    pub fn load(
        drivers_path: impl AsRef<Path>,
        passengers_path: impl AsRef<Path>,
        trips_path: impl AsRef<Path>,
    ) -> Result<Self, DispatchError> {
        let mut dispatcher = Self::default();
        dispatcher.load_passengers(passengers_path)?;
        dispatcher.load_drivers(drivers_path)?;
        dispatcher.load_trips(trips_path)?;
        info!(
            drivers = dispatcher.drivers.len(),
            passengers = dispatcher.passengers.len(),
            trips = dispatcher
                .drivers
                .iter()
                .map(|d| d.trips().len())
                .sum::<usize>(),
            "fleet loaded"
        );
        Ok(dispatcher)
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn find_driver(&self, id: u64) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id() == id)
    }

    pub fn find_passenger(&self, id: u64) -> Option<&Passenger> {
        self.passengers.iter().find(|passenger| passenger.id == id)
    }

    fn load_passengers(&mut self, path: impl AsRef<Path>) -> Result<(), DispatchError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        for record in reader.deserialize() {
            let record: PassengerRecord = record?;
            self.passengers
                .push(Passenger::new(record.id, record.name, record.phone));
        }
        debug!(count = self.passengers.len(), "passengers loaded");
        Ok(())
    }

    fn load_drivers(&mut self, path: impl AsRef<Path>) -> Result<(), DispatchError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        for record in reader.deserialize() {
            let record: DriverRecord = record?;
            let driver = Driver::new(DriverInput {
                id: record.id,
                name: record.name,
                vehicle_id: record.vin,
                ..Default::default()
            })?;
            self.drivers.push(driver);
        }
        debug!(count = self.drivers.len(), "drivers loaded");
        Ok(())
    }

    fn load_trips(&mut self, path: impl AsRef<Path>) -> Result<(), DispatchError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        for record in reader.deserialize() {
            let record: TripRecord = record?;
            self.attach_trip(record)?;
        }
        Ok(())
    }

    fn attach_trip(&mut self, record: TripRecord) -> Result<(), DispatchError> {
        let driver_id = record
            .driver_id
            .ok_or(DispatchError::UnassignedTrip(record.id))?;
        if let Some(passenger_id) = record.passenger_id {
            if self.find_passenger(passenger_id).is_none() {
                return Err(DispatchError::UnknownPassenger {
                    trip_id: record.id,
                    passenger_id,
                });
            }
        }
        let trip = Trip::new(TripInput {
            id: record.id,
            driver_id: Some(driver_id),
            passenger_id: record.passenger_id,
            start_time: record.start_time,
            end_time: record.end_time,
            cost: record.cost,
            rating: record.rating,
        })?;
        let driver = self
            .drivers
            .iter_mut()
            .find(|driver| driver.id() == driver_id)
            .ok_or(DispatchError::UnknownDriver {
                trip_id: trip.id(),
                driver_id,
            })?;
        driver.add_trip(trip);
        Ok(())
    }
}
