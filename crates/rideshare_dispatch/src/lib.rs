//! CSV loading and fleet-level reporting on top of `rideshare_core`.
//!
//! This crate turns tabular trip/driver/passenger records into validated
//! domain values, attaches each trip to its owning driver, and aggregates
//! per-driver metrics into fleet summaries that can be exported to JSON or
//! CSV.
//!
//! # Quick Start
//!
//! ```no_run
//! use rideshare_dispatch::{summarize_fleet, Dispatcher};
//!
//! let dispatcher = Dispatcher::load(
//!     "support/drivers.csv",
//!     "support/passengers.csv",
//!     "support/trips.csv",
//! )?;
//! let summary = summarize_fleet(dispatcher.drivers());
//! println!("fleet revenue: {}", summary.total_revenue);
//! # Ok::<(), rideshare_dispatch::DispatchError>(())
//! ```

pub mod dispatcher;
pub mod error;
pub mod export;
pub mod metrics;
pub mod records;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use export::{export_to_csv, export_to_json};
pub use metrics::{summarize_drivers, summarize_fleet, DriverSummary, FleetSummary};
