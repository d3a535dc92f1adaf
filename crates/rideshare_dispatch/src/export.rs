//! Report export to JSON and CSV.

use std::fs::File;
use std::path::Path;

use crate::error::DispatchError;
use crate::metrics::{DriverSummary, FleetSummary};

/// Write a fleet summary as pretty-printed JSON.
pub fn export_to_json(
    summary: &FleetSummary,
    path: impl AsRef<Path>,
) -> Result<(), DispatchError> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}

/// Write per-driver report rows as CSV, one row per driver.
pub fn export_to_csv(
    rows: &[DriverSummary],
    path: impl AsRef<Path>,
) -> Result<(), DispatchError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
