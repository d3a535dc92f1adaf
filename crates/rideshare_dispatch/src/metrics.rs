//! Fleet-level aggregation over loaded drivers.

use rideshare_core::driver::Driver;
use rideshare_core::payout::round_to_cents;

/// Per-driver row for tabular reports.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DriverSummary {
    pub id: u64,
    pub name: String,
    pub trips: usize,
    pub total_revenue: f64,
    pub average_hourly_revenue: f64,
    pub average_rating: f64,
}

/// Aggregated metrics across a whole fleet.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FleetSummary {
    pub total_drivers: usize,
    pub total_trips: usize,
    /// Sum of every driver's take-home, rounded to cents.
    pub total_revenue: f64,
    /// Mean of per-driver average ratings, counting only drivers with at
    /// least one rated trip. 0.0 for an unrated fleet.
    pub average_rating: f64,
    pub top_earner_id: Option<u64>,
    pub best_rated_id: Option<u64>,
}

/// Build a per-driver report row for each driver, in input order.
pub fn summarize_drivers(drivers: &[Driver]) -> Vec<DriverSummary> {
    drivers
        .iter()
        .map(|driver| DriverSummary {
            id: driver.id(),
            name: driver.name().to_string(),
            trips: driver.trips().len(),
            total_revenue: driver.total_revenue(),
            average_hourly_revenue: driver.average_hourly_revenue(),
            average_rating: driver.average_rating(),
        })
        .collect()
}

/// Aggregate per-driver metrics into one fleet summary.
pub fn summarize_fleet(drivers: &[Driver]) -> FleetSummary {
    let total_trips = drivers.iter().map(|d| d.trips().len()).sum();
    let total_revenue = round_to_cents(drivers.iter().map(Driver::total_revenue).sum());

    let rated: Vec<(u64, f64)> = drivers
        .iter()
        .map(|d| (d.id(), d.average_rating()))
        .filter(|&(_, rating)| rating > 0.0)
        .collect();
    let average_rating = if rated.is_empty() {
        0.0
    } else {
        rated.iter().map(|&(_, r)| r).sum::<f64>() / rated.len() as f64
    };

    let top_earner_id = drivers
        .iter()
        .max_by(|a, b| a.total_revenue().total_cmp(&b.total_revenue()))
        .map(Driver::id);
    let best_rated_id = rated
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|&(id, _)| id);

    FleetSummary {
        total_drivers: drivers.len(),
        total_trips,
        total_revenue,
        average_rating,
        top_earner_id,
        best_rated_id,
    }
}
