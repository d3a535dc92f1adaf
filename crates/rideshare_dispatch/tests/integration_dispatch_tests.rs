use std::fs;
use std::path::PathBuf;

use rideshare_dispatch::{
    export_to_csv, export_to_json, summarize_drivers, summarize_fleet, DispatchError, Dispatcher,
};
use rideshare_core::error::RideShareError;

const DRIVERS_CSV: &str = "\
id,name,vin
7,test driver,WBWSS52P9NEYLVDE9
54,Rogers Bartell IV,1C9EVBRM0YBC564DZ
";

const PASSENGERS_CSV: &str = "\
id,name,phone
1,Ada,412-432-7640
";

const TRIPS_CSV: &str = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,7,1,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,5,3
2,7,,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,3,1
3,7,,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,2,5
4,54,1,2016-04-05T14:01:00+00:00,,,
";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(drivers: &str, passengers: &str, trips: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("drivers.csv"), drivers).expect("drivers fixture");
        fs::write(dir.path().join("passengers.csv"), passengers).expect("passengers fixture");
        fs::write(dir.path().join("trips.csv"), trips).expect("trips fixture");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn load(&self) -> Result<Dispatcher, DispatchError> {
        Dispatcher::load(
            self.path("drivers.csv"),
            self.path("passengers.csv"),
            self.path("trips.csv"),
        )
    }
}

#[test]
fn loads_fleet_and_attaches_trips_to_owners() {
    let fixture = Fixture::new(DRIVERS_CSV, PASSENGERS_CSV, TRIPS_CSV);
    let dispatcher = fixture.load().expect("fixture should load");

    assert_eq!(dispatcher.drivers().len(), 2);
    assert_eq!(dispatcher.passengers().len(), 1);

    let busy = dispatcher.find_driver(7).expect("driver 7");
    assert_eq!(busy.trips().len(), 3);
    assert!((busy.total_revenue() - 4.04).abs() < 1e-9);

    // Driver 54's only trip is still in progress: open end time, no cost.
    let idle = dispatcher.find_driver(54).expect("driver 54");
    assert_eq!(idle.trips().len(), 1);
    assert!(idle.trips()[0].is_in_progress());
    assert_eq!(idle.total_revenue(), 0.0);
}

#[test]
fn rejects_trip_naming_an_unknown_driver() {
    let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,99,,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,5,3
";
    let fixture = Fixture::new(DRIVERS_CSV, PASSENGERS_CSV, trips);
    let err = fixture.load().expect_err("unknown driver should fail");
    assert!(matches!(
        err,
        DispatchError::UnknownDriver {
            trip_id: 1,
            driver_id: 99
        }
    ));
}

#[test]
fn rejects_trip_naming_an_unknown_passenger() {
    let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,7,42,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,5,3
";
    let fixture = Fixture::new(DRIVERS_CSV, PASSENGERS_CSV, trips);
    let err = fixture.load().expect_err("unknown passenger should fail");
    assert!(matches!(err, DispatchError::UnknownPassenger { .. }));
}

#[test]
fn rejects_trip_without_a_driver() {
    let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
9,,,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,5,3
";
    let fixture = Fixture::new(DRIVERS_CSV, PASSENGERS_CSV, trips);
    let err = fixture.load().expect_err("unassigned trip should fail");
    assert!(matches!(err, DispatchError::UnassignedTrip(9)));
}

#[test]
fn domain_validation_failures_propagate() {
    let trips = "\
id,driver_id,passenger_id,start_time,end_time,cost,rating
1,7,,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,5,6
";
    let fixture = Fixture::new(DRIVERS_CSV, PASSENGERS_CSV, trips);
    let err = fixture.load().expect_err("rating 6 should fail");
    assert!(matches!(
        err,
        DispatchError::Domain(RideShareError::InvalidRating(6))
    ));
}

#[test]
fn exports_fleet_reports() {
    let fixture = Fixture::new(DRIVERS_CSV, PASSENGERS_CSV, TRIPS_CSV);
    let dispatcher = fixture.load().expect("fixture should load");

    let summary = summarize_fleet(dispatcher.drivers());
    assert_eq!(summary.total_trips, 4);
    assert_eq!(summary.top_earner_id, Some(7));

    let json_path = fixture.path("fleet.json");
    export_to_json(&summary, &json_path).expect("json export");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json file"))
            .expect("valid json");
    assert_eq!(json["total_drivers"], 2);

    let csv_path = fixture.path("drivers_report.csv");
    export_to_csv(&summarize_drivers(dispatcher.drivers()), &csv_path).expect("csv export");
    let report = fs::read_to_string(&csv_path).expect("csv file");
    assert!(report.starts_with("id,name,trips,"));
    assert_eq!(report.lines().count(), 3);
}
