//! Test fixtures for toll-analytics.
//!
//! Record builders shared by the distance/toll integration suite.

use toll_analytics::records::{DistanceRecord, TimedTollRecord, TravelWindow, VehicleRecord};

/// One distance edge (or unrolled row).
pub fn edge(id_start: i64, id_end: i64, distance: f64) -> DistanceRecord {
    DistanceRecord::new(id_start, id_end, distance)
}

/// A toll input row with explicit per-type counts.
pub fn vehicle(
    id_start: i64,
    id_end: i64,
    distance: f64,
    moto: f64,
    car: f64,
    rv: f64,
    bus: f64,
    truck: f64,
) -> VehicleRecord {
    VehicleRecord {
        id_start,
        id_end,
        distance,
        moto,
        car,
        rv,
        bus,
        truck,
    }
}

/// A toll row observed in a same-day travel window.
pub fn timed_toll(
    id_start: i64,
    id_end: i64,
    day: &str,
    start_time: &str,
    end_time: &str,
    toll_rate: f64,
) -> TimedTollRecord {
    TimedTollRecord {
        id_start,
        id_end,
        start_day: day.to_string(),
        start_time: start_time.to_string(),
        end_day: day.to_string(),
        end_time: end_time.to_string(),
        toll_rate,
    }
}

/// A same-day travel window annotation for an id pair.
pub fn window(
    id_start: i64,
    id_end: i64,
    day: &str,
    start_time: &str,
    end_time: &str,
) -> TravelWindow {
    TravelWindow {
        id_start,
        id_end,
        start_day: day.to_string(),
        start_time: start_time.to_string(),
        end_day: day.to_string(),
        end_time: end_time.to_string(),
    }
}
