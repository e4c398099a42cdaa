//! Record types for the supported table shapes.
//!
//! Each struct is one row schema. Tables are plain slices of records; the
//! transforms never mutate their inputs and always return newly built
//! values. Day and time fields stay as strings the way they arrive in the
//! source datasets and are parsed at the point of use.

use serde::{Deserialize, Serialize};

/// One traffic-flow observation between a pair of ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub id_1: i64,
    pub id_2: i64,
    pub route: String,
    pub car: f64,
    pub bus: f64,
    pub truck: f64,
}

/// One logged time span for a pair of ids.
///
/// `start_day`/`end_day` are weekday names ("Monday"); `start_time` and
/// `end_time` are `HH:MM:SS` times of day. The source datasets carry the
/// four time columns in camelCase; the aliases accept that shape directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogRecord {
    pub id: i64,
    pub id_2: i64,
    #[serde(alias = "startDay")]
    pub start_day: String,
    #[serde(alias = "startTime")]
    pub start_time: String,
    #[serde(alias = "endDay")]
    pub end_day: String,
    #[serde(alias = "endTime")]
    pub end_time: String,
}

/// One distance edge, or one row of an unrolled distance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub id_start: i64,
    pub id_end: i64,
    pub distance: f64,
}

impl DistanceRecord {
    pub fn new(id_start: i64, id_end: i64, distance: f64) -> Self {
        Self {
            id_start,
            id_end,
            distance,
        }
    }
}

/// Toll computation input: a distance-bearing row with per-vehicle-type
/// counts (or rate bases) for all five supported vehicle types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id_start: i64,
    pub id_end: i64,
    pub distance: f64,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

/// Toll computation output: per-vehicle-type toll columns plus the
/// combined `toll_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollRecord {
    pub id_start: i64,
    pub id_end: i64,
    pub distance: f64,
    pub moto_toll: f64,
    pub car_toll: f64,
    pub rv_toll: f64,
    pub bus_toll: f64,
    pub truck_toll: f64,
    pub toll_rate: f64,
}

/// A toll row annotated with the travel window it was observed in.
///
/// Input and output shape of the time-based adjustment: the output differs
/// only in `toll_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedTollRecord {
    pub id_start: i64,
    pub id_end: i64,
    pub start_day: String,
    pub start_time: String,
    pub end_day: String,
    pub end_time: String,
    pub toll_rate: f64,
}

/// Travel window annotation for an (id_start, id_end) pair, used by the
/// pipeline to attach day/time context to toll rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelWindow {
    pub id_start: i64,
    pub id_end: i64,
    pub start_day: String,
    pub start_time: String,
    pub end_day: String,
    pub end_time: String,
}
