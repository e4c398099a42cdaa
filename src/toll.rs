//! Toll rate computation: flat per-vehicle-type rates and time-banded
//! adjustment.

use chrono::{NaiveTime, Timelike, Weekday};
use tracing::debug;

use crate::error::AnalyticsError;
use crate::records::{TimedTollRecord, TollRecord, VehicleRecord};

// Fixed rate coefficients per vehicle type.
const MOTO_RATE: f64 = 0.8;
const CAR_RATE: f64 = 1.2;
const RV_RATE: f64 = 1.5;
const BUS_RATE: f64 = 2.2;
const TRUCK_RATE: f64 = 3.6;

/// Last second of a day (23:59:59), in seconds from midnight.
const DAY_END: u32 = 24 * 3600 - 1;

/// Computes per-vehicle-type toll columns plus the combined `toll_rate`.
///
/// Each `<type>_toll` is the input field times its fixed coefficient,
/// unrounded; `toll_rate` is the sum of the five tolls.
pub fn toll_rates(rows: &[VehicleRecord]) -> Vec<TollRecord> {
    rows.iter()
        .map(|row| {
            let moto_toll = row.moto * MOTO_RATE;
            let car_toll = row.car * CAR_RATE;
            let rv_toll = row.rv * RV_RATE;
            let bus_toll = row.bus * BUS_RATE;
            let truck_toll = row.truck * TRUCK_RATE;

            TollRecord {
                id_start: row.id_start,
                id_end: row.id_end,
                distance: row.distance,
                moto_toll,
                car_toll,
                rv_toll,
                bus_toll,
                truck_toll,
                toll_rate: moto_toll + car_toll + rv_toll + bus_toll + truck_toll,
            }
        })
        .collect()
}

/// One multiplier band over a closed time-of-day interval.
///
/// `start` and `end` are seconds from midnight, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TollBand {
    pub start: u32,
    pub end: u32,
    pub multiplier: f64,
}

impl TollBand {
    pub fn new(start: u32, end: u32, multiplier: f64) -> Self {
        Self {
            start,
            end,
            multiplier,
        }
    }

    /// True when the band fully contains the closed range `[start, end]`.
    fn contains(&self, start: u32, end: u32) -> bool {
        self.start <= start && end <= self.end
    }
}

/// Time-of-day multiplier schedule, split into weekday and weekend bands.
///
/// A band applies to a row only when it fully contains the row's
/// time-of-day range; ranges crossing midnight sit inside no band and pass
/// through unadjusted.
#[derive(Debug, Clone)]
pub struct TollSchedule {
    pub weekday_bands: Vec<TollBand>,
    pub weekend_band: TollBand,
}

impl Default for TollSchedule {
    fn default() -> Self {
        Self {
            weekday_bands: vec![
                TollBand::new(0, 10 * 3600, 0.8),
                TollBand::new(10 * 3600, 18 * 3600, 1.2),
                TollBand::new(18 * 3600, DAY_END, 0.8),
            ],
            weekend_band: TollBand::new(0, DAY_END, 0.7),
        }
    }
}

/// Adjusts each row's `toll_rate` by the schedule band containing its
/// time-of-day range.
///
/// `start_day` picks the weekday or weekend bands; Saturday and Sunday are
/// weekend. Rows whose range no band contains pass through unchanged.
/// Malformed day or time strings are an error.
pub fn time_based_toll_rates(
    rows: &[TimedTollRecord],
    schedule: &TollSchedule,
) -> Result<Vec<TimedTollRecord>, AnalyticsError> {
    debug!(rows = rows.len(), "applying time-banded toll multipliers");

    let mut adjusted = Vec::with_capacity(rows.len());
    for row in rows {
        let day = parse_weekday(&row.start_day)?;
        let start = seconds_of_day(&row.start_time)?;
        let end = seconds_of_day(&row.end_time)?;

        let mut output = row.clone();
        if let Some(band) = matching_band(schedule, day, start, end) {
            output.toll_rate *= band.multiplier;
        }
        adjusted.push(output);
    }
    Ok(adjusted)
}

fn matching_band(
    schedule: &TollSchedule,
    day: Weekday,
    start: u32,
    end: u32,
) -> Option<&TollBand> {
    // A range crossing midnight never sits inside a single band.
    if end < start {
        return None;
    }
    if is_weekend(day) {
        schedule
            .weekend_band
            .contains(start, end)
            .then_some(&schedule.weekend_band)
    } else {
        schedule
            .weekday_bands
            .iter()
            .find(|band| band.contains(start, end))
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

fn parse_weekday(value: &str) -> Result<Weekday, AnalyticsError> {
    value
        .parse()
        .map_err(|_| AnalyticsError::MalformedTime(value.to_string()))
}

fn seconds_of_day(value: &str) -> Result<u32, AnalyticsError> {
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| AnalyticsError::MalformedTime(value.to_string()))?;
    Ok(time.num_seconds_from_midnight())
}
