//! Weekly coverage check for time-log records.
//!
//! Maps each record's day/time span onto a generic week (Monday 00:00:00 is
//! second 0) and reports, per (`id`, `id_2`) pair, whether the union of the
//! pair's spans covers the full seven days with no gaps.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike, Weekday};
use tracing::debug;

use crate::error::AnalyticsError;
use crate::records::TimeLogRecord;

const DAY_SECONDS: i64 = 86_400;
const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;

/// Reports, for each distinct (`id`, `id_2`) pair, whether that pair's
/// records jointly cover the full 24-hour, 7-day week.
///
/// Spans are closed at both ends with second granularity, so a span ending
/// at `23:59:59` meets one starting at `00:00:00` the next day without a
/// gap. A span whose end falls before its start wraps across the
/// Sunday/Monday boundary. Malformed day or time strings are an error.
pub fn time_check(
    records: &[TimeLogRecord],
) -> Result<BTreeMap<(i64, i64), bool>, AnalyticsError> {
    let mut spans: BTreeMap<(i64, i64), Vec<(i64, i64)>> = BTreeMap::new();
    for record in records {
        let start = week_second(&record.start_day, &record.start_time)?;
        let end = week_second(&record.end_day, &record.end_time)?;

        let group = spans.entry((record.id, record.id_2)).or_default();
        if end >= start {
            group.push((start, end));
        } else {
            // Wraps past the end of the week.
            group.push((start, WEEK_SECONDS - 1));
            group.push((0, end));
        }
    }
    debug!(groups = spans.len(), "weekly coverage groups collected");

    let mut coverage = BTreeMap::new();
    for (key, mut group) in spans {
        coverage.insert(key, covers_week(&mut group));
    }
    Ok(coverage)
}

/// Seconds into the generic week for a weekday name plus `HH:MM:SS` time.
fn week_second(day: &str, time: &str) -> Result<i64, AnalyticsError> {
    let weekday: Weekday = day
        .parse()
        .map_err(|_| AnalyticsError::MalformedTime(day.to_string()))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .map_err(|_| AnalyticsError::MalformedTime(time.to_string()))?;

    Ok(i64::from(weekday.num_days_from_monday()) * DAY_SECONDS
        + i64::from(time.num_seconds_from_midnight()))
}

/// True when the closed spans, taken together, leave no second of the week
/// uncovered. Adjacent spans (end + 1 == next start) count as contiguous.
fn covers_week(spans: &mut [(i64, i64)]) -> bool {
    spans.sort_unstable();

    let mut reach: i64 = -1;
    for &(start, end) in spans.iter() {
        if start > reach + 1 {
            return false;
        }
        reach = reach.max(end);
    }
    reach >= WEEK_SECONDS - 1
}
