//! Traffic-flow analytics: pivoting, bucketing, and threshold filters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalyticsError;
use crate::matrix::IdMatrix;
use crate::records::FlowRecord;

/// Pivots flow records into a matrix of `car` values.
///
/// Rows are the sorted unique `id_1` values, columns the sorted unique
/// `id_2` values. When several records share an (`id_1`, `id_2`) pair the
/// last one wins; pairs never observed stay 0. Cells whose row label equals
/// their column label are forced to 0 after the pivot.
pub fn car_matrix(records: &[FlowRecord]) -> Result<IdMatrix, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let row_ids: Vec<i64> = records.iter().map(|record| record.id_1).collect();
    let col_ids: Vec<i64> = records.iter().map(|record| record.id_2).collect();
    let mut matrix = IdMatrix::new(row_ids, col_ids);

    for record in records {
        matrix.set(record.id_1, record.id_2, record.car);
    }
    matrix.zero_diagonal();

    debug!(shape = ?matrix.shape(), "car pivot matrix built");
    Ok(matrix)
}

/// Traffic volume classification for a `car` count: low up to 15, medium
/// up to 25, high above that. Both cutoffs are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeBand {
    Low,
    Medium,
    High,
}

/// Classifies a `car` value into its volume band.
pub fn volume_band(car: f64) -> VolumeBand {
    match car {
        car if car <= 15.0 => VolumeBand::Low,
        car if car <= 25.0 => VolumeBand::Medium,
        _ => VolumeBand::High,
    }
}

/// Per-band record counts. The three buckets partition the input exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl TypeCounts {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Counts records per volume band of their `car` value.
pub fn type_counts(records: &[FlowRecord]) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for record in records {
        match volume_band(record.car) {
            VolumeBand::Low => counts.low += 1,
            VolumeBand::Medium => counts.medium += 1,
            VolumeBand::High => counts.high += 1,
        }
    }
    counts
}

/// Positions (in input order) of records whose `bus` value exceeds twice
/// the column mean, ascending.
///
/// An empty table or an all-zero column yields an empty list.
pub fn bus_indexes(records: &[FlowRecord]) -> Vec<usize> {
    if records.is_empty() {
        return Vec::new();
    }

    let mean = records.iter().map(|record| record.bus).sum::<f64>() / records.len() as f64;
    let cutoff = 2.0 * mean;
    debug!(mean, cutoff, "bus column mean computed");

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.bus > cutoff)
        .map(|(position, _)| position)
        .collect()
}

/// Route labels whose group mean of `truck` exceeds 7, sorted ascending.
pub fn filter_routes(records: &[FlowRecord]) -> Vec<String> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.route.as_str()).or_insert((0.0, 0));
        entry.0 += record.truck;
        entry.1 += 1;
    }

    let kept: Vec<String> = groups
        .into_iter()
        .filter(|(_, (sum, count))| sum / *count as f64 > 7.0)
        .map(|(route, _)| route.to_string())
        .collect();

    debug!(routes = kept.len(), "routes above truck mean cutoff");
    kept
}

/// Rescales every cell: values above 20 shrink to 0.75x, everything else
/// grows to 1.25x, rounded to one decimal place with ties going to the
/// even tenth. The two arms cover all inputs. Returns a new matrix of the
/// same shape.
pub fn rescale_matrix(matrix: &IdMatrix) -> IdMatrix {
    matrix.map_cells(|value| {
        let scaled = if value > 20.0 {
            value * 0.75
        } else {
            value * 1.25
        };
        (scaled * 10.0).round_ties_even() / 10.0
    })
}
