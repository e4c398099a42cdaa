//! Distance matrix construction, unrolling, and near-neighbor filtering.

use std::collections::HashSet;

use tracing::debug;

use crate::error::AnalyticsError;
use crate::matrix::IdMatrix;
use crate::records::DistanceRecord;

/// Builds a symmetric distance matrix over the sorted union of all ids
/// appearing as `id_start` or `id_end`.
///
/// Every edge writes its distance into both orientations; repeated edges
/// for a pair overwrite earlier ones rather than accumulating. The
/// diagonal stays 0 unless an edge names the same id on both ends.
pub fn distance_matrix(edges: &[DistanceRecord]) -> Result<IdMatrix, AnalyticsError> {
    if edges.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut ids: Vec<i64> = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        ids.push(edge.id_start);
        ids.push(edge.id_end);
    }
    let mut matrix = IdMatrix::square(ids);

    for edge in edges {
        matrix.set(edge.id_start, edge.id_end, edge.distance);
        matrix.set(edge.id_end, edge.id_start, edge.distance);
    }

    debug!(labels = matrix.row_ids().len(), "distance matrix built");
    Ok(matrix)
}

/// Converts a square matrix back into long form: one record per ordered
/// label pair (i, j) with i != j, outer axis first, both in label order.
pub fn unroll_distance_matrix(
    matrix: &IdMatrix,
) -> Result<Vec<DistanceRecord>, AnalyticsError> {
    if !matrix.is_square() {
        let (rows, cols) = matrix.shape();
        return Err(AnalyticsError::NotSquare { rows, cols });
    }

    let col_ids = matrix.col_ids();
    let mut unrolled =
        Vec::with_capacity(col_ids.len() * col_ids.len().saturating_sub(1));
    for (row_id, cells) in matrix.rows() {
        for (&col_id, &distance) in col_ids.iter().zip(cells) {
            if row_id == col_id {
                continue;
            }
            unrolled.push(DistanceRecord::new(row_id, col_id, distance));
        }
    }
    Ok(unrolled)
}

/// Options for [`ids_within_threshold`].
#[derive(Debug, Clone)]
pub struct ThresholdOptions {
    /// Band width as a fraction of the reference mean.
    pub percentage: f64,
    /// Also enforce the lower bound `mean * (1 - percentage)`; off by
    /// default, which bounds from above only.
    pub symmetric: bool,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            percentage: 0.1,
            symmetric: false,
        }
    }
}

/// Selects long-form rows near the mean distance of a reference id.
///
/// The mean is taken over rows whose `id_start` is the reference id; an id
/// never seen there is an error. Rows matching on `id_start` come first,
/// then rows matching on `id_end`, with exact duplicates dropped keeping
/// the first occurrence.
pub fn ids_within_threshold(
    rows: &[DistanceRecord],
    reference_id: i64,
    options: &ThresholdOptions,
) -> Result<Vec<DistanceRecord>, AnalyticsError> {
    let reference: Vec<f64> = rows
        .iter()
        .filter(|row| row.id_start == reference_id)
        .map(|row| row.distance)
        .collect();
    if reference.is_empty() {
        return Err(AnalyticsError::UnknownReferenceId(reference_id));
    }

    let mean = reference.iter().sum::<f64>() / reference.len() as f64;
    let upper = mean * (1.0 + options.percentage);
    let lower = mean * (1.0 - options.percentage);
    debug!(reference_id, mean, upper, "near-neighbor threshold computed");

    let within =
        |distance: f64| distance <= upper && (!options.symmetric || distance >= lower);

    let start_matches = rows
        .iter()
        .filter(|row| row.id_start == reference_id && within(row.distance));
    let end_matches = rows
        .iter()
        .filter(|row| row.id_end == reference_id && within(row.distance));

    let mut seen: HashSet<(i64, i64, u64)> = HashSet::new();
    let mut selected = Vec::new();
    for row in start_matches.chain(end_matches) {
        if seen.insert((row.id_start, row.id_end, row.distance.to_bits())) {
            selected.push(row.clone());
        }
    }
    Ok(selected)
}
