//! Fixed-order chaining of the distance/toll stages.
//!
//! Callers hand in edges plus optional travel windows and get every
//! intermediate stage back. This is plain composition of the distance and
//! toll transforms; nothing runs implicitly and each stage remains callable
//! on its own.

use std::collections::HashMap;

use tracing::info;

use crate::distance::{
    distance_matrix, ids_within_threshold, unroll_distance_matrix, ThresholdOptions,
};
use crate::error::AnalyticsError;
use crate::matrix::IdMatrix;
use crate::records::{DistanceRecord, TimedTollRecord, TollRecord, TravelWindow, VehicleRecord};
use crate::toll::{time_based_toll_rates, toll_rates, TollSchedule};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Reference id for the near-neighbor stage; `None` skips that stage.
    pub threshold_reference: Option<i64>,
    pub threshold: ThresholdOptions,
    pub schedule: TollSchedule,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threshold_reference: None,
            threshold: ThresholdOptions::default(),
            schedule: TollSchedule::default(),
        }
    }
}

/// Every stage of [`run_pipeline`], in the order it was produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub distance_matrix: IdMatrix,
    pub unrolled: Vec<DistanceRecord>,
    pub within_threshold: Option<Vec<DistanceRecord>>,
    pub toll_rates: Vec<TollRecord>,
    pub timed_toll_rates: Vec<TimedTollRecord>,
}

/// Runs the distance/toll stages in their fixed order: distance matrix,
/// unroll, optional near-neighbor filter, flat toll rates, time-banded
/// adjustment.
///
/// The unrolled table carries no per-type vehicle counts, so each row's
/// distance serves as the rate base for all five vehicle types. The
/// time-banded stage covers the toll rows whose (`id_start`, `id_end`)
/// pair has a matching travel window; rows without one keep their flat
/// rate in `toll_rates`.
pub fn run_pipeline(
    edges: &[DistanceRecord],
    windows: &[TravelWindow],
    options: &PipelineOptions,
) -> Result<PipelineReport, AnalyticsError> {
    info!(edges = edges.len(), windows = windows.len(), "running toll pipeline");

    let matrix = distance_matrix(edges)?;
    info!(labels = matrix.row_ids().len(), "distance matrix stage complete");

    let unrolled = unroll_distance_matrix(&matrix)?;
    info!(rows = unrolled.len(), "unroll stage complete");

    let within_threshold = match options.threshold_reference {
        Some(reference_id) => {
            let rows = ids_within_threshold(&unrolled, reference_id, &options.threshold)?;
            info!(reference_id, rows = rows.len(), "threshold stage complete");
            Some(rows)
        }
        None => None,
    };

    let vehicles: Vec<VehicleRecord> = unrolled
        .iter()
        .map(|row| VehicleRecord {
            id_start: row.id_start,
            id_end: row.id_end,
            distance: row.distance,
            moto: row.distance,
            car: row.distance,
            rv: row.distance,
            bus: row.distance,
            truck: row.distance,
        })
        .collect();
    let tolls = toll_rates(&vehicles);
    info!(rows = tolls.len(), "toll rate stage complete");

    let window_index: HashMap<(i64, i64), &TravelWindow> = windows
        .iter()
        .map(|window| ((window.id_start, window.id_end), window))
        .collect();

    let timed: Vec<TimedTollRecord> = tolls
        .iter()
        .filter_map(|toll| {
            window_index
                .get(&(toll.id_start, toll.id_end))
                .map(|window| TimedTollRecord {
                    id_start: toll.id_start,
                    id_end: toll.id_end,
                    start_day: window.start_day.clone(),
                    start_time: window.start_time.clone(),
                    end_day: window.end_day.clone(),
                    end_time: window.end_time.clone(),
                    toll_rate: toll.toll_rate,
                })
        })
        .collect();
    let timed_toll_rates = time_based_toll_rates(&timed, &options.schedule)?;
    info!(rows = timed_toll_rates.len(), "time-banded stage complete");

    Ok(PipelineReport {
        distance_matrix: matrix,
        unrolled,
        within_threshold,
        toll_rates: tolls,
        timed_toll_rates,
    })
}
