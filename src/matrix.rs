//! Labeled matrix value shared by the pivot and distance transforms.

use std::collections::HashMap;

use rayon::prelude::*;

/// A dense matrix indexed by identifier labels on both axes.
///
/// Labels are kept unique and ascending per axis; cells default to 0.
/// Construction fixes the label sets, after which only cell values change.
#[derive(Debug, Clone, PartialEq)]
pub struct IdMatrix {
    row_ids: Vec<i64>,
    col_ids: Vec<i64>,
    row_index: HashMap<i64, usize>,
    col_index: HashMap<i64, usize>,
    cells: Vec<Vec<f64>>,
}

impl IdMatrix {
    /// Builds a zero-filled matrix over the given label sets.
    ///
    /// Labels are sorted and deduplicated; the input order does not matter.
    pub fn new(mut row_ids: Vec<i64>, mut col_ids: Vec<i64>) -> Self {
        row_ids.sort_unstable();
        row_ids.dedup();
        col_ids.sort_unstable();
        col_ids.dedup();

        let row_index = label_index(&row_ids);
        let col_index = label_index(&col_ids);
        let cells = vec![vec![0.0; col_ids.len()]; row_ids.len()];

        Self {
            row_ids,
            col_ids,
            row_index,
            col_index,
            cells,
        }
    }

    /// Builds a zero-filled square matrix with identical labels on both axes.
    pub fn square(ids: Vec<i64>) -> Self {
        Self::new(ids.clone(), ids)
    }

    pub fn row_ids(&self) -> &[i64] {
        &self.row_ids
    }

    pub fn col_ids(&self) -> &[i64] {
        &self.col_ids
    }

    /// (row count, column count).
    pub fn shape(&self) -> (usize, usize) {
        (self.row_ids.len(), self.col_ids.len())
    }

    pub fn is_square(&self) -> bool {
        self.row_ids == self.col_ids
    }

    /// Cell value for a label pair, `None` when either label is foreign.
    pub fn get(&self, row: i64, col: i64) -> Option<f64> {
        let r = *self.row_index.get(&row)?;
        let c = *self.col_index.get(&col)?;
        Some(self.cells[r][c])
    }

    /// Writes a cell, returning whether both labels were known.
    ///
    /// Writes to foreign labels are ignored; repeated writes to the same
    /// cell overwrite (last write wins).
    pub fn set(&mut self, row: i64, col: i64, value: f64) -> bool {
        match (self.row_index.get(&row), self.col_index.get(&col)) {
            (Some(&r), Some(&c)) => {
                self.cells[r][c] = value;
                true
            }
            _ => false,
        }
    }

    /// Zeroes every cell whose row label equals its column label.
    pub fn zero_diagonal(&mut self) {
        for (r, &row_id) in self.row_ids.iter().enumerate() {
            if let Some(&c) = self.col_index.get(&row_id) {
                self.cells[r][c] = 0.0;
            }
        }
    }

    /// True when the matrix is square and mirror cells are equal.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.row_ids.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.cells[i][j] != self.cells[j][i] {
                    return false;
                }
            }
        }
        true
    }

    /// Returns a new matrix with `f` applied to every cell.
    pub fn map_cells<F>(&self, f: F) -> IdMatrix
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let cells = self
            .cells
            .par_iter()
            .map(|row| row.iter().map(|&value| f(value)).collect())
            .collect();

        IdMatrix {
            row_ids: self.row_ids.clone(),
            col_ids: self.col_ids.clone(),
            row_index: self.row_index.clone(),
            col_index: self.col_index.clone(),
            cells,
        }
    }

    /// Iterates rows as (row label, cell slice) pairs in label order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, &[f64])> {
        self.row_ids
            .iter()
            .zip(self.cells.iter())
            .map(|(&id, row)| (id, row.as_slice()))
    }
}

fn label_index(labels: &[i64]) -> HashMap<i64, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(position, &label)| (label, position))
        .collect()
}
