//! toll-analytics core transforms
//!
//! Stateless tabular transformations over vehicle flow and toll datasets.
//! Each module's operations take caller-owned record slices or matrices and
//! return newly built values; composition is plain function chaining.

pub mod records;
pub mod matrix;
pub mod error;
pub mod flow;
pub mod coverage;
pub mod distance;
pub mod toll;
pub mod pipeline;
