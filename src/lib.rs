#![warn(missing_docs)]

//! Pairwise alignment of symbol sequences under a linear edit cost model.
//!
//! Two engines share one cost model: [`full`] computes a globally optimal alignment over
//! the whole matrix, [`banded`] restricts the search to a diagonal band.

/// Facade selecting an engine and packaging results.
pub mod align;
/// Alignment matrix restricted to a diagonal band.
pub mod banded;
/// Edit operations and CIGAR strings.
pub mod cigar;
/// Alignment configuration.
pub mod config;
/// Linear edit costs.
pub mod cost;
/// Full alignment matrix.
pub mod full;
/// Matrix cells, storage and the shared recurrence.
pub mod matrix;
/// Engine selection and band policies.
pub mod mode;

pub use align::{align, align_batch, AlignResult, Alignment};
pub use config::AlignConfig;
