use log::debug;
use ndarray::Array2;

use crate::{
    cost::CostModel,
    matrix::{fill_cell, traceback, Cell, DpMatrix, EditPath},
};

/// Dense `(len1 + 1) x (len2 + 1)` alignment matrix.
///
/// Cell `(i, j)` holds the optimal cost of aligning the first `i` symbols of the first
/// sequence with the first `j` symbols of the second one.
#[derive(Debug, Clone)]
pub struct FullMatrix {
    cells: Array2<Cell>,
}

impl FullMatrix {
    /// Unreached matrix for sequences of length `len1` and `len2`.
    pub fn new(len1: usize, len2: usize) -> Self {
        Self {
            cells: Array2::from_elem((len1 + 1, len2 + 1), Cell::UNREACHED),
        }
    }
}

impl DpMatrix for FullMatrix {
    fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get((row, column))
    }

    fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.cells.get_mut((row, column))
    }
}

/// Globally optimal alignment of `seq1` and `seq2`.
///
/// Both sequences are aligned in full; callers apply the length cap beforehand.
/// Takes `O(len1 * len2)` time and space.
pub fn align_full(seq1: &[char], seq2: &[char], costs: &CostModel) -> EditPath {
    let (rows, columns) = (seq1.len(), seq2.len());
    debug!("Filling full matrix of {} x {} cells", rows + 1, columns + 1);

    let mut matrix = FullMatrix::new(rows, columns);
    for row in 0..=rows {
        for column in 0..=columns {
            fill_cell(&mut matrix, row, column, seq1, seq2, costs);
        }
    }

    EditPath {
        cost: matrix.cells[[rows, columns]].cost,
        operations: traceback(&matrix, seq1, seq2, rows, columns),
    }
}
