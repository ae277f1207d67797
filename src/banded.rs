use std::iter;

use log::debug;
use ndarray::Array2;

use crate::{
    cigar::EditOp,
    cost::CostModel,
    matrix::{fill_cell, traceback, Cell, DpMatrix, EditPath},
    mode::BandOverhang,
};

/// Band offset of logical cell `(row, column)`.
///
/// Row `row` stores the columns `row - radius ..= row + radius`, so the offset is
/// `column - (row - radius)`. Returns `None` if the cell lies outside of the band.
pub fn band_offset(row: usize, column: usize, radius: usize) -> Option<usize> {
    let offset = (column + radius).checked_sub(row)?;
    (offset <= 2 * radius).then_some(offset)
}

/// Logical column stored at `offset` of row `row`, the inverse of [`band_offset`].
///
/// Returns `None` if the offset would address a negative column.
pub fn band_column(row: usize, offset: usize, radius: usize) -> Option<usize> {
    (row + offset).checked_sub(radius)
}

/// Alignment matrix restricted to a diagonal band.
///
/// Stores one row per position of the first sequence and `2 * radius + 1` cells per row.
/// Cells outside of the band or past the end of the second sequence do not exist.
#[derive(Debug, Clone)]
pub struct BandedMatrix {
    cells: Array2<Cell>,
    radius: usize,
    columns: usize,
}

impl BandedMatrix {
    /// Band of `radius` around the diagonal of a `(rows + 1) x (columns + 1)` matrix.
    pub fn new(rows: usize, columns: usize, radius: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows + 1, 2 * radius + 1), Cell::UNREACHED),
            radius,
            columns,
        }
    }

    /// Number of cells stored per row.
    pub fn width(&self) -> usize {
        self.cells.dim().1
    }
}

impl DpMatrix for BandedMatrix {
    fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if column > self.columns {
            return None;
        }
        self.cells.get((row, band_offset(row, column, self.radius)?))
    }

    fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        if column > self.columns {
            return None;
        }
        self.cells
            .get_mut((row, band_offset(row, column, self.radius)?))
    }
}

/// Alignment of `seq1` and `seq2` restricted to paths within `radius` of the diagonal.
///
/// The result is optimal among in-band paths only. If the lengths differ by more than
/// `radius`, the band ends before the longer sequence does. The overhang is then
/// handled according to `overhang`.
/// Takes `O(len1 * radius)` time and space.
pub fn align_banded(
    seq1: &[char],
    seq2: &[char],
    costs: &CostModel,
    radius: usize,
    overhang: BandOverhang,
) -> EditPath {
    // A band wider than the longer sequence covers the whole matrix already.
    let radius = radius.min(seq1.len().max(seq2.len()));
    let rows = seq1.len().min(seq2.len() + radius);
    let columns = seq2.len().min(seq1.len() + radius);
    if rows < seq1.len() || columns < seq2.len() {
        debug!(
            "Lengths {} and {} differ by more than band radius {radius}, \
             band ends at ({rows}, {columns})",
            seq1.len(),
            seq2.len()
        );
    }

    let mut matrix = BandedMatrix::new(rows, columns, radius);
    for row in 0..=rows {
        for offset in 0..matrix.width() {
            let Some(column) = band_column(row, offset, radius) else {
                continue;
            };
            if column > columns {
                break;
            }
            fill_cell(&mut matrix, row, column, seq1, seq2, costs);
        }
    }

    // Both clamps above keep `columns + radius >= rows` and `rows + radius >= columns`.
    let terminal_offset = columns + radius - rows;
    debug!("Terminal cell of banded matrix is at row {rows}, offset {terminal_offset}");

    let mut cost = matrix.cells[[rows, terminal_offset]].cost;
    let mut operations = traceback(&matrix, seq1, seq2, rows, columns);

    if overhang == BandOverhang::Extend {
        let deletions = seq1.len() - rows;
        let insertions = seq2.len() - columns;
        operations.extend(iter::repeat(EditOp::Delete).take(deletions));
        operations.extend(iter::repeat(EditOp::Insert).take(insertions));
        cost += (deletions + insertions) as i64 * costs.gap_cost();
    }

    EditPath { cost, operations }
}
