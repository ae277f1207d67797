use crate::{cigar::EditOp, cost::CostModel};

/// Which neighbour produced the minimum cost of a cell.
///
/// Rows follow the first sequence and columns the second one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    /// Unreached cell, or the origin.
    None,
    /// From `(i, j - 1)`. Consumes a symbol of the second sequence.
    FromLeft,
    /// From `(i - 1, j - 1)`. Consumes one symbol of each sequence.
    FromDiagonal,
    /// From `(i - 1, j)`. Consumes a symbol of the first sequence.
    FromUp,
}

/// Entry of an alignment matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Minimum cost of aligning the prefixes ending at this cell.
    pub cost: i64,
    /// Predecessor on a minimum cost path.
    pub direction: Direction,
}

impl Cell {
    /// Sentinel for cells no path has reached yet.
    pub const UNREACHED: Cell = Cell {
        cost: i64::MAX,
        direction: Direction::None,
    };

    /// Matrix origin at `(0, 0)`.
    pub const ORIGIN: Cell = Cell {
        cost: 0,
        direction: Direction::None,
    };

    /// Whether some path has set this cell.
    pub fn is_reached(&self) -> bool {
        self.cost != i64::MAX
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UNREACHED
    }
}

/// Storage of alignment matrix cells, addressed by logical `(row, column)` coordinates.
///
/// `row` is a position in the first sequence, `column` a position in the second one.
/// Implementations return `None` for coordinates they do not store, so callers can never
/// read outside of the computed area.
pub trait DpMatrix {
    /// Cell at `(row, column)`, if stored.
    fn get(&self, row: usize, column: usize) -> Option<&Cell>;

    /// Mutable cell at `(row, column)`, if stored.
    fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell>;
}

/// Minimum cost path through a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPath {
    /// Cost of the terminal cell.
    pub cost: i64,
    /// Operations from the origin to the terminal cell.
    pub operations: Vec<EditOp>,
}

/// Cells of the first row and column: pure insertions or deletions.
fn boundary_cell(row: usize, column: usize, costs: &CostModel) -> Cell {
    match (row, column) {
        (0, 0) => Cell::ORIGIN,
        (0, column) => Cell {
            cost: column as i64 * costs.gap_cost(),
            direction: Direction::FromLeft,
        },
        (row, _) => Cell {
            cost: row as i64 * costs.gap_cost(),
            direction: Direction::FromUp,
        },
    }
}

/// Order in which equally cheap predecessors win.
const PRECEDENCE: [Direction; 3] = [
    Direction::FromDiagonal,
    Direction::FromUp,
    Direction::FromLeft,
];

/// Best of the three predecessors of an inner cell.
///
/// Ties go to the diagonal, then to the vertical, then to the horizontal candidate.
/// Predecessors that are not stored or not reached are skipped.
fn relax<M: DpMatrix + ?Sized>(
    matrix: &M,
    row: usize,
    column: usize,
    seq1: &[char],
    seq2: &[char],
    costs: &CostModel,
) -> Cell {
    relax_in_order(matrix, row, column, seq1, seq2, costs, &PRECEDENCE)
}

/// [`relax`] with ties going to the earliest direction of `precedence`.
fn relax_in_order<M: DpMatrix + ?Sized>(
    matrix: &M,
    row: usize,
    column: usize,
    seq1: &[char],
    seq2: &[char],
    costs: &CostModel,
    precedence: &[Direction; 3],
) -> Cell {
    let mut best = Cell::UNREACHED;
    for &direction in precedence {
        let (predecessor, delta) = match direction {
            Direction::FromDiagonal => (
                matrix.get(row - 1, column - 1),
                costs.pair_cost(seq1[row - 1], seq2[column - 1]),
            ),
            Direction::FromUp => (matrix.get(row - 1, column), costs.gap_cost()),
            Direction::FromLeft => (matrix.get(row, column - 1), costs.gap_cost()),
            Direction::None => continue,
        };
        let Some(predecessor) = predecessor.filter(|cell| cell.is_reached()) else {
            continue;
        };
        let cost = predecessor.cost + delta;
        if cost < best.cost {
            best = Cell { cost, direction };
        }
    }
    best
}

/// Compute and store the cell at `(row, column)`.
///
/// Cells must be filled row by row, left to right, so that all predecessors are final.
/// `seq1` must hold at least `row` symbols and `seq2` at least `column` symbols.
pub fn fill_cell<M: DpMatrix + ?Sized>(
    matrix: &mut M,
    row: usize,
    column: usize,
    seq1: &[char],
    seq2: &[char],
    costs: &CostModel,
) {
    let cell = if row == 0 || column == 0 {
        boundary_cell(row, column, costs)
    } else {
        relax(&*matrix, row, column, seq1, seq2, costs)
    };
    if let Some(slot) = matrix.get_mut(row, column) {
        *slot = cell;
    }
}

/// Follow predecessor directions from `(row, column)` back to the origin.
pub fn traceback<M: DpMatrix + ?Sized>(
    matrix: &M,
    seq1: &[char],
    seq2: &[char],
    mut row: usize,
    mut column: usize,
) -> Vec<EditOp> {
    let mut operations = Vec::with_capacity(row + column);

    while row > 0 || column > 0 {
        let direction = matrix
            .get(row, column)
            .map_or(Direction::None, |cell| cell.direction);
        match direction {
            Direction::FromDiagonal => {
                operations.push(EditOp::classify(seq1[row - 1], seq2[column - 1]));
                row -= 1;
                column -= 1;
            }
            Direction::FromUp => {
                operations.push(EditOp::Delete);
                row -= 1;
            }
            Direction::FromLeft => {
                operations.push(EditOp::Insert);
                column -= 1;
            }
            Direction::None => {
                debug_assert!(false, "traceback reached an unset cell at ({row}, {column})");
                break;
            }
        }
    }

    operations.reverse();
    operations
}
