use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::cigar::EditOp;

/// Linear edit cost model.
///
/// Every cell transition of the alignment matrices is charged one of three fixed deltas.
/// Costs are minimised, so a negative `match_cost` rewards exact matches and the total
/// cost of an alignment can be negative.
///
/// ### Example
/// ```
/// use rs_seqalign::cost::CostModel;
///
/// let costs = CostModel::default();
/// assert_eq!(costs.pair_cost('A', 'A'), -3);
/// assert_eq!(costs.pair_cost('A', 'C'), 1);
/// assert_eq!(costs.gap_cost(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Cost of aligning two equal symbols.
    pub match_cost: i64,
    /// Cost of aligning two distinct symbols.
    pub substitution_cost: i64,
    /// Cost of aligning a symbol against a gap, on either side.
    pub indel_cost: i64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            match_cost: -3,
            substitution_cost: 1,
            indel_cost: 5,
        }
    }
}

impl CostModel {
    /// Cost model with the given deltas.
    pub fn new(match_cost: i64, substitution_cost: i64, indel_cost: i64) -> Self {
        Self {
            match_cost,
            substitution_cost,
            indel_cost,
        }
    }

    /// Cost of a diagonal step aligning `a` with `b`.
    pub fn pair_cost(&self, a: char, b: char) -> i64 {
        self.op_cost(EditOp::classify(a, b))
    }

    /// Cost of a horizontal or vertical step.
    pub fn gap_cost(&self) -> i64 {
        self.indel_cost
    }

    /// Cost of one alignment column.
    pub fn op_cost(&self, op: EditOp) -> i64 {
        match op {
            EditOp::Match => self.match_cost,
            EditOp::Mismatch => self.substitution_cost,
            EditOp::Insert | EditOp::Delete => self.indel_cost,
        }
    }

    /// Check that no alignment of sequences of length `len1` and `len2` can overflow.
    ///
    /// Every path has at most `len1 + len2` columns, so all cell costs stay strictly
    /// between `i64::MIN` and `i64::MAX`, the unreached marker.
    pub fn check_range(&self, len1: usize, len2: usize) -> anyhow::Result<()> {
        let largest = [self.match_cost, self.substitution_cost, self.indel_cost]
            .iter()
            .map(|cost| u128::from(cost.unsigned_abs()))
            .max()
            .unwrap_or_default();
        let columns = len1 as u128 + len2 as u128;
        ensure!(
            columns * largest < i64::MAX as u128,
            "Costs {self:?} overflow for sequences of length {len1} and {len2}"
        );
        Ok(())
    }

    /// Total cost of an edit path.
    pub fn path_cost(&self, ops: &[EditOp]) -> i64 {
        ops.iter().map(|op| self.op_cost(*op)).sum()
    }
}
