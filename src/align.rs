use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    banded::align_banded,
    cigar::{to_cigar, CigarFormat, EditOp},
    config::AlignConfig,
    full::align_full,
    matrix::EditPath,
    mode::AlignStrategy,
};

/// Externally visible alignment result.
///
/// The aligned strings are cut to the display limit; the cost covers the whole alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignResult {
    /// Total edit cost.
    pub cost: i64,
    /// First sequence with gap markers.
    pub aligned1: String,
    /// Second sequence with gap markers.
    pub aligned2: String,
}

/// Sequence alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Total edit cost of the alignment.
    pub cost: i64,
    /// Engine that produced the alignment.
    pub strategy: AlignStrategy,
    /// Alignment columns from start to end.
    pub operations: Vec<EditOp>,
    /// First sequence with gap markers, not truncated.
    pub aligned1: String,
    /// Second sequence with gap markers, not truncated.
    pub aligned2: String,
    display_limit: usize,
}

/// Align two sequences with the default cost model.
///
/// * @param `seq1`: First sequence.
/// * @param `seq2`: Second sequence.
/// * @param `banded`: Use the banded engine instead of the full matrix.
/// * @param `length_cap`: Number of leading symbols of each sequence to align.
///
/// ### Example
/// ```
/// use rs_seqalign::align;
///
/// let result = align("AAA", "AAB", false, 10);
/// assert_eq!(result.cost, -5);
/// assert_eq!(result.aligned1, "AAA");
/// assert_eq!(result.aligned2, "AAB");
/// ```
pub fn align(seq1: &str, seq2: &str, banded: bool, length_cap: usize) -> AlignResult {
    let config = AlignConfig {
        strategy: AlignStrategy::from_banded(banded),
        length_cap,
        ..AlignConfig::default()
    };
    // The default costs cannot overflow for any sequence that fits into memory.
    let (seq1, seq2) = config.capped(seq1, seq2);
    Alignment::align_capped(&config, &seq1, &seq2).display_result()
}

/// Align many independent pairs in parallel.
///
/// Each pair is aligned on its own, results are in input order.
pub fn align_batch<S1, S2>(
    config: &AlignConfig,
    pairs: &[(S1, S2)],
) -> anyhow::Result<Vec<Alignment>>
where
    S1: AsRef<str> + Sync,
    S2: AsRef<str> + Sync,
{
    config.validate()?;
    pairs
        .par_iter()
        .map(|(seq1, seq2)| Alignment::align_validated(config, seq1.as_ref(), seq2.as_ref()))
        .collect()
}

impl Alignment {
    /// Aligns two sequences according to an [`AlignConfig`].
    ///
    /// * @param `config`: [`AlignConfig`] configuration.
    /// * @param `seq1`: First sequence, treated as reference.
    /// * @param `seq2`: Second sequence.
    ///
    /// ### Example
    /// ```
    /// use rs_seqalign::{align::Alignment, config::AlignConfig, mode::AlignStrategy};
    ///
    /// let config = AlignConfig {
    ///     strategy: AlignStrategy::Banded,
    ///     ..AlignConfig::default()
    /// };
    /// let alignment = Alignment::run(&config, "GATTACA", "GATACA").unwrap();
    /// assert_eq!(alignment.aligned1.len(), alignment.aligned2.len());
    /// ```
    pub fn run(
        config: &AlignConfig,
        seq1: impl AsRef<str>,
        seq2: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        Self::align_validated(config, seq1.as_ref(), seq2.as_ref())
    }

    fn align_validated(config: &AlignConfig, seq1: &str, seq2: &str) -> anyhow::Result<Self> {
        let (seq1, seq2) = config.capped(seq1, seq2);
        config.costs.check_range(seq1.len(), seq2.len())?;
        Ok(Self::align_capped(config, &seq1, &seq2))
    }

    fn align_capped(config: &AlignConfig, seq1: &[char], seq2: &[char]) -> Self {
        if seq1.contains(&config.gap_marker) || seq2.contains(&config.gap_marker) {
            warn!(
                "Gap marker {:?} occurs in an input sequence, aligned strings will be ambiguous",
                config.gap_marker
            );
        }
        debug!(
            "Aligning {} and {} symbols with {:?} strategy",
            seq1.len(),
            seq2.len(),
            config.strategy
        );

        let EditPath { cost, operations } = match config.strategy {
            AlignStrategy::Full => align_full(seq1, seq2, &config.costs),
            AlignStrategy::Banded => align_banded(
                seq1,
                seq2,
                &config.costs,
                config.band_radius,
                config.overhang,
            ),
        };
        let (aligned1, aligned2) = render(&operations, seq1, seq2, config.gap_marker);
        trace!("Alignment with cost {cost}:\n{aligned1}\n{aligned2}");

        Self {
            cost,
            strategy: config.strategy,
            operations,
            aligned1,
            aligned2,
            display_limit: config.display_limit,
        }
    }

    /// Cost and the first `display_limit` characters of each aligned string.
    pub fn result(&self, display_limit: usize) -> AlignResult {
        AlignResult {
            cost: self.cost,
            aligned1: self.aligned1.chars().take(display_limit).collect(),
            aligned2: self.aligned2.chars().take(display_limit).collect(),
        }
    }

    /// [`Alignment::result`] with the display limit of the configuration.
    pub fn display_result(&self) -> AlignResult {
        self.result(self.display_limit)
    }

    /// Alignment as run-length encoded CIGAR string.
    pub fn cigar(&self, format: CigarFormat) -> String {
        to_cigar(&self.operations, format)
    }
}

/// Write both sequences along an edit path, with `gap` where a symbol is missing.
fn render(operations: &[EditOp], seq1: &[char], seq2: &[char], gap: char) -> (String, String) {
    let mut aligned1 = String::with_capacity(operations.len());
    let mut aligned2 = String::with_capacity(operations.len());
    let (mut position1, mut position2) = (0, 0);

    for op in operations {
        match op {
            EditOp::Match | EditOp::Mismatch => {
                aligned1.push(seq1[position1]);
                aligned2.push(seq2[position2]);
                position1 += 1;
                position2 += 1;
            }
            EditOp::Delete => {
                aligned1.push(seq1[position1]);
                aligned2.push(gap);
                position1 += 1;
            }
            EditOp::Insert => {
                aligned1.push(gap);
                aligned2.push(seq2[position2]);
                position2 += 1;
            }
        }
    }

    (aligned1, aligned2)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::DEFAULT_DISPLAY_LIMIT as DEFAULT_LIMIT, mode::BandOverhang};

    #[test]
    fn test_render() {
        let ops = [EditOp::Match, EditOp::Insert, EditOp::Mismatch, EditOp::Delete];
        let (aligned1, aligned2) = render(&ops, &['A', 'C', 'G'], &['A', 'T', 'T'], '-');
        assert_eq!(aligned1, "A-CG");
        assert_eq!(aligned2, "ATT-");
    }

    #[test]
    fn test_length_cap() {
        let result = align("ACGTACGT", "ACGTTTTT", false, 4);
        assert_eq!(result.cost, -12);
        assert_eq!(result.aligned1, "ACGT");
        assert_eq!(result.aligned2, "ACGT");

        let result = align("ACGT", "ACGT", true, 0);
        assert_eq!(result.cost, 0);
        assert!(result.aligned1.is_empty());
        assert!(result.aligned2.is_empty());
    }

    #[test]
    fn test_display_truncation() {
        let seq = "ACGT".repeat(50);
        let alignment = Alignment::run(&AlignConfig::default(), &seq, &seq).unwrap();
        assert_eq!(alignment.cost, -3 * 200);
        assert_eq!(alignment.aligned1.len(), 200);

        let result = alignment.display_result();
        assert_eq!(result.aligned1.chars().count(), DEFAULT_LIMIT);
        assert_eq!(result.aligned1, seq[..DEFAULT_LIMIT]);
        assert_eq!(alignment.result(10).aligned2, seq[..10]);
    }

    #[test]
    fn test_custom_gap_marker() {
        let config = AlignConfig {
            gap_marker: '.',
            ..AlignConfig::default()
        };
        let alignment = Alignment::run(&config, "", "ACG").unwrap();
        assert_eq!(alignment.aligned1, "...");
        assert_eq!(alignment.cost, 15);
    }

    #[test]
    fn test_invalid_config() {
        let config = AlignConfig {
            gap_marker: '\n',
            ..AlignConfig::default()
        };
        assert!(Alignment::run(&config, "A", "A").is_err());
        assert!(align_batch(&config, &[("A", "A")]).is_err());
    }

    #[test]
    fn test_banded_truncate_aligns_prefixes() {
        let config = AlignConfig {
            strategy: AlignStrategy::Banded,
            overhang: BandOverhang::Truncate,
            ..AlignConfig::default()
        };
        let alignment = Alignment::run(&config, "AC", "ACGTTTT").unwrap();
        assert_eq!(alignment.aligned1, "AC---");
        assert_eq!(alignment.aligned2, "ACGTT");
        assert_eq!(alignment.cost, -6 + 15);
    }

    #[test]
    fn test_overflowing_costs_are_rejected() {
        let config =
            AlignConfig::from_toml_str("[costs]\nindel_cost = 4611686018427387904").unwrap();
        let error = Alignment::run(&config, "ACG", "").unwrap_err();
        assert!(error.to_string().contains("overflow"));
        assert!(align_batch(&config, &[("", ""), ("ACG", "")]).is_err());

        // The length cap decides which lengths the check sees.
        let config = AlignConfig {
            length_cap: 1,
            ..config
        };
        assert_eq!(Alignment::run(&config, "ACG", "").unwrap().cost, 1 << 62);
    }

    #[test]
    fn test_cigar() {
        let alignment = Alignment::run(&AlignConfig::default(), "ACGT", "AGGTT").unwrap();
        // The inserted T ties between both positions, the diagonal wins at the end.
        assert_eq!(alignment.cigar(CigarFormat::Extended), "1=1X1=1I1=");
        assert_eq!(alignment.cigar(CigarFormat::Standard), "3M1I1M");
    }

    #[test]
    fn test_batch_keeps_order() {
        let pairs = [("AAA", "AAA"), ("AAA", "AAB"), ("", "AAAAA")];
        let costs: Vec<i64> = align_batch(&AlignConfig::default(), &pairs)
            .unwrap()
            .iter()
            .map(|alignment| alignment.cost)
            .collect();
        assert_eq!(costs, [-9, -5, 25]);
    }
}
