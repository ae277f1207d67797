//! Property tests for both alignment engines.

use proptest::prelude::*;
use rs_seqalign::{align, align::Alignment, config::AlignConfig, mode::AlignStrategy};

fn dna(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'C', 'G', 'T']), 0..max_len)
        .prop_map(|symbols| symbols.into_iter().collect())
}

fn prefix(seq: &str, len: usize) -> String {
    seq.chars().take(len).collect()
}

proptest! {
    #[test]
    fn self_alignment_matches_everything(seq in dna(40), cap in 0usize..50) {
        let result = align(&seq, &seq, false, cap);
        prop_assert_eq!(result.cost, -3 * seq.len().min(cap) as i64);
    }

    #[test]
    fn alignment_against_empty_is_all_gaps(
        seq in dna(40),
        cap in 0usize..50,
        banded in any::<bool>(),
    ) {
        let result = align(&seq, "", banded, cap);
        prop_assert_eq!(result.cost, 5 * seq.len().min(cap) as i64);
        prop_assert!(result.aligned2.chars().all(|symbol| symbol == '-'));
    }

    #[test]
    fn full_cost_is_symmetric(seq1 in dna(30), seq2 in dna(30)) {
        prop_assert_eq!(align(&seq1, &seq2, false, 100).cost, align(&seq2, &seq1, false, 100).cost);
    }

    #[test]
    fn full_is_never_worse_than_banded(seq1 in dna(30), seq2 in dna(30), cap in 0usize..40) {
        prop_assert!(align(&seq1, &seq2, false, cap).cost <= align(&seq1, &seq2, true, cap).cost);
    }

    #[test]
    fn aligned_strings_reproduce_inputs(
        seq1 in dna(150),
        seq2 in dna(150),
        cap in 0usize..160,
        banded in any::<bool>(),
    ) {
        let result = align(&seq1, &seq2, banded, cap);
        prop_assert_eq!(result.aligned1.len(), result.aligned2.len());
        prop_assert!(result.aligned1.len() <= 101);

        let stripped1 = result.aligned1.replace('-', "");
        let stripped2 = result.aligned2.replace('-', "");
        prop_assert!(prefix(&seq1, cap).starts_with(&stripped1));
        prop_assert!(prefix(&seq2, cap).starts_with(&stripped2));
    }

    #[test]
    fn cost_equals_cost_of_returned_path(
        seq1 in dna(40),
        seq2 in dna(40),
        banded in any::<bool>(),
    ) {
        let config = AlignConfig {
            strategy: AlignStrategy::from_banded(banded),
            ..AlignConfig::default()
        };
        let alignment = Alignment::run(&config, &seq1, &seq2).unwrap();
        prop_assert_eq!(config.costs.path_cost(&alignment.operations), alignment.cost);
    }

    #[test]
    fn wide_band_is_exact(seq1 in dna(25), seq2 in dna(25)) {
        let config = AlignConfig {
            strategy: AlignStrategy::Banded,
            band_radius: 30,
            ..AlignConfig::default()
        };
        let banded = Alignment::run(&config, &seq1, &seq2).unwrap();
        prop_assert_eq!(banded.cost, align(&seq1, &seq2, false, 1000).cost);
    }
}
