// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Property tests: the table invariants and the search/persistence contracts
//! over randomized sequences.

use proptest::prelude::*;

use talpa::testing::{naive_occurrences, naive_strand_occurrences};
use talpa::{search, EsaIndex, Strand};

proptest! {
    /// Adjacent suffixes are in ascending order and every offset appears
    /// exactly once.
    #[test]
    fn prop_suffix_table_sorted_and_complete(seq in "[ACGTN]{1,120}") {
        let text = seq.as_bytes();
        let index = EsaIndex::build(text).unwrap();
        let suftab = index.suftab();

        prop_assert_eq!(suftab.len(), text.len() + 1);
        let mut seen = vec![false; suftab.len()];
        for window in suftab.windows(2) {
            prop_assert!(&text[window[0] as usize..] < &text[window[1] as usize..]);
        }
        for &pos in suftab {
            prop_assert!(!seen[pos as usize]);
            seen[pos as usize] = true;
        }
    }

    /// Every LCP entry equals the directly-compared prefix length.
    #[test]
    fn prop_lcp_matches_pairwise_comparison(seq in "[ACGTN]{1,120}") {
        let text = seq.as_bytes();
        let index = EsaIndex::build(text).unwrap();
        let suftab = index.suftab();
        let lcptab = index.lcptab();

        prop_assert_eq!(lcptab[0], 0);
        for i in 1..lcptab.len() {
            let a = &text[suftab[i - 1] as usize..];
            let b = &text[suftab[i] as usize..];
            let expected = a.iter().zip(b).take_while(|(x, y)| x == y).count();
            prop_assert_eq!(lcptab[i] as usize, expected);
        }
    }

    /// Indexed search returns exactly the brute-force offsets.
    #[test]
    fn prop_search_equals_brute_force(
        seq in "[ACGTN]{1,100}",
        pattern in "[ACGTN]{1,6}",
    ) {
        let text = seq.as_bytes();
        let index = EsaIndex::build(text).unwrap();
        prop_assert_eq!(
            index.occurrences(pattern.as_bytes()).unwrap(),
            naive_occurrences(text, pattern.as_bytes())
        );
    }

    /// A substring sampled from the sequence itself is always found at its
    /// sampling offset.
    #[test]
    fn prop_sampled_substring_is_found(
        seq in "[ACGTN]{2,100}",
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let text = seq.as_bytes();
        let start = a.index(text.len());
        let len = 1 + b.index(text.len() - start);
        let pattern = &text[start..start + len];

        let index = EsaIndex::build(text).unwrap();
        let offsets = index.occurrences(pattern).unwrap();
        prop_assert!(offsets.contains(&(start as u32)));
        prop_assert_eq!(offsets, naive_occurrences(text, pattern));
    }

    /// The bucket-seeded path (small depth, pattern at least as long as the
    /// depth) agrees with brute force too.
    #[test]
    fn prop_bucket_path_equals_brute_force(
        seq in "[ACGT]{8,80}",
        pattern in "[ACGT]{2,10}",
        depth in 2usize..=3,
    ) {
        let text = seq.as_bytes();
        let index = EsaIndex::build_with_depth(text, depth).unwrap();
        prop_assert_eq!(
            index.occurrences(pattern.as_bytes()).unwrap(),
            naive_occurrences(text, pattern.as_bytes())
        );
    }

    /// Both-strand search equals the naive two-scan union.
    #[test]
    fn prop_both_strands_equal_naive(
        seq in "[ACGTN]{1,80}",
        pattern in "[ACGTN]{1,6}",
    ) {
        let text = seq.as_bytes();
        let index = EsaIndex::build(text).unwrap();
        let got: Vec<(u32, bool)> = search(&index, pattern.as_bytes(), true)
            .unwrap()
            .into_iter()
            .map(|m| (m.offset, m.strand == Strand::Reverse))
            .collect();
        prop_assert_eq!(got, naive_strand_occurrences(text, pattern.as_bytes()));
    }

    /// A loaded index answers every query like the index it was saved from.
    #[test]
    fn prop_round_trip_is_behaviorally_identical(
        seq in "[ACGTN]{1,80}",
        pattern in "[ACGTN]{1,6}",
    ) {
        let index = EsaIndex::build_with_depth(seq.as_bytes(), 3).unwrap();
        let restored = EsaIndex::from_bytes(&index.to_bytes()).unwrap();
        prop_assert_eq!(restored.suftab(), index.suftab());
        prop_assert_eq!(restored.lcptab(), index.lcptab());
        prop_assert_eq!(
            restored.occurrences(pattern.as_bytes()).unwrap(),
            index.occurrences(pattern.as_bytes()).unwrap()
        );
    }

    /// Repeated queries return the same result set.
    #[test]
    fn prop_queries_are_idempotent(
        seq in "[ACGTN]{1,60}",
        pattern in "[ACGTN]{1,4}",
    ) {
        let index = EsaIndex::build(seq.as_bytes()).unwrap();
        let first = index.occurrences(pattern.as_bytes()).unwrap();
        prop_assert_eq!(index.occurrences(pattern.as_bytes()).unwrap(), first.clone());
        prop_assert_eq!(index.occurrences(pattern.as_bytes()).unwrap(), first);
    }
}
