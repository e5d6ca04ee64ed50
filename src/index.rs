// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `EsaIndex` - the enhanced suffix array over one sequence.
//!
//! An index owns its sequence and four derived tables: the suffix table,
//! the LCP table, the child table and the bucket table. It is built once and
//! never mutated, holds no interior mutability, and is therefore `Sync`:
//! any number of threads may query it concurrently without locks.
//!
//! Exact single-strand search lives here (`occurrences`); the strand-aware
//! front end is in [`crate::search`].

use crate::bucket::{BucketTable, DEFAULT_DEPTH, MAX_DEPTH};
use crate::child::ChildTable;
use crate::contracts;
use crate::error::{Error, Result};
use crate::sequence::Sequence;
use crate::{alphabet, lcp, sais};

/// Immutable enhanced suffix array index.
#[derive(Debug, Clone)]
pub struct EsaIndex {
    sequence: Sequence,
    suftab: Vec<u32>,
    lcptab: Vec<u32>,
    childtab: ChildTable,
    buckets: BucketTable,
}

impl EsaIndex {
    /// Builds an index with the default bucket depth.
    pub fn build(symbols: &[u8]) -> Result<Self> {
        Self::build_with_depth(symbols, DEFAULT_DEPTH)
    }

    /// Builds an index with an explicit bucket depth in `1..=MAX_DEPTH`.
    pub fn build_with_depth(symbols: &[u8], depth: usize) -> Result<Self> {
        Self::from_sequence(Sequence::new(symbols.to_vec())?, depth)
    }

    /// Builds an index over an already-validated sequence.
    pub fn from_sequence(sequence: Sequence, depth: usize) -> Result<Self> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(Error::BucketDepthOutOfRange {
                depth,
                max: MAX_DEPTH,
            });
        }
        let text = sequence.as_bytes();
        let suftab = sais::suffix_table(text);
        let lcptab = lcp::build_lcp_table(text, &suftab);
        let childtab = ChildTable::build(&lcptab);
        let buckets = BucketTable::build(text, &suftab, depth);
        let index = EsaIndex {
            sequence,
            suftab,
            lcptab,
            childtab,
            buckets,
        };
        contracts::check_index_well_formed(&index);
        Ok(index)
    }

    /// Reassembles an index from deserialized tables, rebuilding the derived
    /// bucket table. The deserializer validates the tables beforehand.
    pub(crate) fn from_parts(
        sequence: Sequence,
        suftab: Vec<u32>,
        lcptab: Vec<u32>,
        childtab: ChildTable,
        depth: usize,
    ) -> Self {
        let buckets = BucketTable::build(sequence.as_bytes(), &suftab, depth);
        EsaIndex {
            sequence,
            suftab,
            lcptab,
            childtab,
            buckets,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Indexed sequence length (excluding the sentinel).
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false: empty sequences are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn suftab(&self) -> &[u32] {
        &self.suftab
    }

    pub fn lcptab(&self) -> &[u32] {
        &self.lcptab
    }

    pub fn childtab(&self) -> &ChildTable {
        &self.childtab
    }

    pub fn bucket_depth(&self) -> usize {
        self.buckets.depth()
    }

    /// All offsets where `pattern` occurs, ascending. A pattern that does not
    /// occur yields `Ok(vec![])`; an empty or invalid pattern is an error.
    pub fn occurrences(&self, pattern: &[u8]) -> Result<Vec<u32>> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        alphabet::validate(pattern)?;
        Ok(self.occurrences_unchecked(pattern))
    }

    /// Interval descent: seed via the bucket table (long patterns) or the
    /// root's child intervals, then alternate LCP-certified comparison with
    /// child descent until the pattern is exhausted or the interval is a
    /// singleton.
    fn occurrences_unchecked(&self, pattern: &[u8]) -> Vec<u32> {
        let text = self.sequence.as_bytes();
        let n = text.len();
        let plen = pattern.len();
        let depth = self.buckets.depth();

        // `c` counts pattern characters already certified as matching every
        // suffix in [lo, hi]. A bucket hit certifies all `depth` of them
        // because bucket keys are exact.
        let (mut lo, mut hi, mut c) = if plen >= depth {
            match self.buckets.lookup(&self.lcptab, pattern) {
                Some((lo, hi)) => (lo, hi, depth),
                None => return Vec::new(),
            }
        } else {
            match self.child_with_symbol(0, n, 0, pattern[0]) {
                Some((lo, hi)) => (lo, hi, 0),
                None => return Vec::new(),
            }
        };

        loop {
            if lo == hi {
                let pos = self.suftab[lo] as usize;
                if pos + plen <= n && text[pos + c..pos + plen] == pattern[c..] {
                    break;
                }
                return Vec::new();
            }
            if c == plen {
                break;
            }
            // Every suffix in the interval shares its first `l` characters,
            // so comparing the representative certifies them all.
            let l = self.childtab.interval_lcp(&self.lcptab, lo, hi) as usize;
            let m = l.min(plen);
            if m > c {
                let pos = self.suftab[lo] as usize;
                if text[pos + c..pos + m] != pattern[c..m] {
                    return Vec::new();
                }
                c = m;
                if c == plen {
                    break;
                }
            }
            match self.child_with_symbol(lo, hi, c, pattern[c]) {
                Some((next_lo, next_hi)) => {
                    lo = next_lo;
                    hi = next_hi;
                }
                None => return Vec::new(),
            }
        }

        let mut offsets: Vec<u32> = self.suftab[lo..=hi].to_vec();
        offsets.sort_unstable();
        offsets
    }

    /// Child interval of `[lo, hi]` whose suffixes carry `symbol` at relative
    /// offset `depth`. Children too short to have that character (including
    /// the sentinel) cannot match and are skipped.
    fn child_with_symbol(
        &self,
        lo: usize,
        hi: usize,
        depth: usize,
        symbol: u8,
    ) -> Option<(usize, usize)> {
        let text = self.sequence.as_bytes();
        let n = text.len();
        for (child_lo, child_hi) in self.childtab.child_intervals(lo, hi) {
            let pos = self.suftab[child_lo] as usize;
            if pos + depth < n && text[pos + depth] == symbol {
                return Some((child_lo, child_hi));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::naive_occurrences;

    #[test]
    fn test_basic_occurrences() {
        let index = EsaIndex::build(b"ACAAACATAT").unwrap();
        assert_eq!(index.occurrences(b"ACA").unwrap(), vec![0, 4]);
        assert_eq!(index.occurrences(b"A").unwrap(), vec![0, 2, 3, 4, 6, 8]);
        assert_eq!(index.occurrences(b"ACAAACATAT").unwrap(), vec![0]);
        assert_eq!(index.occurrences(b"G").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_bucket_seeded_search() {
        // Depth 2 forces the bucket path for any pattern of length >= 2.
        let index = EsaIndex::build_with_depth(b"ACAAACATAT", 2).unwrap();
        assert_eq!(index.occurrences(b"ACA").unwrap(), vec![0, 4]);
        assert_eq!(index.occurrences(b"AT").unwrap(), vec![6, 8]);
        assert_eq!(index.occurrences(b"TT").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_pattern_longer_than_sequence() {
        let index = EsaIndex::build(b"ACG").unwrap();
        assert_eq!(index.occurrences(b"ACGT").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_masked_symbol_is_literal() {
        let index = EsaIndex::build(b"ACNNACGT").unwrap();
        assert_eq!(index.occurrences(b"NN").unwrap(), vec![2]);
        assert_eq!(index.occurrences(b"ACN").unwrap(), vec![0]);
        // N does not act as a wildcard.
        assert_eq!(index.occurrences(b"NCGT").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_invalid_input_errors() {
        assert_eq!(EsaIndex::build(b"").unwrap_err(), Error::EmptySequence);
        assert_eq!(
            EsaIndex::build_with_depth(b"ACGT", 0).unwrap_err(),
            Error::BucketDepthOutOfRange { depth: 0, max: 21 }
        );
        assert_eq!(
            EsaIndex::build_with_depth(b"ACGT", 22).unwrap_err(),
            Error::BucketDepthOutOfRange { depth: 22, max: 21 }
        );

        let index = EsaIndex::build(b"ACGT").unwrap();
        assert_eq!(index.occurrences(b"").unwrap_err(), Error::EmptyPattern);
        assert_eq!(
            index.occurrences(b"AXG").unwrap_err(),
            Error::InvalidSymbol {
                byte: b'X',
                position: 1
            }
        );
    }

    #[test]
    fn test_matches_brute_force() {
        let text = b"GATTACAGATTACAGGGATTACA";
        let index = EsaIndex::build_with_depth(text, 3).unwrap();
        for pattern in [
            b"GATTACA".as_slice(),
            b"ATTA",
            b"GG",
            b"A",
            b"TACAG",
            b"CCC",
        ] {
            assert_eq!(
                index.occurrences(pattern).unwrap(),
                naive_occurrences(text, pattern),
                "{pattern:?}"
            );
        }
    }

    #[test]
    fn test_repeated_queries_are_idempotent() {
        let index = EsaIndex::build(b"ACACACACAC").unwrap();
        let first = index.occurrences(b"CAC").unwrap();
        for _ in 0..3 {
            assert_eq!(index.occurrences(b"CAC").unwrap(), first);
        }
    }
}
