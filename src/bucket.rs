// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-depth bucket table: maps the first `d` symbols of a suffix to the
//! first suffix-table row carrying that prefix, skipping the top `d` levels
//! of interval descent for long patterns.
//!
//! Keys pack the dense symbol codes 3 bits apiece into a `u64`, so they are
//! exact: a bucket hit certifies the first `d` pattern characters outright.
//! Suffixes shorter than `d` are not bucketed; patterns shorter than `d`
//! bypass the table and descend from the root instead.

use rustc_hash::FxHashMap;

use crate::alphabet;

/// Default bucket depth.
pub const DEFAULT_DEPTH: usize = 8;

/// Deepest supported bucket: 21 codes of 3 bits fill a `u64`.
pub const MAX_DEPTH: usize = 21;

/// Prefix-to-first-row map at a fixed depth.
#[derive(Debug, Clone)]
pub struct BucketTable {
    depth: usize,
    map: FxHashMap<u64, u32>,
}

impl BucketTable {
    /// Builds the table over a suffix-sorted sequence. Walking the rows from
    /// the end lets the smallest row of each distinct prefix win, so every
    /// stored row is a bucket boundary. `depth` must be in `1..=MAX_DEPTH`;
    /// the index constructor enforces that.
    pub fn build(sequence: &[u8], suftab: &[u32], depth: usize) -> Self {
        let n = sequence.len();
        let mut map = FxHashMap::default();
        for row in (0..suftab.len()).rev() {
            let pos = suftab[row] as usize;
            if n - pos >= depth {
                map.insert(pack(&sequence[pos..pos + depth]), row as u32);
            }
        }
        BucketTable { depth, map }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Suffix-table interval of all suffixes sharing the pattern's first
    /// `depth` symbols, or `None` when no suffix does. The caller guarantees
    /// `pattern.len() >= depth`. The end row is found by scanning forward
    /// while neighbouring suffixes still share at least `depth` symbols.
    pub fn lookup(&self, lcptab: &[u32], pattern: &[u8]) -> Option<(usize, usize)> {
        let start = *self.map.get(&pack(&pattern[..self.depth]))? as usize;
        let mut end = start;
        while end + 1 < lcptab.len() && lcptab[end + 1] >= self.depth as u32 {
            end += 1;
        }
        Some((start, end))
    }
}

/// Packs up to [`MAX_DEPTH`] symbols into an exact `u64` key.
fn pack(symbols: &[u8]) -> u64 {
    symbols
        .iter()
        .fold(0u64, |key, &s| (key << 3) | alphabet::code(s) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcp::build_lcp_table;
    use crate::sais::suffix_table;

    fn tables_for(text: &[u8], depth: usize) -> (Vec<u32>, BucketTable) {
        let suftab = suffix_table(text);
        let lcptab = build_lcp_table(text, &suftab);
        let buckets = BucketTable::build(text, &suftab, depth);
        (lcptab, buckets)
    }

    #[test]
    fn test_lookup_hits_full_interval() {
        // suftab("ACAAACATAT") = [10,2,3,0,4,8,6,1,5,9,7]
        let (lcptab, buckets) = tables_for(b"ACAAACATAT", 2);
        assert_eq!(buckets.lookup(&lcptab, b"AC"), Some((3, 4)));
        assert_eq!(buckets.lookup(&lcptab, b"AA"), Some((1, 2)));
        assert_eq!(buckets.lookup(&lcptab, b"CA"), Some((7, 8)));
        assert_eq!(buckets.lookup(&lcptab, b"GG"), None);
    }

    #[test]
    fn test_short_suffixes_not_bucketed() {
        // The "T" suffix has a single symbol left; at depth 2 only "TA"
        // (rank 10) is bucketed, so the interval excludes rank 9.
        let (lcptab, buckets) = tables_for(b"ACAAACATAT", 2);
        assert_eq!(buckets.lookup(&lcptab, b"TA"), Some((10, 10)));
    }

    #[test]
    fn test_smallest_row_wins() {
        let (lcptab, buckets) = tables_for(b"AAAA", 2);
        // Three suffixes start "AA"; the stored row must be the first.
        assert_eq!(buckets.lookup(&lcptab, b"AA"), Some((2, 4)));
    }

    #[test]
    fn test_keys_are_exact() {
        // Distinct 8-mers differing only in the last symbol never collide.
        let (lcptab, buckets) = tables_for(b"ACGTACGAACGTACGC", 8);
        let a = buckets.lookup(&lcptab, b"ACGTACGA");
        let c = buckets.lookup(&lcptab, b"ACGTACGC");
        assert!(a.is_some() && c.is_some());
        assert_ne!(a, c);
        assert_eq!(buckets.lookup(&lcptab, b"ACGTACGT"), None);
    }
}
