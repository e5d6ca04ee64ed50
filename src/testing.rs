// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for unit, property and integration tests. Not part of the
//! public API.

#![doc(hidden)]

use crate::alphabet;

/// Brute-force occurrence scan, the ground truth for search equivalence.
pub fn naive_occurrences(text: &[u8], pattern: &[u8]) -> Vec<u32> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&offset| &text[offset..offset + pattern.len()] == pattern)
        .map(|offset| offset as u32)
        .collect()
}

/// Brute-force hits as `(offset, is_reverse)` pairs, covering both strands.
pub fn naive_strand_occurrences(text: &[u8], pattern: &[u8]) -> Vec<(u32, bool)> {
    let mut hits: Vec<(u32, bool)> = naive_occurrences(text, pattern)
        .into_iter()
        .map(|offset| (offset, false))
        .collect();
    let revcomp = alphabet::reverse_complement(pattern);
    hits.extend(
        naive_occurrences(text, &revcomp)
            .into_iter()
            .map(|offset| (offset, true)),
    );
    hits.sort_unstable();
    hits
}

/// A deterministic pseudo-random nucleotide sequence for benches and tests.
pub fn synthetic_sequence(len: usize, seed: u64) -> Vec<u8> {
    const SYMBOLS: [u8; 4] = [b'A', b'C', b'G', b'T'];
    let mut state = seed.wrapping_mul(2).wrapping_add(1);
    (0..len)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            SYMBOLS[(state % 4) as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_occurrences() {
        assert_eq!(naive_occurrences(b"ACACA", b"ACA"), vec![0, 2]);
        assert_eq!(naive_occurrences(b"ACACA", b"G"), Vec::<u32>::new());
        assert_eq!(naive_occurrences(b"AC", b"ACGT"), Vec::<u32>::new());
    }

    #[test]
    fn test_synthetic_sequence_is_deterministic() {
        let a = synthetic_sequence(64, 42);
        let b = synthetic_sequence(64, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&s| alphabet::is_valid(s)));
    }
}
