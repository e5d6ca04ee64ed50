// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The uppercase nucleotide alphabet `A C G T` plus the masked wildcard `N`.
//!
//! Symbols are stored as ASCII bytes everywhere in the crate. Suffix sorting
//! works over a dense code (`code`) where the sentinel is `0` and symbols
//! follow in ascending ASCII order, so lexicographic order of codes equals
//! lexicographic order of the raw bytes.

use crate::error::{Error, Result};

/// Number of distinct symbol codes including the sentinel.
pub const ALPHABET_SIZE: usize = 6;

/// Returns true for the five accepted symbols.
#[inline]
pub const fn is_valid(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'C' | b'G' | b'N' | b'T')
}

/// Dense code for suffix sorting and bucket keys: sentinel 0, then the
/// symbols in ascending ASCII order. Unknown bytes map to 0 and must be
/// rejected by `validate` before ever reaching this function.
#[inline]
pub(crate) const fn code(symbol: u8) -> usize {
    match symbol {
        b'A' => 1,
        b'C' => 2,
        b'G' => 3,
        b'N' => 4,
        b'T' => 5,
        _ => 0,
    }
}

/// Watson-Crick complement. `N` stays `N`.
#[inline]
pub const fn complement(symbol: u8) -> u8 {
    match symbol {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement of a symbol slice.
pub fn reverse_complement(symbols: &[u8]) -> Vec<u8> {
    symbols.iter().rev().map(|&s| complement(s)).collect()
}

/// Validates every byte, reporting the first offender with its position.
pub fn validate(symbols: &[u8]) -> Result<()> {
    for (position, &byte) in symbols.iter().enumerate() {
        if !is_valid(byte) {
            return Err(Error::InvalidSymbol { byte, position });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_symbols() {
        for s in [b'A', b'C', b'G', b'T', b'N'] {
            assert!(is_valid(s));
        }
        for s in [b'a', b'c', b'U', b'X', b' ', 0u8] {
            assert!(!is_valid(s));
        }
    }

    #[test]
    fn test_codes_follow_ascii_order() {
        let symbols = [b'A', b'C', b'G', b'N', b'T'];
        for w in symbols.windows(2) {
            assert!(code(w[0]) < code(w[1]));
        }
        assert_eq!(code(b'A'), 1);
        assert_eq!(code(b'T'), 5);
        assert_eq!(code(b'x'), 0);
    }

    #[test]
    fn test_complement_is_involution() {
        for s in [b'A', b'C', b'G', b'T', b'N'] {
            assert_eq!(complement(complement(s)), s);
        }
        assert_eq!(complement(b'A'), b'T');
        assert_eq!(complement(b'C'), b'G');
        assert_eq!(complement(b'N'), b'N');
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ACGT"), b"ACGT");
        assert_eq!(reverse_complement(b"AACN"), b"NGTT");
        assert_eq!(reverse_complement(b""), b"");
    }

    #[test]
    fn test_validate_reports_position() {
        assert_eq!(validate(b"ACGTN"), Ok(()));
        assert_eq!(
            validate(b"ACxGT"),
            Err(crate::Error::InvalidSymbol {
                byte: b'x',
                position: 2
            })
        );
    }
}
