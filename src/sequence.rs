// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `Sequence` - an immutable, validated nucleotide buffer.
//!
//! Every byte is checked against the alphabet at construction time, so the
//! rest of the crate can index into the buffer without revalidating. Once an
//! index is built over a sequence it is never mutated.

use crate::alphabet;
use crate::error::{Error, Result};

/// Longest indexable sequence. Suffix offsets are stored as `u32` and the
/// tables hold `n + 1` rows, so `n` must stay below `u32::MAX`.
pub const MAX_SEQUENCE_LEN: usize = (u32::MAX - 1) as usize;

/// An immutable, validated run of `A C G T N` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: Vec<u8>,
}

impl Sequence {
    /// Validates and wraps a symbol buffer.
    ///
    /// Fails on empty input, on input longer than [`MAX_SEQUENCE_LEN`], and
    /// on any byte outside the alphabet.
    pub fn new(symbols: Vec<u8>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptySequence);
        }
        if symbols.len() > MAX_SEQUENCE_LEN {
            return Err(Error::SequenceTooLong {
                len: symbols.len(),
                max: MAX_SEQUENCE_LEN,
            });
        }
        alphabet::validate(&symbols)?;
        Ok(Sequence { symbols })
    }

    /// Builds a sequence from user-supplied text: whitespace is stripped and
    /// lowercase symbols are folded to uppercase before validation.
    pub fn from_text(text: &str) -> Result<Self> {
        let symbols: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| b.to_ascii_uppercase())
            .collect();
        Sequence::new(symbols)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: empty sequences are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// The reverse complement as a new sequence. Valid input maps to valid
    /// output, so this cannot fail.
    pub fn reverse_complement(&self) -> Self {
        Sequence {
            symbols: alphabet::reverse_complement(&self.symbols),
        }
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(Sequence::new(b"ACGTN".to_vec()).is_ok());
        assert_eq!(Sequence::new(Vec::new()), Err(Error::EmptySequence));
        assert_eq!(
            Sequence::new(b"ACGU".to_vec()),
            Err(Error::InvalidSymbol {
                byte: b'U',
                position: 3
            })
        );
    }

    #[test]
    fn test_from_text_normalizes() {
        let seq = Sequence::from_text("ac gt\nNN\t").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGTNN");
        assert!(Sequence::from_text("   \n").is_err());
    }

    #[test]
    fn test_reverse_complement() {
        let seq = Sequence::new(b"AACGT".to_vec()).unwrap();
        assert_eq!(seq.reverse_complement().as_bytes(), b"ACGTT");
        assert_eq!(seq.reverse_complement().reverse_complement(), seq);
    }
}
