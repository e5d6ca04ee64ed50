// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index construction, querying, and deserialization.
//!
//! Two families share one enum. Invalid-input errors are caller bugs surfaced
//! loudly (empty sequence, empty pattern, a byte outside the nucleotide
//! alphabet). Corrupt-index errors come from `binary::load` rejecting bytes
//! that are internally inconsistent - a truncated file, a checksum mismatch,
//! tables whose lengths don't line up.
//!
//! Internal invariant violations (a broken child-table link, an unsorted
//! suffix table) are construction bugs, not runtime conditions: they are
//! covered by the debug assertions in `contracts` and by the property tests,
//! and never mapped to a recoverable error.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong building, querying, or loading an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // --- invalid input (caller bugs) ---
    /// An index cannot be built over an empty sequence.
    EmptySequence,
    /// An empty pattern is a caller bug, not a trivially-matching query.
    EmptyPattern,
    /// Sequence length exceeds the maximum representable `u32` offset.
    SequenceTooLong { len: usize, max: usize },
    /// A byte outside the `A C G T N` alphabet.
    InvalidSymbol { byte: u8, position: usize },
    /// Bucket depth outside the supported range.
    BucketDepthOutOfRange { depth: usize, max: usize },

    // --- corrupt index (deserialization) ---
    /// Input shorter than the smallest well-formed index file.
    Truncated { len: usize, min: usize },
    /// Header magic bytes are wrong.
    BadMagic { found: [u8; 4] },
    /// Footer magic bytes are wrong (truncated or overwritten file).
    BadFooterMagic { found: [u8; 4] },
    /// Format version this build does not understand.
    UnsupportedVersion { found: u8, expected: u8 },
    /// CRC32 over the content does not match the stored checksum.
    ChecksumMismatch { stored: u32, computed: u32 },
    /// A table's length disagrees with the sequence length.
    TableSizeMismatch {
        table: &'static str,
        len: usize,
        expected: usize,
    },
    /// A stored suffix offset or child link points outside the tables.
    OffsetOutOfRange { row: usize, offset: u32, max: u32 },
    /// The stored suffix table is not a permutation of `0..=n`.
    NotAPermutation { offset: u32 },
    /// The stored sequence contains a byte outside the alphabet.
    CorruptSequence { byte: u8, position: usize },
}

impl Error {
    /// True for errors caused by caller-supplied input to `build` or
    /// `search`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptySequence
                | Error::EmptyPattern
                | Error::SequenceTooLong { .. }
                | Error::InvalidSymbol { .. }
                | Error::BucketDepthOutOfRange { .. }
        )
    }

    /// True for errors raised while deserializing a persisted index.
    pub fn is_corrupt_index(&self) -> bool {
        !self.is_invalid_input()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySequence => write!(f, "cannot build an index over an empty sequence"),
            Error::EmptyPattern => write!(f, "cannot search for an empty pattern"),
            Error::SequenceTooLong { len, max } => {
                write!(f, "sequence length {} exceeds maximum {}", len, max)
            }
            Error::InvalidSymbol { byte, position } => {
                write!(
                    f,
                    "invalid symbol {:#04x} at position {} (expected A, C, G, T or N)",
                    byte, position
                )
            }
            Error::BucketDepthOutOfRange { depth, max } => {
                write!(f, "bucket depth {} out of range 1..={}", depth, max)
            }
            Error::Truncated { len, min } => {
                write!(f, "index file too small: {} bytes (minimum {})", len, min)
            }
            Error::BadMagic { found } => {
                write!(f, "invalid header magic: expected TLPA, got {:?}", found)
            }
            Error::BadFooterMagic { found } => {
                write!(f, "invalid footer magic: expected APLT, got {:?}", found)
            }
            Error::UnsupportedVersion { found, expected } => {
                write!(f, "unsupported version: {} (expected {})", found, expected)
            }
            Error::ChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "CRC32 mismatch: stored {:#010x}, computed {:#010x} (file corrupted)",
                    stored, computed
                )
            }
            Error::TableSizeMismatch {
                table,
                len,
                expected,
            } => {
                write!(
                    f,
                    "{} has {} entries (expected {} from the sequence length)",
                    table, len, expected
                )
            }
            Error::OffsetOutOfRange { row, offset, max } => {
                write!(f, "row {}: offset {} exceeds maximum {}", row, offset, max)
            }
            Error::NotAPermutation { offset } => {
                write!(f, "suffix table repeats offset {}", offset)
            }
            Error::CorruptSequence { byte, position } => {
                write!(
                    f,
                    "stored sequence has invalid symbol {:#04x} at position {}",
                    byte, position
                )
            }
        }
    }
}

impl std::error::Error for Error {}
