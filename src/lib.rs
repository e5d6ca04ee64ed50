// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! talpa - an enhanced suffix array index for nucleotide sequences.
//!
//! Builds a suffix array with LCP, child and bucket tables over a validated
//! `A C G T N` sequence, answering exact substring queries (optionally on
//! both strands) in time bounded by the pattern length times the alphabet
//! fan-out, independent of the sequence length beyond the bucket lookup.
//!
//! ```text
//!   Sequence ──► sais ──► suftab ──► lcp ──► lcptab ──► child ──► childtab
//!       │                    │                  │
//!       └────────────────────┴── bucket ◄───────┘
//!                                  │
//!            EsaIndex (immutable, Sync) ──► occurrences / search
//!                                  │
//!                          binary::save / load
//! ```
//!
//! The index is built once and never mutated; it has no interior mutability,
//! so concurrent readers need no synchronization. Persistence is a sectioned
//! binary format with a CRC32 footer ([`binary`]); loading revalidates every
//! table before handing out an index.
//!
//! # Example
//!
//! ```
//! use talpa::{search, EsaIndex};
//!
//! let index = EsaIndex::build(b"ACAAACATAT")?;
//! assert_eq!(index.occurrences(b"ACA")?, vec![0, 4]);
//!
//! let hits = search(&index, b"ATGT", true)?; // revcomp "ACAT" matches
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), talpa::Error>(())
//! ```

pub mod alphabet;
pub mod binary;
pub mod bucket;
pub mod child;
pub mod cli;
pub mod contracts;
pub mod error;
pub mod index;
pub mod lcp;
pub mod sais;
pub mod search;
pub mod sequence;
pub mod testing;

pub use error::{Error, Result};
pub use index::EsaIndex;
pub use search::{is_unique, off_target_occurrences, search, Match, Strand};
pub use sequence::Sequence;
