// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strand-aware search over an [`EsaIndex`].
//!
//! The index itself only knows forward exact matching; this module runs the
//! query on the pattern and, when asked, on its reverse complement, tagging
//! every offset with the strand that matched. Biological interpretation of
//! the offsets (mispriming distance, site proximity) is the caller's job.

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::error::Result;
use crate::index::EsaIndex;

/// Which strand a pattern matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    /// The pattern itself occurs at the offset.
    Forward,
    /// The pattern's reverse complement occurs at the offset.
    Reverse,
}

/// One hit: a sequence offset and the strand that matched there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub offset: u32,
    pub strand: Strand,
}

/// Exact search on the forward strand, and on the reverse strand when
/// `both_strands` is set. Results are sorted by `(offset, strand)`; a
/// palindromic pattern yields one entry per strand at the same offset.
pub fn search(index: &EsaIndex, pattern: &[u8], both_strands: bool) -> Result<Vec<Match>> {
    let mut matches: Vec<Match> = index
        .occurrences(pattern)?
        .into_iter()
        .map(|offset| Match {
            offset,
            strand: Strand::Forward,
        })
        .collect();

    if both_strands {
        let revcomp = alphabet::reverse_complement(pattern);
        matches.extend(index.occurrences(&revcomp)?.into_iter().map(|offset| Match {
            offset,
            strand: Strand::Reverse,
        }));
    }

    matches.sort_unstable_by_key(|m| (m.offset, m.strand));
    Ok(matches)
}

/// Forward-strand occurrences of `pattern` other than the one expected at
/// `expected_offset`. Empty means the expected occurrence is the only one.
pub fn off_target_occurrences(
    index: &EsaIndex,
    pattern: &[u8],
    expected_offset: u32,
) -> Result<Vec<u32>> {
    let mut offsets = index.occurrences(pattern)?;
    offsets.retain(|&offset| offset != expected_offset);
    Ok(offsets)
}

/// True when `pattern` occurs only at `expected_offset` on the forward
/// strand.
pub fn is_unique(index: &EsaIndex, pattern: &[u8], expected_offset: u32) -> Result<bool> {
    Ok(off_target_occurrences(index, pattern, expected_offset)?.is_empty())
}
