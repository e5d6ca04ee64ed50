// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LCP table construction with Kasai's algorithm.
//!
//! `lcptab[i]` is the length of the longest common prefix of the suffixes at
//! ranks `i - 1` and `i`; `lcptab[0]` is 0 by definition. Kasai walks the
//! suffixes in text order and reuses the previous value minus one as a lower
//! bound, so total comparison work is linear.

/// Builds the LCP table for `text` and its suffix table. `suftab` must be the
/// full table including the sentinel row at rank 0.
pub fn build_lcp_table(text: &[u8], suftab: &[u32]) -> Vec<u32> {
    let n = text.len();
    debug_assert_eq!(suftab.len(), n + 1);

    // rank[pos] = row of the suffix starting at pos; the sentinel suffix
    // (pos == n) sits at rank 0, so every real suffix has rank >= 1.
    let mut rank = vec![0u32; n + 1];
    for (row, &pos) in suftab.iter().enumerate() {
        rank[pos as usize] = row as u32;
    }

    let mut lcptab = vec![0u32; n + 1];
    let mut h = 0usize;
    for pos in 0..n {
        let row = rank[pos] as usize;
        let prev = suftab[row - 1] as usize;
        while pos + h < n && prev + h < n && text[pos + h] == text[prev + h] {
            h += 1;
        }
        lcptab[row] = h as u32;
        h = h.saturating_sub(1);
    }
    lcptab
}
