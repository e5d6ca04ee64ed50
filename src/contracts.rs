// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build invariant checks for freshly built tables.
//!
//! These run after construction in debug builds and compile to nothing in
//! release builds. A failure here is a construction bug, never a runtime
//! condition, so the checks panic instead of returning errors.

use crate::child::ChildTable;
use crate::index::EsaIndex;

/// Every adjacent pair of suffixes must be in ascending lexicographic order.
/// Slice comparison gives the shorter-prefix-first tie-break for free.
pub fn check_suffix_table_sorted(text: &[u8], suftab: &[u32]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for window in suftab.windows(2) {
        let a = &text[window[0] as usize..];
        let b = &text[window[1] as usize..];
        debug_assert!(
            a < b,
            "Contract violation: suffixes at offsets {} and {} out of order",
            window[0],
            window[1]
        );
    }
}

/// The suffix table must be a permutation of `0..=n`.
pub fn check_suffix_table_complete(text_len: usize, suftab: &[u32]) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        suftab.len(),
        text_len + 1,
        "Contract violation: suffix table has wrong length"
    );
    let mut seen = vec![false; suftab.len()];
    for &pos in suftab {
        debug_assert!(
            (pos as usize) < seen.len() && !seen[pos as usize],
            "Contract violation: offset {} out of range or repeated",
            pos
        );
        seen[pos as usize] = true;
    }
}

/// Each LCP entry must equal the actual common-prefix length of the two
/// adjacent suffixes.
pub fn check_lcp_table(text: &[u8], suftab: &[u32], lcptab: &[u32]) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        lcptab.len(),
        suftab.len(),
        "Contract violation: LCP table has wrong length"
    );
    debug_assert_eq!(lcptab[0], 0, "Contract violation: lcptab[0] must be 0");
    for i in 1..lcptab.len() {
        let a = &text[suftab[i - 1] as usize..];
        let b = &text[suftab[i] as usize..];
        let expected = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        debug_assert_eq!(
            lcptab[i] as usize, expected,
            "Contract violation: lcptab[{}] wrong",
            i
        );
    }
}

/// Stored link relations: `up` points left to a deeper LCP, `down` points
/// right to a deeper LCP, `next` points right to an equal LCP.
pub fn check_child_links(lcptab: &[u32], childtab: &ChildTable) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        childtab.len(),
        lcptab.len(),
        "Contract violation: child table has wrong length"
    );
    for i in 0..childtab.len() {
        if let Some(q) = childtab.up(i) {
            debug_assert!(
                q < i && lcptab[q] > lcptab[i],
                "Contract violation: up({}) = {} breaks the link relation",
                i,
                q
            );
        }
        if let Some(q) = childtab.down(i) {
            debug_assert!(
                q > i && lcptab[q] > lcptab[i],
                "Contract violation: down({}) = {} breaks the link relation",
                i,
                q
            );
        }
        if let Some(q) = childtab.next(i) {
            debug_assert!(
                q > i && lcptab[q] == lcptab[i],
                "Contract violation: next({}) = {} breaks the link relation",
                i,
                q
            );
        }
    }
}

/// Runs every table check against a built index.
pub fn check_index_well_formed(index: &EsaIndex) {
    if !cfg!(debug_assertions) {
        return;
    }
    let text = index.sequence().as_bytes();
    check_suffix_table_complete(text.len(), index.suftab());
    check_suffix_table_sorted(text, index.suftab());
    check_lcp_table(text, index.suftab(), index.lcptab());
    check_child_links(index.lcptab(), index.childtab());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::EsaIndex;

    #[test]
    fn test_built_index_passes_all_checks() {
        for text in [b"ACGTACGTNN".as_slice(), b"A", b"TTTTTT", b"GATTACA"] {
            let index = EsaIndex::build(text).unwrap();
            check_index_well_formed(&index);
        }
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn test_unsorted_table_is_rejected() {
        check_suffix_table_sorted(b"AC", &[2, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn test_repeated_offset_is_rejected() {
        check_suffix_table_complete(2, &[2, 0, 0]);
    }
}
