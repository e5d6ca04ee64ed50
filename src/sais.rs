// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction via SA-IS (suffix array by induced sorting).
//!
//! The sorter works over any byte text; an implicit sentinel smaller than
//! every symbol is appended, so the output has `text.len() + 1` rows with the
//! empty suffix at rank 0 and every real suffix offset at ranks `1..=n` in
//! ascending lexicographic order. Ties between a suffix and one of its own
//! prefixes are resolved shorter-first, which the sentinel models for free.
//!
//! SA-IS classifies suffixes as S-type or L-type, sorts the LMS (leftmost-S)
//! substrings by one round of induced sorting, names them, recurses on the
//! reduced text only when names collide, and induces the final order from the
//! sorted LMS suffixes. The reduced problem is at most half the size of the
//! input, so recursion depth is logarithmic in `n`.

/// Marker for an unfilled suffix-array slot during induction.
const EMPTY: usize = usize::MAX;

/// Builds the suffix table for `text`: length `text.len() + 1`, sentinel
/// suffix at rank 0, real offsets in ascending lexicographic order after it.
pub fn suffix_table(text: &[u8]) -> Vec<u32> {
    // Shift bytes up by one so code 0 is free for the sentinel.
    let mut codes: Vec<usize> = Vec::with_capacity(text.len() + 1);
    codes.extend(text.iter().map(|&b| b as usize + 1));
    codes.push(0);
    sais(&codes, 257).into_iter().map(|p| p as u32).collect()
}

/// Recursive SA-IS core over an integer text whose last symbol is a unique
/// smallest sentinel. Returns the full suffix array of `text`.
fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    if n == 1 {
        return vec![0];
    }
    if n == 2 {
        // [x, 0] with x > 0: the sentinel suffix sorts first.
        return vec![1, 0];
    }

    let is_s = classify_suffixes(text);
    let lms: Vec<usize> = (0..n).filter(|&i| is_lms(&is_s, i)).collect();
    let sizes = bucket_sizes(text, alphabet_size);

    // Round 1: approximate LMS order is enough to sort the LMS substrings.
    let mut sa = vec![EMPTY; n];
    place_lms(&mut sa, text, &sizes, &lms);
    induce_l(&mut sa, text, &is_s, &sizes);
    induce_s(&mut sa, text, &is_s, &sizes);

    // Name each LMS substring by its rank among the sorted substrings.
    let mut names = vec![EMPTY; n];
    let mut current = 0usize;
    let mut prev = EMPTY;
    for &pos in sa.iter() {
        if pos == EMPTY || !is_lms(&is_s, pos) {
            continue;
        }
        if prev != EMPTY && !lms_substrings_equal(text, &is_s, prev, pos) {
            current += 1;
        }
        names[pos] = current;
        prev = pos;
    }
    let distinct = current + 1;

    // Order the LMS suffixes exactly, recursing only on name collisions.
    let sorted_lms: Vec<usize> = if distinct == lms.len() {
        let mut by_rank = vec![0usize; lms.len()];
        for &pos in &lms {
            by_rank[names[pos]] = pos;
        }
        by_rank
    } else {
        let reduced: Vec<usize> = lms.iter().map(|&pos| names[pos]).collect();
        // The reduced text ends with the sentinel's name 0, still unique
        // and smallest, so it is a valid SA-IS input as-is.
        let reduced_sa = sais(&reduced, distinct);
        reduced_sa.iter().map(|&rank| lms[rank]).collect()
    };

    // Round 2: induce the final order from the exactly-sorted LMS suffixes.
    sa.fill(EMPTY);
    place_lms(&mut sa, text, &sizes, &sorted_lms);
    induce_l(&mut sa, text, &is_s, &sizes);
    induce_s(&mut sa, text, &is_s, &sizes);
    sa
}

/// S/L classification: suffix `i` is S-type when it sorts after-or-equal
/// shorter, i.e. `text[i..] < text[i+1..]`. The sentinel is S-type.
fn classify_suffixes(text: &[usize]) -> Vec<bool> {
    let n = text.len();
    let mut is_s = vec![false; n];
    is_s[n - 1] = true;
    for i in (0..n - 1).rev() {
        is_s[i] = text[i] < text[i + 1] || (text[i] == text[i + 1] && is_s[i + 1]);
    }
    is_s
}

/// An LMS position is an S-type position whose left neighbour is L-type.
#[inline]
fn is_lms(is_s: &[bool], i: usize) -> bool {
    i > 0 && is_s[i] && !is_s[i - 1]
}

fn bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

/// First free slot of each bucket, scanning forward.
fn bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0usize; sizes.len()];
    let mut sum = 0;
    for (c, &size) in sizes.iter().enumerate() {
        heads[c] = sum;
        sum += size;
    }
    heads
}

/// One past the last slot of each bucket.
fn bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0usize; sizes.len()];
    let mut sum = 0;
    for (c, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[c] = sum;
    }
    tails
}

/// Drops LMS positions at their bucket tails. Iterating in reverse keeps the
/// given order within each bucket, which round 2 relies on.
fn place_lms(sa: &mut [usize], text: &[usize], sizes: &[usize], lms: &[usize]) {
    let mut tails = bucket_tails(sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }
}

/// Left-to-right pass inducing L-type suffixes from whatever is placed.
fn induce_l(sa: &mut [usize], text: &[usize], is_s: &[bool], sizes: &[usize]) {
    let mut heads = bucket_heads(sizes);
    for i in 0..sa.len() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if !is_s[j] {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }
}

/// Right-to-left pass inducing S-type suffixes, overwriting the approximate
/// LMS placements from round 1 with their induced positions.
fn induce_s(sa: &mut [usize], text: &[usize], is_s: &[bool], sizes: &[usize]) {
    let mut tails = bucket_tails(sizes);
    for i in (0..sa.len()).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if is_s[j] {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Compares two LMS substrings (from an LMS position up to and including the
/// next LMS position). The sentinel substring equals only itself.
fn lms_substrings_equal(text: &[usize], is_s: &[bool], a: usize, b: usize) -> bool {
    let n = text.len();
    if a == n - 1 || b == n - 1 {
        return a == b;
    }
    let mut i = 0;
    loop {
        let a_ends = i > 0 && is_lms(is_s, a + i);
        let b_ends = i > 0 && is_lms(is_s, b + i);
        if a_ends && b_ends {
            return true;
        }
        if a_ends != b_ends || text[a + i] != text[b + i] {
            return false;
        }
        i += 1;
    }
}
