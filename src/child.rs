// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Child table over the LCP table, enabling constant-time descent from an
//! lcp-interval to its child intervals.
//!
//! Each rank stores three explicit optional links:
//! - `up`: first ℓ-index of the interval ending just before this rank,
//! - `down`: first ℓ-index of the interval starting at this rank,
//! - `next`: the following ℓ-index with the same LCP value.
//!
//! Both construction passes are single left-to-right sweeps with a monotonic
//! stack of ranks, so there is no recursion and each rank is pushed and
//! popped at most once. A virtual final rank with LCP 0 flushes the stack so
//! intervals extending to the last rank still receive their `down` links.

/// One rank's links. `None` means "no such link".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildCell {
    pub up: Option<u32>,
    pub down: Option<u32>,
    pub next: Option<u32>,
}

/// The child table: one [`ChildCell`] per suffix-table rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildTable {
    cells: Vec<ChildCell>,
}

impl ChildTable {
    /// Builds the table from a complete LCP table (`lcptab[0] == 0`).
    pub fn build(lcptab: &[u32]) -> Self {
        let n1 = lcptab.len();
        let mut cells = vec![ChildCell::default(); n1];

        // The virtual rank n1 carries LCP 0 and closes every open interval.
        let lcp_at = |i: usize| if i < n1 { lcptab[i] } else { 0 };

        // Pass 1: up and down links. Popping a run of ranks with larger LCP
        // closes their intervals; the last popped rank is the first ℓ-index
        // of the deepest closed interval.
        let mut stack: Vec<usize> = vec![0];
        for i in 1..=n1 {
            let mut last: Option<usize> = None;
            while let Some(&top) = stack.last() {
                if lcp_at(top) <= lcp_at(i) {
                    break;
                }
                stack.pop();
                last = Some(top);
                if let Some(&below) = stack.last() {
                    if lcp_at(i) <= lcp_at(below) && lcp_at(below) != lcp_at(top) {
                        cells[below].down = Some(top as u32);
                    }
                }
            }
            if i < n1 {
                if let Some(last) = last {
                    cells[i].up = Some(last as u32);
                }
                stack.push(i);
            }
        }

        // Pass 2: next links chain together equal-LCP ℓ-indices of the same
        // interval.
        let mut stack: Vec<usize> = vec![0];
        for i in 1..n1 {
            while let Some(&top) = stack.last() {
                if lcptab[top] <= lcptab[i] {
                    break;
                }
                stack.pop();
            }
            if let Some(&top) = stack.last() {
                if lcptab[top] == lcptab[i] {
                    stack.pop();
                    cells[top].next = Some(i as u32);
                }
            }
            stack.push(i);
        }

        ChildTable { cells }
    }

    /// Reassembles a table from deserialized cells. The caller validates the
    /// link ranges beforehand.
    pub(crate) fn from_cells(cells: Vec<ChildCell>) -> Self {
        ChildTable { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[ChildCell] {
        &self.cells
    }

    #[inline]
    pub fn up(&self, i: usize) -> Option<usize> {
        self.cells[i].up.map(|v| v as usize)
    }

    #[inline]
    pub fn down(&self, i: usize) -> Option<usize> {
        self.cells[i].down.map(|v| v as usize)
    }

    #[inline]
    pub fn next(&self, i: usize) -> Option<usize> {
        self.cells[i].next.map(|v| v as usize)
    }

    /// First ℓ-index of the non-singleton interval `[lo, hi]`.
    ///
    /// The root interval is the only one containing rank 0 (the sentinel has
    /// LCP 0 with everything), and its first ℓ-index is `next(0)`. Other
    /// intervals read `up(hi + 1)` when it lands inside the interval and fall
    /// back to `down(lo)`.
    pub fn first_l_index(&self, lo: usize, hi: usize) -> Option<usize> {
        if lo == 0 {
            return self.next(0);
        }
        if hi + 1 < self.cells.len() {
            if let Some(u) = self.up(hi + 1) {
                if lo < u && u <= hi {
                    return Some(u);
                }
            }
        }
        match self.down(lo) {
            Some(d) if lo < d && d <= hi => Some(d),
            _ => None,
        }
    }

    /// Length of the prefix shared by every suffix in `[lo, hi]`, read from
    /// the table without scanning the interval.
    pub fn interval_lcp(&self, lcptab: &[u32], lo: usize, hi: usize) -> u32 {
        match self.first_l_index(lo, hi) {
            Some(q) => lcptab[q],
            None => 0,
        }
    }

    /// Decomposes `[lo, hi]` into its child intervals, in rank order. At most
    /// one child per alphabet symbol (plus the sentinel at the root).
    pub fn child_intervals(&self, lo: usize, hi: usize) -> Vec<(usize, usize)> {
        let mut children = Vec::new();
        let Some(mut q) = self.first_l_index(lo, hi) else {
            return children;
        };
        if q > lo {
            children.push((lo, q - 1));
        }
        while let Some(r) = self.next(q) {
            if r > hi {
                break;
            }
            children.push((q, r - 1));
            q = r;
        }
        children.push((q, hi));
        children
    }
}
