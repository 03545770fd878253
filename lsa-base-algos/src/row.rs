//! Single rows of the Needleman-Wunsch table, in memory linear in `|b|`.
//!
//! Row `i` of the table holds, for each `j`, the cost of aligning `a[..i]`
//! against `b[..j]`. Only two rows are kept: the previous one and the one
//! being computed.
//!
//! The *forward* profile of `(a, b)` is the last row: `row[j]` is the cost of
//! aligning all of `a` against `b[..j]`.
//! The *backward* profile is the last row of the table on the reversed
//! sequences, indexed in original coordinates: `row[j]` is the cost of aligning
//! all of `a` against `b[j..]`.
use itertools::izip;
use lsa_types::{Cost, CostModel, Result, Seq};
use std::cmp::min;

/// One row of the table, of length `|b| + 1`.
pub type Row = Vec<Cost>;

/// Row 0: `b[..j]` against `j` gaps.
pub(crate) fn first_row(cm: &CostModel, n: usize) -> Row {
    (0..=n).map(|j| cm.gaps(j)).collect()
}

/// Computes row `i` from row `i-1`.
/// `ca` is the `i-1`th character of sequence `a`.
pub(crate) fn next_row(cm: &CostModel, i: usize, ca: u8, b: Seq, prev: &[Cost], next: &mut [Cost]) {
    let gap = cm.gap();
    next[0] = cm.gaps(i);
    for (j0, &cb, &diag, &up) in izip!(0.., b, prev, &prev[1..]) {
        // Change from 0 to 1 based indexing.
        let j = j0 + 1;
        next[j] = min(diag + cm.sub(ca, cb), min(up + gap, next[j - 1] + gap));
    }
}

pub(crate) fn forward_unchecked(cm: &CostModel, a: Seq, b: Seq) -> Row {
    let mut prev = vec![0; b.len() + 1];
    let mut next = first_row(cm, b.len());
    for (i0, &ca) in a.iter().enumerate() {
        std::mem::swap(&mut prev, &mut next);
        next_row(cm, i0 + 1, ca, b, &prev, &mut next);
    }
    next
}

/// The same recurrence as [`forward_unchecked`] on `rev(a)` and `rev(b)`, with
/// `j` running from right to left so that no reversed copies are needed.
pub(crate) fn backward_unchecked(cm: &CostModel, a: Seq, b: Seq) -> Row {
    let n = b.len();
    let gap = cm.gap();
    let mut prev = vec![0; n + 1];
    let mut next: Row = (0..=n).map(|j| cm.gaps(n - j)).collect();
    for (i0, &ca) in a.iter().rev().enumerate() {
        std::mem::swap(&mut prev, &mut next);
        next[n] = cm.gaps(i0 + 1);
        for j in (0..n).rev() {
            next[j] = min(
                prev[j + 1] + cm.sub(ca, b[j]),
                min(prev[j] + gap, next[j + 1] + gap),
            );
        }
    }
    next
}

/// The forward profile: `row[j]` is the optimal cost of aligning `a` against `b[..j]`.
pub fn forward(cm: &CostModel, a: Seq, b: Seq) -> Result<Row> {
    cm.check(a, b)?;
    Ok(forward_unchecked(cm, a, b))
}

/// The backward profile: `row[j]` is the optimal cost of aligning `a` against `b[j..]`.
pub fn backward(cm: &CostModel, a: Seq, b: Seq) -> Result<Row> {
    cm.check(a, b)?;
    Ok(backward_unchecked(cm, a, b))
}
