//! Hirschberg's divide & conquer: an optimal alignment in linear memory.
//!
//! For `mid = |a|/2`, the forward profile of `a[..mid]` and the backward
//! profile of `a[mid..]` give, for every column `j`, the cost of the best path
//! through `(mid, j)`. The smallest column attaining the minimum lies on an
//! optimal path, so both halves can be aligned independently.
use crate::{row, NW};
use log::{debug, trace};
use lsa_types::*;
use std::iter::zip;

#[derive(Clone, Debug, Default)]
pub struct Hirschberg {
    /// Aligns the base cases where one side has at most one character.
    nw: NW,
}

impl Hirschberg {
    pub fn new(cm: CostModel) -> Self {
        Self { nw: NW::new(cm) }
    }

    /// The column where the top-level call splits `b`, and the cost of the
    /// best path through `(|a|/2, column)`.
    ///
    /// Returns `None` when `|a| < 2` or `|b| < 2`, which are aligned directly.
    pub fn split(&self, a: Seq, b: Seq) -> Result<Option<(usize, Cost)>> {
        self.nw.cm.check(a, b)?;
        if a.len() < 2 || b.len() < 2 {
            return Ok(None);
        }
        Ok(Some(self.split_unchecked(a, b)))
    }

    fn split_unchecked(&self, a: Seq, b: Seq) -> (usize, Cost) {
        let cm = &self.nw.cm;
        let mid = a.len() / 2;
        let left = row::forward_unchecked(cm, &a[..mid], b);
        let right = row::backward_unchecked(cm, &a[mid..], b);
        // First minimum, for a deterministic split.
        let mut best = (0, left[0] + right[0]);
        for (j, (l, r)) in zip(&left, &right).enumerate().skip(1) {
            if l + r < best.1 {
                best = (j, l + r);
            }
        }
        best
    }

    /// Appends an optimal alignment of `a` and `b` to `out`, and returns its cost.
    fn align_into(&self, a: Seq, b: Seq, out: &mut Alignment) -> Cost {
        let cm = &self.nw.cm;
        match (a.len(), b.len()) {
            (0, _) => {
                for &cb in b {
                    out.push(GAP, cb);
                }
                cm.gaps(b.len())
            }
            (_, 0) => {
                for &ca in a {
                    out.push(ca, GAP);
                }
                cm.gaps(a.len())
            }
            (1, _) | (_, 1) => {
                let AlignmentResult { cost, alignment } = self.nw.align_unchecked(a, b);
                out.append(alignment);
                cost
            }
            _ => {
                let mid = a.len() / 2;
                let (j, cost) = self.split_unchecked(a, b);
                trace!("split {}x{} at ({mid}, {j}) cost {cost}", a.len(), b.len());
                let left = self.align_into(&a[..mid], &b[..j], out);
                let right = self.align_into(&a[mid..], &b[j..], out);
                debug_assert_eq!(left + right, cost);
                cost
            }
        }
    }
}

impl Aligner for Hirschberg {
    fn cost_model(&self) -> &CostModel {
        &self.nw.cm
    }

    fn cost(&self, a: Seq, b: Seq) -> Result<Cost> {
        self.nw.cost(a, b)
    }

    fn align(&self, a: Seq, b: Seq) -> Result<AlignmentResult> {
        self.nw.cm.check(a, b)?;
        let mut alignment = Alignment::with_capacity(a.len() + b.len());
        let cost = self.align_into(a, b, &mut alignment);
        debug!(
            "Hirschberg aligned {}x{} with cost {}",
            a.len(),
            b.len(),
            cost
        );
        Ok(AlignmentResult { cost, alignment })
    }
}
