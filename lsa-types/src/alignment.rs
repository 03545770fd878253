//! A global alignment stored as two equal-length rows over `ACGT` and [`GAP`].
use crate::{Cigar, CigarOp, Cost, CostModel, Error, Pos, Result, Seq, Sequence, GAP};
use std::iter::zip;

/// Two aligned sequences of equal length.
///
/// Removing the gaps from `a` and `b` gives back the original sequences, and
/// no column has a gap on both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    pub a: Sequence,
    pub b: Sequence,
}

impl Alignment {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            a: Vec::with_capacity(capacity),
            b: Vec::with_capacity(capacity),
        }
    }

    /// `a` against gaps only.
    pub fn only_a(a: Seq) -> Self {
        Self {
            a: a.to_vec(),
            b: vec![GAP; a.len()],
        }
    }

    /// Gaps only against `b`.
    pub fn only_b(b: Seq) -> Self {
        Self {
            a: vec![GAP; b.len()],
            b: b.to_vec(),
        }
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Append one column.
    #[inline]
    pub fn push(&mut self, ca: u8, cb: u8) {
        debug_assert!(ca != GAP || cb != GAP, "Column with two gaps");
        self.a.push(ca);
        self.b.push(cb);
    }

    /// Append all columns of `other`.
    pub fn append(&mut self, mut other: Alignment) {
        self.a.append(&mut other.a);
        self.b.append(&mut other.b);
    }

    pub fn reverse(&mut self) {
        self.a.reverse();
        self.b.reverse();
    }

    /// Recompute the cost of the alignment column by column: the gap penalty
    /// when either side is a gap, and the substitution cost otherwise.
    pub fn cost(&self, cm: &CostModel) -> Result<Cost> {
        let mut cost: Cost = 0;
        for (&ca, &cb) in zip(&self.a, &self.b) {
            let column = if ca == GAP || cb == GAP {
                cm.gap()
            } else {
                cm.cost(ca, cb)?
            };
            cost = cost.checked_add(column).ok_or(Error::CostOverflow {
                max: cm.max_cost(),
                columns: self.len(),
            })?;
        }
        Ok(cost)
    }

    /// Check that this is a valid alignment of `a` and `b`, and return its cost.
    pub fn verify(&self, cm: &CostModel, a: Seq, b: Seq) -> Result<Cost> {
        if self.a.len() != self.b.len() {
            return Err(Error::InvalidAlignment(format!(
                "rows have lengths {} and {}",
                self.a.len(),
                self.b.len()
            )));
        }
        if let Some(col) = zip(&self.a, &self.b).position(|(&ca, &cb)| ca == GAP && cb == GAP) {
            return Err(Error::InvalidAlignment(format!(
                "column {col} has a gap on both sides"
            )));
        }
        let stripped = |row: &Sequence| row.iter().copied().filter(|&c| c != GAP).collect::<Vec<_>>();
        if stripped(&self.a) != a {
            return Err(Error::InvalidAlignment(
                "first row does not spell the first sequence".into(),
            ));
        }
        if stripped(&self.b) != b {
            return Err(Error::InvalidAlignment(
                "second row does not spell the second sequence".into(),
            ));
        }
        self.cost(cm)
    }

    /// The cells visited by the alignment, from `Pos(0, 0)` to `Pos(|a|, |b|)`.
    pub fn path(&self) -> Vec<Pos> {
        let mut pos = Pos(0, 0);
        let mut path = Vec::with_capacity(self.len() + 1);
        path.push(pos);
        for (&ca, &cb) in zip(&self.a, &self.b) {
            if ca != GAP {
                pos.0 += 1;
            }
            if cb != GAP {
                pos.1 += 1;
            }
            path.push(pos);
        }
        path
    }

    pub fn cigar(&self) -> Cigar {
        let mut cigar = Cigar::default();
        for (&ca, &cb) in zip(&self.a, &self.b) {
            cigar.push(match (ca, cb) {
                (GAP, _) => CigarOp::Ins,
                (_, GAP) => CigarOp::Del,
                (ca, cb) if ca == cb => CigarOp::Match,
                _ => CigarOp::Sub,
            });
        }
        cigar
    }
}
