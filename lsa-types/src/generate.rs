//! Build long inputs from a short base sequence by repeated self-insertion.
//!
//! Each insertion index `i` replaces the current string `s` by
//! `s[..=i] + s + s[i+1..]`, doubling its length.
use crate::{Error, Result, Seq, Sequence};

/// A base sequence together with the insertion indices that expand it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipe {
    pub base: Sequence,
    pub indices: Vec<usize>,
}

impl Recipe {
    pub fn new(base: Seq, indices: Vec<usize>) -> Self {
        Self {
            base: base.to_vec(),
            indices,
        }
    }

    /// Length of the expanded sequence: `|base| * 2^#indices`, or `None` when
    /// that does not fit in a `usize`.
    pub fn expanded_len(&self) -> Option<usize> {
        let shift = u32::try_from(self.indices.len()).ok()?;
        1usize.checked_shl(shift)?.checked_mul(self.base.len())
    }

    pub fn expand(&self) -> Result<Sequence> {
        expand(&self.base, &self.indices)
    }
}

/// Insert a copy of the current string directly after position `i`, for each
/// `i` in `indices` in order.
///
/// Fails with [`Error::InvalidInsertionIndex`] when an index is not a position
/// of the string at the time it is applied.
pub fn expand(base: Seq, indices: &[usize]) -> Result<Sequence> {
    let mut s = base.to_vec();
    for &i in indices {
        if i >= s.len() {
            return Err(Error::InvalidInsertionIndex {
                index: i,
                len: s.len(),
            });
        }
        let mut next = Vec::with_capacity(2 * s.len());
        next.extend_from_slice(&s[..=i]);
        next.extend_from_slice(&s);
        next.extend_from_slice(&s[i + 1..]);
        s = next;
    }
    Ok(s)
}
