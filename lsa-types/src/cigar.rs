use std::fmt;

/// Note that insertions are when `b` has more characters than `a`, and
/// deletions are when `b` has less characters than `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CigarOp {
    Match,
    Sub,
    /// A character of `b` against a gap.
    Ins,
    /// A character of `a` against a gap.
    Del,
}

impl CigarOp {
    pub fn to_char(self) -> char {
        match self {
            CigarOp::Match => '=',
            CigarOp::Sub => 'X',
            CigarOp::Ins => 'I',
            CigarOp::Del => 'D',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CigarElem {
    pub op: CigarOp,
    pub cnt: usize,
}

/// Run-length encoded alignment operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Cigar {
    /// Append `op`, merging it into the last element when equal.
    pub fn push(&mut self, op: CigarOp) {
        if let Some(last) = self.ops.last_mut() {
            if last.op == op {
                last.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { op, cnt: 1 });
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.ops {
            write!(f, "{}{}", elem.cnt, elem.op.to_char())?;
        }
        Ok(())
    }
}
