//! The linear gap cost model: one gap penalty and a substitution table over `ACGT`.
//!
//! The table is indexed as `sub[p][q]`, where `p` is a symbol of the first
//! sequence and `q` a symbol of the second. It is not assumed to be symmetric.
use crate::{Cost, Error, Result, Seq};
use serde::{Deserialize, Serialize};

/// The supported symbols, in table order.
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// Marks a gap in an aligned sequence.
pub const GAP: u8 = b'_';

const NOT_IN_ALPHABET: u8 = u8::MAX;

const fn build_index() -> [u8; 256] {
    let mut index = [NOT_IN_ALPHABET; 256];
    let mut k = 0;
    while k < ALPHABET.len() {
        index[ALPHABET[k] as usize] = k as u8;
        k += 1;
    }
    index
}

/// Row/column of each byte in the substitution table.
const INDEX: [u8; 256] = build_index();

/// Gap penalty of the standard model.
pub const STANDARD_GAP: Cost = 30;

/// Substitution costs of the standard model, rows and columns in `ACGT` order.
pub const STANDARD_SUB: [[Cost; 4]; 4] = [
    [0, 110, 48, 94],
    [110, 0, 118, 48],
    [48, 118, 0, 110],
    [94, 48, 110, 0],
];

/// Returns the position of `c` in [`ALPHABET`].
pub fn symbol_index(c: u8) -> Result<usize> {
    match INDEX[c as usize] {
        NOT_IN_ALPHABET => Err(Error::InvalidSymbol(c)),
        k => Ok(k as usize),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCostModel")]
pub struct CostModel {
    /// Cost of aligning one symbol against a gap.
    gap: Cost,
    /// `sub[p][q]`: cost of aligning `p` from `a` against `q` from `b`.
    sub: [[Cost; 4]; 4],
}

/// Unvalidated form of [`CostModel`], as read from a config file.
#[derive(Deserialize)]
struct RawCostModel {
    gap: Cost,
    sub: [[Cost; 4]; 4],
}

impl TryFrom<RawCostModel> for CostModel {
    type Error = Error;

    fn try_from(raw: RawCostModel) -> Result<Self> {
        CostModel::new(raw.gap, raw.sub)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl CostModel {
    /// Build a cost model from a gap penalty and a substitution table.
    ///
    /// Fails when aligning a symbol against itself has non-zero cost.
    pub fn new(gap: Cost, sub: [[Cost; 4]; 4]) -> Result<Self> {
        for (k, row) in sub.iter().enumerate() {
            if row[k] != 0 {
                return Err(Error::InvalidCostModel(format!(
                    "cost({0}, {0}) must be 0 but is {1}",
                    ALPHABET[k] as char, row[k]
                )));
            }
        }
        Ok(Self { gap, sub })
    }

    /// Gap penalty 30; transitions (A/G, C/T) cost 48, transversions 94 to 118.
    pub fn standard() -> Self {
        Self {
            gap: STANDARD_GAP,
            sub: STANDARD_SUB,
        }
    }

    /// Every mismatch costs `sub`, every gap costs `gap`.
    pub fn linear(sub: Cost, gap: Cost) -> Self {
        let mut table = [[sub; 4]; 4];
        for (k, row) in table.iter_mut().enumerate() {
            row[k] = 0;
        }
        Self { gap, sub: table }
    }

    /// Edit distance.
    pub fn unit() -> Self {
        Self::linear(1, 1)
    }

    /// The cost of aligning one symbol against a gap.
    #[inline]
    pub fn gap(&self) -> Cost {
        self.gap
    }

    /// The cost of `n` consecutive gaps.
    #[inline]
    pub fn gaps(&self, n: usize) -> Cost {
        n as Cost * self.gap
    }

    /// The cost of aligning `p` (from `a`) against `q` (from `b`).
    pub fn cost(&self, p: u8, q: u8) -> Result<Cost> {
        Ok(self.sub[symbol_index(p)?][symbol_index(q)?])
    }

    /// Unchecked variant of [`CostModel::cost`] for inner loops.
    ///
    /// Panics when `p` or `q` is not in [`ALPHABET`]; inputs must have passed
    /// [`CostModel::validate`].
    #[inline]
    pub fn sub(&self, p: u8, q: u8) -> Cost {
        self.sub[INDEX[p as usize] as usize][INDEX[q as usize] as usize]
    }

    /// The substitution table, rows and columns in `ACGT` order.
    pub fn table(&self) -> &[[Cost; 4]; 4] {
        &self.sub
    }

    pub fn is_symmetric(&self) -> bool {
        (0..4).all(|p| (0..4).all(|q| self.sub[p][q] == self.sub[q][p]))
    }

    /// Fails with the first symbol of `seq` that is not in the alphabet.
    pub fn validate(&self, seq: Seq) -> Result<()> {
        match seq.iter().find(|&&c| INDEX[c as usize] == NOT_IN_ALPHABET) {
            Some(&c) => Err(Error::InvalidSymbol(c)),
            None => Ok(()),
        }
    }

    /// The largest cost of a single alignment column.
    pub fn max_cost(&self) -> Cost {
        self.sub.iter().flatten().copied().fold(self.gap, Cost::max)
    }

    /// Fails when an alignment of `columns` columns may cost more than [`Cost::MAX`].
    ///
    /// Every partial alignment of `a[..i]` and `b[..j]` has at most `i + j`
    /// columns, so checking `|a| + |b|` bounds every value in the table.
    pub fn check_len(&self, columns: usize) -> Result<()> {
        let max = self.max_cost();
        match (max as u128).checked_mul(columns as u128) {
            Some(total) if total <= Cost::MAX as u128 => Ok(()),
            _ => Err(Error::CostOverflow { max, columns }),
        }
    }

    /// Validate both inputs and check that aligning them cannot overflow.
    pub fn check(&self, a: Seq, b: Seq) -> Result<()> {
        self.validate(a)?;
        self.validate(b)?;
        self.check_len(a.len() + b.len())
    }
}
