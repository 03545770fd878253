//! Types shared by the aligners, the test harness and the binary.

mod alignment;
mod cigar;
mod cost_model;
mod error;
pub mod generate;

// Re-export types for convenience of `use lsa_types::*;`.
pub use alignment::*;
pub use cigar::*;
pub use cost_model::*;
pub use error::*;

/// Type for storing costs.
pub type Cost = u32;

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

/// A position `(i, j)` in the alignment table: `i` characters of `a` and `j`
/// characters of `b` have been consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub usize, pub usize);

pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

/// The cost and one optimal alignment of two sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlignmentResult {
    pub cost: Cost,
    pub alignment: Alignment,
}

/// An aligner finds the minimal cost of a global alignment of `a` and `b`
/// under its cost model, and optionally one alignment attaining it.
///
/// Inputs are validated against the alphabet before any work is done, so an
/// `Err` never comes with a partial result.
pub trait Aligner: std::fmt::Debug {
    /// Returns the cost model used by the aligner.
    fn cost_model(&self) -> &CostModel;

    /// Finds the cost of aligning `a` and `b`, using memory linear in `|b|`.
    fn cost(&self, a: Seq, b: Seq) -> Result<Cost>;

    /// Finds the cost and one optimal alignment of `a` and `b`.
    fn align(&self, a: Seq, b: Seq) -> Result<AlignmentResult>;
}
