use crate::row::{self, Row};
use log::debug;
use lsa_types::*;

/// Needleman-Wunsch aligner.
///
/// `align` fills the full `(|a|+1) x (|b|+1)` table and traces back one optimal
/// alignment; `cost` only keeps two rows.
#[derive(Clone, Debug, Default)]
pub struct NW {
    /// The cost model to use.
    pub cm: CostModel,
}

impl NW {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }

    /// The full table: `table[i][j]` is the cost of aligning `a[..i]` against `b[..j]`.
    pub fn table(&self, a: Seq, b: Seq) -> Result<Vec<Row>> {
        self.cm.check(a, b)?;
        Ok(self.fill(a, b))
    }

    fn fill(&self, a: Seq, b: Seq) -> Vec<Row> {
        let mut rows = Vec::with_capacity(a.len() + 1);
        rows.push(row::first_row(&self.cm, b.len()));
        for (i0, &ca) in a.iter().enumerate() {
            // Change from 0-based to 1-based indexing.
            let i = i0 + 1;
            let mut next = vec![0; b.len() + 1];
            row::next_row(&self.cm, i, ca, b, &rows[i - 1], &mut next);
            rows.push(next);
        }
        rows
    }

    /// Trace back from `(|a|, |b|)` to `(0, 0)`.
    ///
    /// Ties are broken in a fixed order: a (mis)match, then a character of `a`
    /// against a gap, then a gap against a character of `b`.
    fn track_path(&self, rows: &[Row], a: Seq, b: Seq) -> Alignment {
        let gap = self.cm.gap();
        let mut alignment = Alignment::with_capacity(a.len() + b.len());
        let mut i = a.len();
        let mut j = b.len();
        while i > 0 && j > 0 {
            let d = rows[i][j];
            if d == rows[i - 1][j - 1] + self.cm.sub(a[i - 1], b[j - 1]) {
                alignment.push(a[i - 1], b[j - 1]);
                i -= 1;
                j -= 1;
            } else if d == rows[i - 1][j] + gap {
                alignment.push(a[i - 1], GAP);
                i -= 1;
            } else {
                debug_assert_eq!(d, rows[i][j - 1] + gap, "No trace from ({i}, {j})");
                alignment.push(GAP, b[j - 1]);
                j -= 1;
            }
        }
        while i > 0 {
            alignment.push(a[i - 1], GAP);
            i -= 1;
        }
        while j > 0 {
            alignment.push(GAP, b[j - 1]);
            j -= 1;
        }
        alignment.reverse();
        alignment
    }

    /// `align` on inputs that were already validated.
    pub(crate) fn align_unchecked(&self, a: Seq, b: Seq) -> AlignmentResult {
        let rows = self.fill(a, b);
        let cost = rows[a.len()][b.len()];
        let alignment = self.track_path(&rows, a, b);
        AlignmentResult { cost, alignment }
    }
}

impl Aligner for NW {
    fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    /// The cost-only version uses linear memory.
    fn cost(&self, a: Seq, b: Seq) -> Result<Cost> {
        Ok(row::forward(&self.cm, a, b)?[b.len()])
    }

    fn align(&self, a: Seq, b: Seq) -> Result<AlignmentResult> {
        self.cm.check(a, b)?;
        let result = self.align_unchecked(a, b);
        debug!(
            "NW aligned {}x{} with cost {}",
            a.len(),
            b.len(),
            result.cost
        );
        Ok(result)
    }
}
