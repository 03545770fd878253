use crate::stats::Measurement;
use lsa_types::{seq_to_string, AlignmentResult, Cigar};
use std::{fmt, path::Path};

/// The output file: cost, both aligned rows, time in ms and memory in KiB,
/// one per line, optionally followed by the CIGAR string.
#[derive(Clone, Debug)]
pub struct Report {
    pub result: AlignmentResult,
    pub measurement: Measurement,
    pub cigar: Option<Cigar>,
}

impl Report {
    pub fn new(result: AlignmentResult, measurement: Measurement, cigar: bool) -> Self {
        let cigar = cigar.then(|| result.alignment.cigar());
        Self {
            result,
            measurement,
            cigar,
        }
    }

    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.result.cost)?;
        writeln!(f, "{}", seq_to_string(&self.result.alignment.a))?;
        writeln!(f, "{}", seq_to_string(&self.result.alignment.b))?;
        writeln!(f, "{}", self.measurement.time_ms)?;
        writeln!(f, "{}", self.measurement.memory_kib)?;
        if let Some(cigar) = &self.cigar {
            writeln!(f, "{cigar}")?;
        }
        Ok(())
    }
}
