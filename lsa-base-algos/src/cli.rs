use crate::{Hirschberg, NW};
use clap::{Parser, ValueEnum};
use lsa_types::{Aligner, CostModel};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Needleman-Wunsch on the full table. Quadratic memory.
    Full,
    /// Hirschberg's divide & conquer. Linear memory.
    #[default]
    Hirschberg,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Full => "Needleman-Wunsch",
            Algorithm::Hirschberg => "Hirschberg",
        })
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
#[clap(next_help_heading = "Algorithm")]
pub struct AlgorithmArgs {
    /// The alignment algorithm to run.
    #[clap(short, long, value_enum, default_value_t)]
    pub algorithm: Algorithm,
}

impl AlgorithmArgs {
    /// Build a type-erased aligner object from parameters.
    pub fn make_aligner(&self, cm: CostModel) -> Box<dyn Aligner> {
        match self.algorithm {
            Algorithm::Full => Box::new(NW::new(cm)),
            Algorithm::Hirschberg => Box::new(Hirschberg::new(cm)),
        }
    }
}
