use anyhow::Context;
use clap::Parser;
use lsa_base_algos::cli::AlgorithmArgs;
use lsa_types::CostModel;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, about)]
pub struct Cli {
    /// File with the two base sequences and their insertion indices.
    pub input: PathBuf,

    /// Where to write the report.
    pub output: PathBuf,

    #[clap(flatten)]
    pub algorithm: AlgorithmArgs,

    /// JSON file with a cost model `{"gap": .., "sub": [[..]; 4]}` in ACGT order.
    ///
    /// Defaults to gap cost 30 and the standard substitution table.
    #[clap(long, value_name = "FILE")]
    pub cost_model: Option<PathBuf>,

    /// Append the CIGAR string of the alignment as a sixth line.
    #[clap(long)]
    pub cigar: bool,
}

impl Cli {
    pub fn cost_model(&self) -> anyhow::Result<CostModel> {
        let Some(path) = &self.cost_model else {
            return Ok(CostModel::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading cost model {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parsing cost model {}", path.display()))
    }
}
