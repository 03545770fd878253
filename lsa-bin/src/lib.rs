//! Library behind the `lsa` binary: read an input file, generate both
//! sequences, align them and write the report.
pub mod cli;
pub mod input;
pub mod report;
pub mod stats;

use anyhow::Context;
use cli::Cli;
use input::Input;
use log::info;
use report::Report;
use stats::measure;

/// Run the full pipeline for `cli` and write the report to `cli.output`.
pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let cm = cli.cost_model()?;
    let input = Input::read(&cli.input)
        .with_context(|| format!("reading input {}", cli.input.display()))?;
    let (a, b) = input
        .generate()
        .with_context(|| format!("generating sequences from {}", cli.input.display()))?;
    info!("Generated sequences of length {} and {}", a.len(), b.len());

    let aligner = cli.algorithm.make_aligner(cm);
    info!("Aligning with {}", cli.algorithm.algorithm);
    let (result, measurement) = measure(|| aligner.align(&a, &b));
    let result = result.context("aligning sequences")?;
    info!(
        "Cost {} in {:.3} ms using {} KiB",
        result.cost, measurement.time_ms, measurement.memory_kib
    );

    let report = Report::new(result, measurement, cli.cigar);
    report
        .write(&cli.output)
        .with_context(|| format!("writing output {}", cli.output.display()))?;
    Ok(report)
}
