use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::classification::engine::ClassificationEngine;
use crate::cli::output::print_results;
use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct ClassifyArgs {
    /// HGVS protein descriptors, e.g. 'NP_000079.2:p.(G197C)'
    /// Use '-' to read one descriptor per line from stdin
    #[arg(required = true, num_args = 1..)]
    pub descriptors: Vec<String>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute classify subcommand
///
/// Every descriptor is attempted; failures are reported on stderr and the
/// command fails if any descriptor could not be classified.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, stdin cannot be read,
/// or any descriptor fails to classify.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let engine = ClassificationEngine::new(&catalog);

    let inputs = collect_inputs(&args.descriptors)?;
    debug!(count = inputs.len(), "Classifying descriptors");

    let mut results = Vec::with_capacity(inputs.len());
    let mut failures = 0usize;
    for (input, outcome) in inputs.iter().zip(engine.classify_batch(&inputs)) {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {input}: {e}");
            }
        }
    }

    if !results.is_empty() {
        print_results(&results, format)?;
    }

    if failures > 0 {
        anyhow::bail!(
            "{failures} of {} descriptor(s) could not be classified",
            inputs.len()
        );
    }

    Ok(())
}

/// Expand '-' into the non-blank lines of stdin
fn collect_inputs(descriptors: &[String]) -> anyhow::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for descriptor in descriptors {
        if descriptor == "-" {
            for line in io::stdin().lock().lines() {
                let line = line?;
                let line = line.trim();
                if !line.is_empty() {
                    inputs.push(line.to_string());
                }
            }
        } else {
            inputs.push(descriptor.clone());
        }
    }
    Ok(inputs)
}
