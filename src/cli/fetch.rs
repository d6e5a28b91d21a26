use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use tracing::debug;

use crate::classification::engine::ClassificationEngine;
use crate::cli::output::print_results;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::GenomeBuild;
use crate::parsing::response::ProteinRepresentation;
use crate::service::client::{FetchConfig, VariantValidatorClient, DEFAULT_BASE_URL};
use crate::utils::validation::{
    prompt_genome_build, prompt_transcript_variant, validate_transcript_variant,
};

#[derive(Args)]
pub struct FetchArgs {
    /// Genome build: GRCh37 (a) or GRCh38 (b). Prompted for if omitted
    #[arg(short, long)]
    pub genome_build: Option<GenomeBuild>,

    /// RefSeq transcript variant, e.g. 'NM_000088.3:c.589G>T'. Prompted for if omitted
    #[arg(long)]
    pub variant: Option<String>,

    /// Protein representation to classify
    #[arg(long, value_enum, default_value = "slr")]
    pub representation: ProteinRepresentation,

    /// VariantValidator endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "60")]
    pub timeout: u64,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute fetch subcommand
///
/// # Errors
///
/// Returns an error if input acquisition fails, the service request fails,
/// or the returned descriptor cannot be classified.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FetchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (build, variant) = acquire_inputs(&args)?;

    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;

    let config = FetchConfig {
        base_url: args.base_url.clone(),
        timeout: Duration::from_secs(args.timeout),
        representation: args.representation,
    };
    let client = VariantValidatorClient::new(config)?;

    if verbose {
        eprintln!("Requesting {variant} ({build}) from {}", args.base_url);
    }

    let rt = tokio::runtime::Runtime::new()?;
    let descriptor = rt.block_on(client.fetch_protein_descriptor(build, &variant))?;
    debug!(descriptor = %descriptor, "Classifying fetched descriptor");

    let engine = ClassificationEngine::new(&catalog);
    let result = engine.classify_str(&descriptor)?;

    print_results(&[result], format)
}

/// Take build and variant from the arguments, prompting for whatever is missing
fn acquire_inputs(args: &FetchArgs) -> anyhow::Result<(GenomeBuild, String)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();

    let build = match args.genome_build {
        Some(build) => build,
        None => prompt_genome_build(&mut input, &mut output)?,
    };

    let variant = match &args.variant {
        Some(variant) => validate_transcript_variant(variant)?,
        None => prompt_transcript_variant(&mut input, &mut output)?,
    };

    Ok((build, variant))
}
