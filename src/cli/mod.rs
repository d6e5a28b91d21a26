//! Command-line interface for so-classifier.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Classify one or more HGVS protein descriptors
//! - **fetch**: Resolve a transcript variant through VariantValidator, then classify it
//! - **catalog**: List, show, or export Sequence Ontology terms
//!
//! ## Usage
//!
//! ```text
//! # Classify a protein descriptor
//! so-classifier classify 'NP_000079.2:p.(G197C)'
//!
//! # One descriptor per line from stdin
//! cut -f1 variants.tsv | so-classifier classify -
//!
//! # JSON output for scripting
//! so-classifier --format json classify 'NP_000079.2:p.(W26*)'
//!
//! # Resolve a transcript variant first (prompts for missing values)
//! so-classifier fetch --genome-build GRCh38 --variant 'NM_000088.3:c.589G>T'
//!
//! # Inspect the term catalog
//! so-classifier catalog show stop_gained
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::store::TermCatalog;

pub mod catalog;
pub mod classify;
pub mod fetch;
pub mod output;

#[derive(Parser)]
#[command(name = "so-classifier")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Classify HGVS protein variants into Sequence Ontology consequence terms")]
#[command(
    long_about = "so-classifier assigns a Sequence Ontology consequence term to an HGVS protein substitution such as NP_000079.2:p.(G197C).\n\nSupported terms:\n- synonymous_variant\n- stop_gained\n- stop_lost\n- start_lost\n- missense_variant"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify HGVS protein descriptors
    Classify(classify::ClassifyArgs),

    /// Fetch a protein descriptor from VariantValidator and classify it
    Fetch(fetch::FetchArgs),

    /// Inspect the Sequence Ontology term catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog if a path is given, otherwise the embedded one
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<TermCatalog> {
    let catalog = if let Some(path) = path {
        TermCatalog::load_from_file(path)?
    } else {
        TermCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} terms", catalog.len());
    }

    Ok(catalog)
}
