use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::SoTermId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all terms in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific term
    Show {
        /// Term key (e.g., "missense_variant")
        #[arg(required = true)]
        term: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a term is unknown, or
/// the export cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { term, catalog } => run_show(&term, catalog, format, verbose),
        CatalogCommands::Export { output, catalog } => run_export(&output, catalog, verbose),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    match format {
        OutputFormat::Text => {
            let term_width = catalog
                .iter()
                .map(|t| t.term.as_str().len())
                .max()
                .unwrap_or(4)
                .max(4);
            let name_width = catalog
                .iter()
                .map(|t| t.display_name.len())
                .max()
                .unwrap_or(4)
                .max(4);

            let total_width = term_width + name_width + 10 + 6 + 3;

            println!("Sequence Ontology Catalog ({} terms)\n", catalog.len());
            println!(
                "{:<term_w$} {:<name_w$} {:<10} {:<6}",
                "Term",
                "Name",
                "Accession",
                "Impact",
                term_w = term_width,
                name_w = name_width,
            );
            println!("{}", "-".repeat(total_width));

            for t in catalog.iter() {
                println!(
                    "{:<term_w$} {:<name_w$} {:<10} {:<6}",
                    t.term.as_str(),
                    t.display_name,
                    t.so_accession,
                    t.impact.to_string(),
                    term_w = term_width,
                    name_w = name_width,
                );
                if verbose {
                    println!("  └─ {}", t.description);
                }
            }
        }
        OutputFormat::Json => {
            let terms: Vec<_> = catalog.iter().collect();
            println!("{}", serde_json::to_string_pretty(&terms)?);
        }
        OutputFormat::Tsv => {
            println!("term\tso_accession\tdisplay_name\timpact\tdescription");
            for t in catalog.iter() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    t.term, t.so_accession, t.display_name, t.impact, t.description
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    term: &str,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;
    let entry = catalog.lookup(&SoTermId::new(term))?;

    match format {
        OutputFormat::Text => {
            println!("{}", entry.display_name);
            println!("{}", "=".repeat(60));
            println!("Term: {}", entry.term);
            println!("Accession: {}", entry.so_accession);
            println!("Impact: {}", entry.impact);
            println!("\n{}", entry.description);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        OutputFormat::Tsv => {
            println!("term\tso_accession\tdisplay_name\timpact\tdescription");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                entry.term, entry.so_accession, entry.display_name, entry.impact, entry.description
            );
        }
    }

    Ok(())
}

fn run_export(output: &Path, catalog_path: Option<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;
    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    eprintln!("Exported {} terms to {}", catalog.len(), output.display());

    Ok(())
}
