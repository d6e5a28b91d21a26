use crate::cli::OutputFormat;
use crate::core::result::ClassificationResult;

/// Print classification results in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_results(results: &[ClassificationResult], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_results(results),
        OutputFormat::Json => print_json_results(results)?,
        OutputFormat::Tsv => print_tsv_results(results),
    }
    Ok(())
}

fn print_text_results(results: &[ClassificationResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n{}", result.accession);
        println!("   SO term: {}", result.so_term);
        println!("   Name: {}", result.so_metadata.display_name());
        println!("   Accession: {}", result.so_metadata.so_accession());
        println!("   Description: {}", result.so_metadata.description());
    }

    println!();
}

/// A single result prints as an object, several as an array
fn print_json_results(results: &[ClassificationResult]) -> anyhow::Result<()> {
    let json = match results {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(results)?,
    };
    println!("{json}");
    Ok(())
}

fn print_tsv_results(results: &[ClassificationResult]) {
    println!("accession\tso_term\tso_accession\tdisplay_name\tdescription");
    for result in results {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            result.accession,
            result.so_term,
            result.so_metadata.so_accession(),
            result.so_metadata.display_name(),
            result.so_metadata.description(),
        );
    }
}
