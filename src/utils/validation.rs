//! Input validation for values supplied by the user.
//!
//! Values missing from the command line are requested interactively, over
//! and over, until one passes validation.

use std::io::{BufRead, Write};

use crate::core::types::GenomeBuild;

/// Marker every supported transcript descriptor must contain
pub const TRANSCRIPT_MARKER: &str = "NM_";

pub const GENOME_BUILD_PROMPT: &str = "Please select genome build: (a) GRCh37 or (b) GRCh38 ";
pub const TRANSCRIPT_PROMPT: &str = "Please input a RefSeq transcript variant descriptor: ";

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Genome build not supported.")]
    UnsupportedGenomeBuild,
    #[error("Variant type not supported.")]
    UnsupportedVariantType,
    #[error("Input ended before a valid value was entered")]
    InputClosed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate a genome build selection (`a`, `b`, `GRCh37` or `GRCh38`).
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedGenomeBuild` for anything else.
pub fn validate_genome_build(input: &str) -> Result<GenomeBuild, ValidationError> {
    GenomeBuild::from_input(input).ok_or(ValidationError::UnsupportedGenomeBuild)
}

/// Validate a RefSeq transcript variant descriptor.
///
/// # Examples
///
/// ```
/// use so_classifier::utils::validation::validate_transcript_variant;
///
/// assert!(validate_transcript_variant("NM_000088.3:c.589G>T").is_ok());
/// assert!(validate_transcript_variant("NC_000017.10:g.48275363C>A").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedVariantType` if the descriptor does not
/// contain `NM_`.
pub fn validate_transcript_variant(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.contains(TRANSCRIPT_MARKER) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::UnsupportedVariantType)
    }
}

/// Prompt repeatedly until `validate` accepts a line.
///
/// Each rejected line prints the validation error and the prompt again.
///
/// # Errors
///
/// Returns `ValidationError::InputClosed` if input ends first, or
/// `ValidationError::Io` on read or write failure.
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    validate: F,
) -> Result<T, ValidationError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ValidationError::InputClosed);
        }

        match validate(line.trim()) {
            Ok(value) => return Ok(value),
            Err(ValidationError::Io(e)) => return Err(ValidationError::Io(e)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Ask for a genome build until a supported one is entered
///
/// # Errors
///
/// See [`prompt_until`].
pub fn prompt_genome_build<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<GenomeBuild, ValidationError> {
    prompt_until(input, output, GENOME_BUILD_PROMPT, validate_genome_build)
}

/// Ask for a transcript variant until a supported one is entered
///
/// # Errors
///
/// See [`prompt_until`].
pub fn prompt_transcript_variant<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, ValidationError> {
    prompt_until(input, output, TRANSCRIPT_PROMPT, validate_transcript_variant)
}
