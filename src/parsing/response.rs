use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key holding the predicted protein consequence in a VariantValidator record
pub const PROTEIN_CONSEQUENCE_KEY: &str = "hgvs_predicted_protein_consequence";

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Invalid JSON in service response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Service response must be a JSON object")]
    NotAnObject,

    #[error("No variant record with '{PROTEIN_CONSEQUENCE_KEY}' found in service response")]
    MissingConsequence,

    #[error("Protein consequence has no '{0}' representation")]
    MissingRepresentation(ProteinRepresentation),
}

/// Which protein representation to take from the predicted consequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ProteinRepresentation {
    /// Single-letter amino acid codes, e.g. `p.(G197C)`
    #[default]
    Slr,
    /// Three-letter amino acid codes, e.g. `p.(Gly197Cys)`
    Tlr,
}

impl ProteinRepresentation {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Slr => "slr",
            Self::Tlr => "tlr",
        }
    }
}

impl std::fmt::Display for ProteinRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Extract the protein descriptor from a VariantValidator response body.
///
/// The response maps each submitted description to a record; bookkeeping
/// entries such as `flag` or `metadata` sit alongside. The first record that
/// carries a predicted protein consequence is used.
///
/// # Errors
///
/// Returns `ResponseError::Json` if the body is not JSON, `NotAnObject` if the
/// top level is not an object, `MissingConsequence` if no record carries a
/// protein consequence, or `MissingRepresentation` if the requested form is
/// absent or empty.
pub fn extract_protein_descriptor(
    body: &str,
    representation: ProteinRepresentation,
) -> Result<String, ResponseError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let records = value.as_object().ok_or(ResponseError::NotAnObject)?;

    let consequence = records
        .values()
        .filter_map(|record| record.get(PROTEIN_CONSEQUENCE_KEY))
        .find(|c| c.is_object())
        .ok_or(ResponseError::MissingConsequence)?;

    consequence
        .get(representation.key())
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(ResponseError::MissingRepresentation(representation))
}
