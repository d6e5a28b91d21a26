use serde::{Deserialize, Serialize};

use crate::core::term::SoMetadata;
use crate::core::types::SoTermId;

/// Outcome of classifying one protein descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Echo of the classified descriptor
    pub accession: String,

    /// Selected Sequence Ontology term
    pub so_term: SoTermId,

    /// Description, SO accession and display name of `so_term`
    pub so_metadata: SoMetadata,
}
