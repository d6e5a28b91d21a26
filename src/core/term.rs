use serde::{Deserialize, Serialize};

use crate::core::types::{Impact, SoTermId};

/// A Sequence Ontology consequence term as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceOntologyTerm {
    /// Catalog key (e.g. `missense_variant`)
    pub term: SoTermId,

    /// Free-text definition of the term
    pub description: String,

    /// Sequence Ontology accession (`SO:NNNNNNN`)
    pub so_accession: String,

    /// Human-readable display name
    pub display_name: String,

    /// Predicted impact, kept in the catalog but never reported in results
    pub impact: Impact,
}

impl SequenceOntologyTerm {
    pub fn new(
        term: impl Into<String>,
        description: impl Into<String>,
        so_accession: impl Into<String>,
        display_name: impl Into<String>,
        impact: Impact,
    ) -> Self {
        Self {
            term: SoTermId::new(term),
            description: description.into(),
            so_accession: so_accession.into(),
            display_name: display_name.into(),
            impact,
        }
    }

    /// The reportable part of the term: description, accession and display name
    #[must_use]
    pub fn metadata(&self) -> SoMetadata {
        SoMetadata(
            self.description.clone(),
            self.so_accession.clone(),
            self.display_name.clone(),
        )
    }
}

/// Ordered (description, SO accession, display name) triple.
///
/// Serializes as a three-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoMetadata(pub String, pub String, pub String);

impl SoMetadata {
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn so_accession(&self) -> &str {
        &self.1
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.2
    }
}

/// Check that an accession has the `SO:` prefix followed by exactly seven digits.
///
/// # Examples
///
/// ```
/// use so_classifier::core::term::is_valid_so_accession;
///
/// assert!(is_valid_so_accession("SO:0001583"));
/// assert!(!is_valid_so_accession("SO:00015872"));
/// assert!(!is_valid_so_accession("0001583"));
/// ```
#[must_use]
pub fn is_valid_so_accession(s: &str) -> bool {
    s.strip_prefix("SO:")
        .is_some_and(|digits| digits.len() == 7 && digits.chars().all(|c| c.is_ascii_digit()))
}
