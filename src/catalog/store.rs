use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::term::{is_valid_so_accession, SequenceOntologyTerm};
use crate::core::types::{Impact, SoTermId};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unknown Sequence Ontology term: '{0}'")]
    UnknownTerm(SoTermId),

    #[error("Term '{term}' has malformed SO accession '{accession}'")]
    InvalidAccession { term: SoTermId, accession: String },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub terms: Vec<SequenceOntologyTerm>,
}

/// Sequence Ontology term catalog keyed by term.
///
/// Built once and then shared by reference; nothing mutates it during
/// classification.
#[derive(Debug, Clone)]
pub struct TermCatalog {
    terms: HashMap<SoTermId, SequenceOntologyTerm>,
}

impl TermCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            terms: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the embedded JSON is invalid.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/so_terms.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or the
    /// errors of [`TermCatalog::from_json`].
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON, or
    /// `CatalogError::InvalidAccession` if an entry's accession is not `SO:NNNNNNN`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for term in data.terms {
            catalog.insert(term)?;
        }

        Ok(catalog)
    }

    /// Register a term, overwriting any existing entry with the same key
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidAccession` if `so_accession` is not
    /// `SO:NNNNNNN`; the catalog is left unchanged.
    pub fn register(
        &mut self,
        term: impl Into<String>,
        description: impl Into<String>,
        so_accession: impl Into<String>,
        display_name: impl Into<String>,
        impact: Impact,
    ) -> Result<(), CatalogError> {
        self.insert(SequenceOntologyTerm::new(
            term,
            description,
            so_accession,
            display_name,
            impact,
        ))
    }

    /// Insert a fully built entry, overwriting any existing entry with the same key
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidAccession` if the entry's accession is not
    /// `SO:NNNNNNN`.
    pub fn insert(&mut self, entry: SequenceOntologyTerm) -> Result<(), CatalogError> {
        if !is_valid_so_accession(&entry.so_accession) {
            return Err(CatalogError::InvalidAccession {
                term: entry.term,
                accession: entry.so_accession,
            });
        }
        self.terms.insert(entry.term.clone(), entry);
        Ok(())
    }

    /// Look up a term
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownTerm` if the term is not registered.
    pub fn lookup(&self, term: &SoTermId) -> Result<&SequenceOntologyTerm, CatalogError> {
        self.terms
            .get(term)
            .ok_or_else(|| CatalogError::UnknownTerm(term.clone()))
    }

    /// Whether a term is registered
    pub fn contains(&self, term: &SoTermId) -> bool {
        self.terms.contains_key(term)
    }

    /// All entries, sorted by term for stable display
    pub fn iter(&self) -> impl Iterator<Item = &SequenceOntologyTerm> {
        let mut entries: Vec<_> = self.terms.values().collect();
        entries.sort_by(|a, b| a.term.cmp(&b.term));
        entries.into_iter()
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            terms: self.iter().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of terms in catalog
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for TermCatalog {
    fn default() -> Self {
        Self::new()
    }
}
