use thiserror::Error;

use crate::catalog::store::{CatalogError, TermCatalog};
use crate::classification::rules::{first_match, Rule, RULES};
use crate::core::descriptor::ProteinVariantDescriptor;
use crate::core::result::ClassificationResult;
use crate::core::types::SoTermId;
use crate::parsing::protein::{self, ParseError};

#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Variant type not recognised: '{0}'")]
    UnrecognizedVariant(String),
}

/// Select the Sequence Ontology term for a parsed descriptor using the
/// default rule set.
///
/// # Errors
///
/// Returns `ClassificationError::UnrecognizedVariant` if no rule matches.
pub fn classify(descriptor: &ProteinVariantDescriptor) -> Result<SoTermId, ClassificationError> {
    classify_with(RULES, descriptor)
}

fn classify_with(
    rules: &[Rule],
    descriptor: &ProteinVariantDescriptor,
) -> Result<SoTermId, ClassificationError> {
    first_match(rules, descriptor)
        .map(|rule| SoTermId::new(rule.term))
        .ok_or_else(|| ClassificationError::UnrecognizedVariant(descriptor.accession.clone()))
}

/// Classifies protein descriptors and attaches catalog metadata
pub struct ClassificationEngine<'a> {
    catalog: &'a TermCatalog,
    rules: &'a [Rule],
}

impl<'a> ClassificationEngine<'a> {
    /// Create an engine using the default rule set
    pub fn new(catalog: &'a TermCatalog) -> Self {
        Self {
            catalog,
            rules: RULES,
        }
    }

    /// Replace the rule set
    #[must_use]
    pub fn with_rules(mut self, rules: &'a [Rule]) -> Self {
        self.rules = rules;
        self
    }

    /// Classify an already parsed descriptor
    ///
    /// # Errors
    ///
    /// Returns `ClassificationError::UnrecognizedVariant` if no rule matches, or
    /// `ClassificationError::Catalog` if the selected term is not in the catalog.
    pub fn classify_descriptor(
        &self,
        descriptor: &ProteinVariantDescriptor,
    ) -> Result<ClassificationResult, ClassificationError> {
        let so_term = classify_with(self.rules, descriptor)?;
        let entry = self.catalog.lookup(&so_term)?;

        Ok(ClassificationResult {
            accession: descriptor.accession.clone(),
            so_term,
            so_metadata: entry.metadata(),
        })
    }

    /// Parse and classify a raw descriptor
    ///
    /// # Errors
    ///
    /// Returns `ClassificationError::Parse` for malformed input, otherwise the
    /// errors of [`ClassificationEngine::classify_descriptor`].
    pub fn classify_str(&self, raw: &str) -> Result<ClassificationResult, ClassificationError> {
        let descriptor = protein::parse(raw)?;
        self.classify_descriptor(&descriptor)
    }

    /// Classify many descriptors, one result per input in input order
    pub fn classify_batch<I, S>(&self, inputs: I) -> Vec<Result<ClassificationResult, ClassificationError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|raw| self.classify_str(raw.as_ref()))
            .collect()
    }
}
