//! # so-classifier
//!
//! A library for assigning Sequence Ontology consequence terms to HGVS protein
//! substitutions.
//!
//! Given a predicted protein consequence such as `NP_000079.2:p.(G197C)`,
//! `so-classifier` decides whether the change is synonymous, missense,
//! stop-gained, stop-lost or start-lost, and reports the term together with
//! its SO accession, display name and definition.
//!
//! ## Features
//!
//! - **Strict notation parsing**: Validates `NP_` protein substitutions before classifying
//! - **One- and three-letter codes**: `p.(G197C)` and `p.(Gly197Cys)` are both accepted
//! - **Ordered rules**: A fixed rule order resolves overlapping cases deterministically
//! - **Embedded catalog**: Term metadata compiled into the binary, overridable from JSON
//! - **VariantValidator lookup**: Resolve a transcript variant to its protein consequence
//!
//! ## Example
//!
//! ```rust
//! use so_classifier::{ClassificationEngine, TermCatalog};
//!
//! // Load the embedded catalog of Sequence Ontology terms
//! let catalog = TermCatalog::load_embedded().unwrap();
//!
//! let engine = ClassificationEngine::new(&catalog);
//! let result = engine.classify_str("NP_000079.2:p.(M1V)").unwrap();
//!
//! assert_eq!(result.so_term.as_str(), "start_lost");
//! assert_eq!(result.so_metadata.so_accession(), "SO:0002012");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Sequence Ontology term catalog
//! - [`classification`]: Classification rules and engine
//! - [`core`]: Core data types for terms, descriptors and results
//! - [`parsing`]: Parsers for protein descriptors and service responses
//! - [`service`]: VariantValidator REST client
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod classification;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod service;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, TermCatalog};
pub use classification::engine::{classify, ClassificationEngine, ClassificationError};
pub use core::descriptor::ProteinVariantDescriptor;
pub use core::result::ClassificationResult;
pub use core::term::{SequenceOntologyTerm, SoMetadata};
pub use core::types::*;
pub use parsing::protein::{parse, ParseError};
