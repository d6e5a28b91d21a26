//! Core data types for protein consequence classification.
//!
//! - [`SequenceOntologyTerm`](term::SequenceOntologyTerm): a catalog entry with its metadata
//! - [`ProteinVariantDescriptor`](descriptor::ProteinVariantDescriptor): a parsed protein substitution
//! - [`ClassificationResult`](result::ClassificationResult): the term selected for a descriptor
//! - [`SoTermId`](types::SoTermId), [`Impact`](types::Impact), [`GenomeBuild`](types::GenomeBuild)
//!
//! ## Residue Tokens
//!
//! Both amino acid code spaces are accepted and compared as written:
//!
//! | Residue    | One-letter | Three-letter |
//! |------------|------------|--------------|
//! | Glycine    | G          | Gly          |
//! | Methionine | M          | Met          |
//! | Stop       | *          | Ter          |

pub mod descriptor;
pub mod result;
pub mod term;
pub mod types;
