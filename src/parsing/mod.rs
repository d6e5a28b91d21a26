//! Parsers for protein variant descriptors and service responses.
//!
//! - **HGVS protein substitutions**: [`protein::parse`] validates and decomposes
//!   descriptors such as `NP_000079.2:p.(G197C)`
//! - **VariantValidator responses**: [`response::extract_protein_descriptor`]
//!   pulls the predicted protein consequence out of a service response
//!
//! ## Example
//!
//! ```rust
//! use so_classifier::parsing::protein::parse;
//!
//! let descriptor = parse("NP_000079.2:p.(Gly197Cys)").unwrap();
//! assert_eq!(descriptor.ancestral_residue, "Gly");
//! assert_eq!(descriptor.position, 197);
//! assert_eq!(descriptor.derived_residue, "Cys");
//! ```
//!
//! ## Accepted Shape
//!
//! | Part       | Pattern                 | Example       |
//! |------------|-------------------------|---------------|
//! | Accession  | `NP_<digits>.<digits>`  | `NP_000079.2` |
//! | Type       | `:p.`                   | `:p.`         |
//! | Ancestral  | letters or `*`          | `G`, `Gly`    |
//! | Position   | digits (1-based)        | `197`         |
//! | Derived    | letters or `*`          | `C`, `Ter`    |
//!
//! The substitution must be wrapped in parentheses (predicted consequence).

pub mod protein;
pub mod response;
