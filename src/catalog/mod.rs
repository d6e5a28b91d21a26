//! Sequence Ontology term catalog.
//!
//! The catalog maps consequence terms to their description, SO accession,
//! display name and impact. A default catalog is compiled into the binary,
//! but custom catalogs can also be loaded from JSON files.
//!
//! ## Embedded Catalog
//!
//! | Term                 | Accession  | Impact |
//! |----------------------|------------|--------|
//! | `frameshift_variant` | SO:0001589 | High   |
//! | `stop_gained`        | SO:0001587 | High   |
//! | `stop_lost`          | SO:0001578 | High   |
//! | `start_lost`         | SO:0002012 | High   |
//! | `synonymous_variant` | SO:0001819 | Low    |
//! | `missense_variant`   | SO:0001583 | Medium |
//!
//! `frameshift_variant` is never selected by the classifier; substitution
//! notation cannot describe a frameshift.
//!
//! ## Example
//!
//! ```rust,no_run
//! use so_classifier::TermCatalog;
//! use so_classifier::core::types::SoTermId;
//!
//! let catalog = TermCatalog::load_embedded().unwrap();
//!
//! for entry in catalog.iter() {
//!     println!("{} ({})", entry.term, entry.so_accession);
//! }
//!
//! let missense = catalog.lookup(&SoTermId::new("missense_variant")).unwrap();
//! ```

pub mod store;
