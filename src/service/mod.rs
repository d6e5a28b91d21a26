//! Client for the VariantValidator REST service.
//!
//! Resolves a RefSeq transcript variant (e.g. `NM_000088.3:c.589G>T`) to its
//! predicted protein consequence, which can then be classified.
//!
//! ```text
//! GET {base_url}/{genome_build}/{variant}/all?content-type=application%2Fjson
//! ```
//!
//! Requests are made once; failures are reported, never retried.

pub mod client;
