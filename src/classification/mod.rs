//! Rule-based classification of protein substitutions into SO terms.
//!
//! - [`ClassificationEngine`](engine::ClassificationEngine): parses, classifies and attaches metadata
//! - [`RULES`](rules::RULES): the ordered rule set
//!
//! ## Rules
//!
//! Rules are evaluated in order and the first match wins. With `A` the
//! ancestral token, `P` the position and `D` the derived token:
//!
//! 1. `A == D` → `synonymous_variant`
//! 2. `D` is `Ter` or `*` → `stop_gained`
//! 3. `A` is `Ter` or `*` → `stop_lost`
//! 4. `P == 1` and `A` is `Met` or `M` → `start_lost`
//! 5. otherwise → `missense_variant`
//!
//! Tokens are compared literally: `Gly` → `G` is a missense variant.
//!
//! ## Example
//!
//! ```rust
//! use so_classifier::{ClassificationEngine, TermCatalog};
//!
//! let catalog = TermCatalog::load_embedded().unwrap();
//! let engine = ClassificationEngine::new(&catalog);
//!
//! let result = engine.classify_str("NP_000079.2:p.(W26*)").unwrap();
//! assert_eq!(result.so_term.as_str(), "stop_gained");
//! assert_eq!(result.so_metadata.display_name(), "Stop gained");
//! ```

pub mod engine;
pub mod rules;
