use serde::{Deserialize, Serialize};

/// Stop codon in three-letter notation
pub const TERMINATOR_THREE_LETTER: &str = "Ter";

/// Stop codon in symbol notation
pub const TERMINATOR_SYMBOL: &str = "*";

/// A protein substitution decomposed from an HGVS descriptor such as
/// `NP_000079.2:p.(G197C)`.
///
/// Residue tokens are kept exactly as written. One-letter and three-letter
/// codes are not normalized, so `Gly` and `G` are different tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProteinVariantDescriptor {
    /// The full descriptor as supplied
    pub accession: String,

    /// Residue before the change (`G`, `Gly`, `Ter`, `*`, ...)
    pub ancestral_residue: String,

    /// 1-based codon position
    pub position: u32,

    /// Residue after the change
    pub derived_residue: String,
}

impl ProteinVariantDescriptor {
    /// Whether ancestral and derived tokens are literally identical
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.ancestral_residue == self.derived_residue
    }
}

/// Whether a residue token denotes a stop codon (`Ter` or `*`)
#[must_use]
pub fn is_terminator(token: &str) -> bool {
    token == TERMINATOR_THREE_LETTER || token == TERMINATOR_SYMBOL
}

/// Whether a residue token denotes the initiator methionine (`Met` or `M`)
#[must_use]
pub fn is_initiator(token: &str) -> bool {
    token == "Met" || token == "M"
}
