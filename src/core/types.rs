use serde::{Deserialize, Serialize};

/// Key of a Sequence Ontology term in the catalog (e.g. `missense_variant`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoTermId(pub String);

impl SoTermId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SoTermId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Predicted impact of a consequence term (Ensembl VEP style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Genome build accepted by the VariantValidator service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenomeBuild {
    Grch37,
    Grch38,
}

impl GenomeBuild {
    /// Parse a genome build from user input.
    ///
    /// Accepts the menu letters `a` (`GRCh37`) and `b` (`GRCh38`) as well as
    /// the build names themselves, case-insensitively.
    #[must_use]
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "grch37" => Some(Self::Grch37),
            "b" | "grch38" => Some(Self::Grch38),
            _ => None,
        }
    }
}

impl std::fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grch37 => write!(f, "GRCh37"),
            Self::Grch38 => write!(f, "GRCh38"),
        }
    }
}

impl std::str::FromStr for GenomeBuild {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s).ok_or_else(|| format!("Genome build not supported: '{s}'"))
    }
}
