use crate::core::descriptor::{is_initiator, is_terminator, ProteinVariantDescriptor};

pub const SYNONYMOUS_VARIANT: &str = "synonymous_variant";
pub const STOP_GAINED: &str = "stop_gained";
pub const STOP_LOST: &str = "stop_lost";
pub const START_LOST: &str = "start_lost";
pub const MISSENSE_VARIANT: &str = "missense_variant";
pub const FRAMESHIFT_VARIANT: &str = "frameshift_variant";

/// A single classification rule: a predicate and the term it selects
pub struct Rule {
    pub term: &'static str,
    pub matches: fn(&ProteinVariantDescriptor) -> bool,
}

/// Classification rules in evaluation order; the first match wins.
///
/// Equality comes first so `Ter`→`Ter` is synonymous rather than a stop
/// event. Start loss only applies to the initiator at position 1 once the
/// variant is known not to be a stop event.
pub const RULES: &[Rule] = &[
    Rule {
        term: SYNONYMOUS_VARIANT,
        matches: ProteinVariantDescriptor::is_unchanged,
    },
    Rule {
        term: STOP_GAINED,
        matches: |d| is_terminator(&d.derived_residue),
    },
    Rule {
        term: STOP_LOST,
        matches: |d| is_terminator(&d.ancestral_residue),
    },
    Rule {
        term: START_LOST,
        matches: |d| d.position == 1 && is_initiator(&d.ancestral_residue),
    },
    Rule {
        term: MISSENSE_VARIANT,
        matches: |_| true,
    },
];

/// Select the term of the first matching rule, if any
#[must_use]
pub fn first_match<'r>(
    rules: &'r [Rule],
    descriptor: &ProteinVariantDescriptor,
) -> Option<&'r Rule> {
    rules.iter().find(|rule| (rule.matches)(descriptor))
}

/// Terms the default rule set can produce
pub fn reachable_terms() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.term)
}
