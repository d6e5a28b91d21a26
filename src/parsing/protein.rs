use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::descriptor::ProteinVariantDescriptor;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed protein descriptor '{input}': {reason}")]
    MalformedDescriptor { input: String, reason: String },
}

impl ParseError {
    fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Whole-descriptor shape, e.g. `NP_000079.2:p.(G197C)`
fn descriptor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^NP_[0-9]+\.[0-9]+:p\.\((?:[A-Za-z]+|\*)[0-9]+(?:[A-Za-z]+|\*)\)$")
            .expect("descriptor pattern is valid")
    })
}

/// Substitution between the parentheses, e.g. `Gly197Cys` or `W26*`
fn substitution_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z]+|\*)([0-9]+)([A-Za-z]+|\*)$").expect("substitution pattern is valid")
    })
}

/// Parse an HGVS protein substitution descriptor.
///
/// The shape is checked first; the substitution inside the parentheses is then
/// split into ancestral residue, position and derived residue. The input is
/// matched as given, so surrounding whitespace makes it malformed.
///
/// # Errors
///
/// Returns `ParseError::MalformedDescriptor` if the input does not have the
/// `NP_<digits>.<digits>:p.(<residue><digits><residue>)` shape, if the
/// substitution cannot be split into three parts, or if the position is zero
/// or too large.
pub fn parse(accession: &str) -> Result<ProteinVariantDescriptor, ParseError> {
    if !descriptor_regex().is_match(accession) {
        return Err(ParseError::malformed(
            accession,
            "expected NP_<digits>.<digits>:p.(<residue><position><residue>)",
        ));
    }

    let substitution = accession
        .split(['(', ')'])
        .nth(1)
        .ok_or_else(|| ParseError::malformed(accession, "missing parenthesized substitution"))?;

    let captures = substitution_regex()
        .captures(substitution)
        .ok_or_else(|| ParseError::malformed(accession, "substitution could not be decomposed"))?;

    let (ancestral, digits, derived) = match (captures.get(1), captures.get(2), captures.get(3)) {
        (Some(a), Some(p), Some(d)) => (a.as_str(), p.as_str(), d.as_str()),
        _ => {
            return Err(ParseError::malformed(
                accession,
                "substitution could not be decomposed",
            ))
        }
    };

    let position: u32 = digits
        .parse()
        .map_err(|_| ParseError::malformed(accession, format!("position '{digits}' is out of range")))?;

    if position == 0 {
        return Err(ParseError::malformed(accession, "positions are 1-based"));
    }

    Ok(ProteinVariantDescriptor {
        accession: accession.to_string(),
        ancestral_residue: ancestral.to_string(),
        position,
        derived_residue: derived.to_string(),
    })
}
