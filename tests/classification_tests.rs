//! Classification behavior across the full parse → classify → lookup path.
//!
//! Descriptors are generated over a grid of residue tokens and positions so
//! each rule is exercised with both amino acid code spaces.

use so_classifier::classification::rules::reachable_terms;
use so_classifier::{
    parse, ClassificationEngine, ClassificationError, ParseError, SoTermId, TermCatalog,
};

const ONE_LETTER: &[&str] = &["A", "G", "C", "M", "W", "Q", "*"];
const THREE_LETTER: &[&str] = &["Ala", "Gly", "Cys", "Met", "Trp", "Gln", "Ter"];
const POSITIONS: &[u32] = &[1, 2, 26, 197, 1367];

fn descriptor(ancestral: &str, position: u32, derived: &str) -> String {
    format!("NP_000079.2:p.({ancestral}{position}{derived})")
}

fn is_terminator(token: &str) -> bool {
    token == "Ter" || token == "*"
}

/// Every (ancestral, position, derived) combination within and across code spaces
fn all_combinations() -> Vec<(&'static str, u32, &'static str)> {
    let tokens: Vec<&str> = ONE_LETTER.iter().chain(THREE_LETTER).copied().collect();
    let mut combos = Vec::new();
    for &a in &tokens {
        for &p in POSITIONS {
            for &d in &tokens {
                combos.push((a, p, d));
            }
        }
    }
    combos
}

fn classify(engine: &ClassificationEngine<'_>, a: &str, p: u32, d: &str) -> String {
    engine
        .classify_str(&descriptor(a, p, d))
        .unwrap()
        .so_term
        .as_str()
        .to_string()
}

#[test]
fn test_example_scenarios() {
    let catalog = TermCatalog::load_embedded().unwrap();
    let engine = ClassificationEngine::new(&catalog);

    let cases = [
        ("NP_000079.2:p.(G197C)", "G", 197, "C", "missense_variant"),
        ("NP_000079.2:p.(Gly197Cys)", "Gly", 197, "Cys", "missense_variant"),
        ("NP_000079.2:p.(W26*)", "W", 26, "*", "stop_gained"),
        ("NP_000079.2:p.(M1V)", "M", 1, "V", "start_lost"),
        ("NP_000079.2:p.(G197G)", "G", 197, "G", "synonymous_variant"),
    ];

    for (raw, ancestral, position, derived, term) in cases {
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.ancestral_residue, ancestral, "{raw}");
        assert_eq!(parsed.position, position, "{raw}");
        assert_eq!(parsed.derived_residue, derived, "{raw}");

        let result = engine.classify_str(raw).unwrap();
        assert_eq!(result.accession, raw);
        assert_eq!(result.so_term.as_str(), term, "{raw}");
    }

    let err = engine.classify_str("garbage-string").unwrap_err();
    assert!(matches!(
        err,
        ClassificationError::Parse(ParseError::MalformedDescriptor { .. })
    ));
}

#[test]
fn test_rule_properties_over_grid() {
    let catalog = TermCatalog::load_embedded().unwrap();
    let engine = ClassificationEngine::new(&catalog);

    for (a, p, d) in all_combinations() {
        let term = classify(&engine, a, p, d);
        let expected = if a == d {
            "synonymous_variant"
        } else if is_terminator(d) {
            "stop_gained"
        } else if is_terminator(a) {
            "stop_lost"
        } else if p == 1 && (a == "Met" || a == "M") {
            "start_lost"
        } else {
            "missense_variant"
        };
        assert_eq!(term, expected, "{}", descriptor(a, p, d));
    }
}

#[test]
fn test_parse_is_idempotent() {
    for (a, p, d) in all_combinations() {
        let raw = descriptor(a, p, d);
        let first = parse(&raw).unwrap();
        let second = parse(&first.accession).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_cross_notation_is_not_synonymous() {
    let catalog = TermCatalog::load_embedded().unwrap();
    let engine = ClassificationEngine::new(&catalog);

    assert_eq!(classify(&engine, "Gly", 197, "G"), "missense_variant");
    assert_eq!(classify(&engine, "G", 197, "Gly"), "missense_variant");
    assert_eq!(classify(&engine, "Ter", 412, "*"), "stop_gained");
}

#[test]
fn test_every_reachable_term_is_cataloged() {
    let catalog = TermCatalog::load_embedded().unwrap();

    for term in reachable_terms() {
        let entry = catalog.lookup(&SoTermId::new(term)).unwrap();
        assert!(entry.so_accession.starts_with("SO:"));
    }

    let engine = ClassificationEngine::new(&catalog);
    for (a, p, d) in all_combinations() {
        let result = engine.classify_str(&descriptor(a, p, d)).unwrap();
        let entry = catalog.lookup(&result.so_term).unwrap();
        assert_eq!(result.so_metadata.description(), entry.description);
        assert_eq!(result.so_metadata.so_accession(), entry.so_accession);
        assert_eq!(result.so_metadata.display_name(), entry.display_name);
    }
}

#[test]
fn test_malformed_never_reaches_classifier() {
    let catalog = TermCatalog::new();
    let engine = ClassificationEngine::new(&catalog);

    // An empty catalog would fail every lookup, so only parse errors can surface
    for raw in [
        "NP_000079.2:p.G197C",
        "NM_000088.3:c.589G>T",
        "NP_000079.2:p.(GxC)",
        "NP_000079.2:p.(G 197 C)",
        "NP_000079.2:p.()",
    ] {
        let err = engine.classify_str(raw).unwrap_err();
        assert!(
            matches!(err, ClassificationError::Parse(_)),
            "{raw} should fail parsing, got {err:?}"
        );
    }
}

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = TermCatalog::load_embedded().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["NP_1.1:p.(M1V)", "NP_1.1:p.(W26*)", "NP_1.1:p.(Ter5Q)"]
            .into_iter()
            .map(|raw| {
                let catalog = &catalog;
                scope.spawn(move || {
                    ClassificationEngine::new(catalog)
                        .classify_str(raw)
                        .unwrap()
                        .so_term
                })
            })
            .collect();

        let terms: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().to_string())
            .collect();
        assert_eq!(terms, ["start_lost", "stop_gained", "stop_lost"]);
    });
}
