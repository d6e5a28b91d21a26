//! End-to-end tests of the so-classifier binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn so_classifier() -> Command {
    Command::cargo_bin("so-classifier").unwrap()
}

#[test]
fn test_classify_text_output() {
    so_classifier()
        .args(["classify", "NP_000079.2:p.(G197C)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missense_variant"))
        .stdout(predicate::str::contains("SO:0001583"))
        .stdout(predicate::str::contains("Missense variant"));
}

#[test]
fn test_classify_json_output() {
    let output = so_classifier()
        .args(["--format", "json", "classify", "NP_000079.2:p.(W26*)"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["accession"], "NP_000079.2:p.(W26*)");
    assert_eq!(json["so_term"], "stop_gained");
    assert_eq!(
        json["so_metadata"],
        serde_json::json!([
            "A sequence variant whereby at least one base of a codon is changed, resulting in a premature stop codon, leading to a shortened transcript",
            "SO:0001587",
            "Stop gained"
        ])
    );
}

#[test]
fn test_classify_multiple_json_is_array() {
    let output = so_classifier()
        .args([
            "classify",
            "NP_000079.2:p.(M1V)",
            "NP_000079.2:p.(G197G)",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let terms: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["so_term"].as_str().unwrap())
        .collect();
    assert_eq!(terms, ["start_lost", "synonymous_variant"]);
}

#[test]
fn test_classify_stdin_tsv() {
    so_classifier()
        .args(["--format", "tsv", "classify", "-"])
        .write_stdin("NP_000079.2:p.(Gly197Cys)\n\nNP_000079.2:p.(Ter1367Gln)\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "accession\tso_term\tso_accession\tdisplay_name\tdescription",
        ))
        .stdout(predicate::str::contains(
            "NP_000079.2:p.(Gly197Cys)\tmissense_variant\tSO:0001583",
        ))
        .stdout(predicate::str::contains(
            "NP_000079.2:p.(Ter1367Gln)\tstop_lost\tSO:0001578",
        ));
}

#[test]
fn test_classify_malformed_fails() {
    so_classifier()
        .args(["classify", "garbage-string"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed protein descriptor"))
        .stderr(predicate::str::contains("1 of 1 descriptor(s) could not be classified"));
}

#[test]
fn test_classify_partial_failure_still_prints_successes() {
    so_classifier()
        .args(["classify", "NP_000079.2:p.(M1V)", "NP_000079.2:p.G197C"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("start_lost"))
        .stderr(predicate::str::contains("1 of 2 descriptor(s)"));
}

#[test]
fn test_classify_with_custom_catalog_missing_term() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "version": "1.0.0",
            "created_at": "2024-01-01T00:00:00Z",
            "terms": [{
                "term": "missense_variant",
                "description": "custom definition",
                "so_accession": "SO:0001583",
                "display_name": "Custom missense",
                "impact": "medium"
            }]
        }"#,
    )
    .unwrap();

    so_classifier()
        .arg("classify")
        .arg("--catalog")
        .arg(&path)
        .arg("NP_000079.2:p.(G197C)")
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom missense"));

    so_classifier()
        .arg("classify")
        .arg("--catalog")
        .arg(&path)
        .arg("NP_000079.2:p.(W26*)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown Sequence Ontology term: 'stop_gained'"));
}

#[test]
fn test_catalog_list() {
    so_classifier()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 terms"))
        .stdout(predicate::str::contains("frameshift_variant"))
        .stdout(predicate::str::contains("SO:0002012"));
}

#[test]
fn test_catalog_show_unknown_term() {
    so_classifier()
        .args(["catalog", "show", "intron_variant"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("intron_variant"));
}

#[test]
fn test_catalog_export_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exported.json");

    so_classifier()
        .args(["catalog", "export"])
        .arg(&path)
        .assert()
        .success();

    so_classifier()
        .args(["--format", "json", "catalog", "show", "stop_lost", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"so_accession\": \"SO:0001578\""))
        .stdout(predicate::str::contains("\"impact\": \"high\""));
}

#[test]
fn test_fetch_rejects_non_transcript_variant() {
    so_classifier()
        .args([
            "fetch",
            "--genome-build",
            "GRCh38",
            "--variant",
            "NP_000079.2:p.(G197C)",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variant type not supported."));
}

#[test]
fn test_fetch_prompt_ends_without_valid_build() {
    so_classifier()
        .args(["fetch", "--variant", "NM_000088.3:c.589G>T"])
        .write_stdin("c\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Genome build not supported."))
        .stderr(predicate::str::contains("Input ended"));
}
