use std::path::Path;

const KNOWN_IMPACTS: [&str; 3] = ["high", "medium", "low"];

fn main() {
    let catalog_path = Path::new("catalogs/so_terms.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let terms = catalog.get("terms").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'terms' field\n\
             The catalog must have a top-level 'terms' array.\n"
        );
    });

    let entries = terms.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'terms' must be an array\n\
             Got: {terms}\n"
        );
    });

    let mut seen = std::collections::HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        let term = validate_term_fields(entry, i);
        assert!(
            seen.insert(term.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate term '{term}' (index {i})\n"
        );
    }

    println!("cargo:warning=Validated catalog: {} terms", entries.len());
}

fn validate_term_fields<'a>(entry: &'a serde_json::Value, index: usize) -> &'a str {
    let term = entry
        .get("term")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Entry at index {index} missing 'term' field\n");
        });

    for field in ["description", "display_name"] {
        assert!(
            entry.get(field).and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Term '{term}' (index {index}) missing '{field}' field\n"
        );
    }

    let accession = entry
        .get("so_accession")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Term '{term}' (index {index}) missing 'so_accession' field\n"
            );
        });
    assert!(
        is_valid_so_accession(accession),
        "\n\nCATALOG BUILD ERROR: Term '{term}' has malformed accession '{accession}'\n\
         Accessions must look like SO:0001583 (seven digits).\n"
    );

    let impact = entry.get("impact").and_then(|v| v.as_str()).unwrap_or("");
    assert!(
        KNOWN_IMPACTS.contains(&impact),
        "\n\nCATALOG BUILD ERROR: Term '{term}' has unknown impact '{impact}'\n\
         Expected one of: {KNOWN_IMPACTS:?}\n"
    );

    term
}

fn is_valid_so_accession(s: &str) -> bool {
    s.strip_prefix("SO:")
        .is_some_and(|digits| digits.len() == 7 && digits.chars().all(|c| c.is_ascii_digit()))
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/so_terms.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
