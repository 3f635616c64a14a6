use std::path::Path;

fn main() {
    let catalog_path = Path::new("references/pathogens.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nREFERENCE CATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the reference catalog before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nREFERENCE CATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nREFERENCE CATALOG BUILD ERROR: Invalid JSON\n\
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
        "\n\nREFERENCE CATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    assert!(
        catalog.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nREFERENCE CATALOG BUILD ERROR: Missing 'version' string\n"
    );

    let references = catalog.get("references").unwrap_or_else(|| {
        panic!(
            "\n\nREFERENCE CATALOG BUILD ERROR: Missing 'references' field\n\
             The catalog must have a top-level 'references' array.\n"
        );
    });

    let refs = references.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nREFERENCE CATALOG BUILD ERROR: 'references' must be an array\n\
             Got: {references}\n"
        );
    });

    // The first reference is the fallback for unknown pathogens
    assert!(
        !refs.is_empty(),
        "\n\nREFERENCE CATALOG BUILD ERROR: 'references' must not be empty\n"
    );

    for (i, reference) in refs.iter().enumerate() {
        validate_reference_fields(reference, i);
    }

    println!(
        "cargo:warning=Validated reference catalog: {} references",
        refs.len()
    );
}

fn validate_reference_fields(reference: &serde_json::Value, index: usize) {
    let name = reference
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!(
                "\n\nREFERENCE CATALOG BUILD ERROR: Reference at index {index} missing 'name' string\n"
            )
        });

    assert!(
        !name.trim().is_empty(),
        "\n\nREFERENCE CATALOG BUILD ERROR: Reference at index {index} has an empty name\n"
    );

    let sequence = reference
        .get("sequence")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!(
                "\n\nREFERENCE CATALOG BUILD ERROR: Reference '{name}' (index {index}) missing 'sequence' string\n"
            )
        });

    assert!(
        sequence.chars().any(|c| !c.is_whitespace()),
        "\n\nREFERENCE CATALOG BUILD ERROR: Reference '{name}' has an empty sequence\n\
         Sequences must contain at least one base.\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=references/pathogens.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
