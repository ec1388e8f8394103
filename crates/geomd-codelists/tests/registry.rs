//! Registry construction tests: the external CSV resource and the
//! inlined table must produce the same number tables.

use std::io::Write;

use geomd_codelists::{build_registry, coded_values::CODED_VALUES};

#[test]
fn inlined_and_csv_resource_agree() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Codelist,Standard code,Vendor code").unwrap();
    let mut last = "";
    for &(list, num, std) in CODED_VALUES {
        // carry-forward layout: repeat the codelist cell only when it changes,
        // and use the resource's own key for the character-set list
        let cell = if list == last {
            ""
        } else {
            last = list;
            if list == "MD_CharacterSetCode" {
                "MD_CharSetCd"
            } else {
                list
            }
        };
        writeln!(file, "{cell},{std},{num}").unwrap();
    }
    file.flush().unwrap();

    let from_csv = build_registry(Some(file.path()));
    let inlined = build_registry(None);

    assert_eq!(from_csv.resolution_table(), inlined.resolution_table());
}

#[test]
fn missing_resource_falls_back_silently() {
    let registry = build_registry(Some(std::path::Path::new(
        "/nonexistent/coded_values.csv",
    )));
    assert_eq!(registry.resolve("005", "MD_RestrictionCode"), "Licence");
}

#[test]
fn resolution_table_covers_every_numeric_code() {
    let registry = build_registry(None);
    let rows = registry.resolution_table();
    // every inlined row plus the ten content-type codes
    assert_eq!(rows.len(), CODED_VALUES.len() + 10);
    assert!(
        rows.iter()
            .any(|(list, code, label)| list == "MD_ScopeCode" && code == "5" && label == "Dataset")
    );
}

#[test]
fn zero_padded_and_bare_numeric_forms_agree() {
    let registry = build_registry(None);
    assert_eq!(
        registry.resolve("5", "MD_ScopeCode"),
        registry.resolve("005", "MD_ScopeCode")
    );
}
