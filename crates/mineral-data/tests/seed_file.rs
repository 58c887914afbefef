//! File-backed loading tests for the seed catalogue.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::io::Write;
use std::path::Path;

use mineral_data::{SeedCatalogue, SeedError};
use rstest::rstest;
use tempfile::NamedTempFile;

const SEED_JSON: &str = r#"[
    {
        "name": "Adamite",
        "image filename": "Adamite.jpg",
        "image caption": "Yellow-green adamite on limonite",
        "category": "Arsenate",
        "formula": "Zn<sub>2</sub>AsO<sub>4</sub>OH",
        "crystal system": "Orthorhombic",
        "streak": "White to pale green"
    }
]"#;

fn write_seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write seed file");
    file
}

#[test]
fn loads_catalogue_from_disk() {
    let file = write_seed_file(SEED_JSON);

    let catalogue = SeedCatalogue::from_file(file.path()).expect("seed file loads");

    assert_eq!(catalogue.len(), 1);
    let adamite = catalogue.minerals().first().expect("one mineral");
    assert_eq!(adamite.image_caption, "Yellow-green adamite on limonite");
    assert_eq!(adamite.streak, "White to pale green");
    assert!(adamite.luster.is_empty());
}

#[test]
fn reports_missing_file_with_path() {
    let path = Path::new("/nonexistent-dir/minerals.json");

    let err = SeedCatalogue::from_file(path).expect_err("missing file");

    match err {
        SeedError::IoError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case("[]", SeedError::Empty)]
#[case(r#"[{"name": " "}]"#, SeedError::EmptyName { index: 0 })]
fn validation_applies_to_files(#[case] contents: &str, #[case] expected: SeedError) {
    let file = write_seed_file(contents);

    let err = SeedCatalogue::from_file(file.path()).expect_err("invalid seed file");

    assert_eq!(err, expected);
}

#[test]
fn bundled_fixture_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("backend")
        .join("fixtures")
        .join("minerals.json");

    let catalogue = SeedCatalogue::from_file(&path).expect("bundled fixture loads");

    assert!(!catalogue.is_empty());
}
