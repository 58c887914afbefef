//! Seed catalogue loading and validation.
//!
//! A seed catalogue is the parsed and validated contents of a seed file. The
//! order of entries is preserved so inserts happen in file order.

use std::collections::HashSet;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::error::SeedError;
use crate::seed::MineralSeed;

/// Validated list of mineral seeds.
///
/// # Example
///
/// ```
/// use mineral_data::{SeedCatalogue, SeedError};
///
/// let err = SeedCatalogue::from_json("[]").expect_err("empty catalogue");
/// assert_eq!(err, SeedError::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalogue {
    minerals: Vec<MineralSeed>,
}

impl SeedCatalogue {
    /// Parses and validates a seed catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if:
    /// - The JSON is malformed or not an array of objects
    /// - The array is empty
    /// - Any name is blank once trimmed
    /// - Two entries share a name
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let minerals: Vec<MineralSeed> =
            serde_json::from_str(json).map_err(|e| SeedError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_seeds(minerals)
    }

    /// Loads a seed catalogue from a file on disk.
    ///
    /// The parent directory is opened with ambient authority and the file is
    /// read relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IoError`] when the file cannot be read and any
    /// error from [`SeedCatalogue::from_json`] otherwise.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let io_error = |message: String| SeedError::IoError {
            path: path.to_path_buf(),
            message,
        };

        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("seed path must be a file".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    fn from_seeds(minerals: Vec<MineralSeed>) -> Result<Self, SeedError> {
        if minerals.is_empty() {
            return Err(SeedError::Empty);
        }

        let mut seen = HashSet::with_capacity(minerals.len());
        for (index, mineral) in minerals.iter().enumerate() {
            let name = mineral.name.trim();
            if name.is_empty() {
                return Err(SeedError::EmptyName { index });
            }
            if !seen.insert(name) {
                return Err(SeedError::DuplicateName {
                    name: name.to_owned(),
                    index,
                });
            }
        }

        Ok(Self { minerals })
    }

    /// Returns the seeds in file order.
    #[must_use]
    pub fn minerals(&self) -> &[MineralSeed] {
        &self.minerals
    }

    /// Returns the number of seeds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.minerals.len()
    }

    /// Returns `true` when the catalogue holds no seeds.
    ///
    /// Validation rejects empty files, so this only holds for catalogues
    /// built by other means.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minerals.is_empty()
    }

    /// Consumes the catalogue and returns the owned seeds.
    #[must_use]
    pub fn into_minerals(self) -> Vec<MineralSeed> {
        self.minerals
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"[
        {"name": "Abelsonite", "category": "Organic", "streak": "Pink"},
        {"name": "Abernathyite", "category": "Arsenate", "streak": "White"},
        {"name": "Acanthite", "category": "Sulfide", "streak": "Black"}
    ]"#;

    #[test]
    fn parses_valid_catalogue_in_file_order() {
        let catalogue = SeedCatalogue::from_json(VALID_JSON).expect("valid catalogue");

        let names: Vec<&str> = catalogue
            .minerals()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Abelsonite", "Abernathyite", "Acanthite"]);
    }

    #[rstest]
    #[case(r#"{"name": "Abelsonite"}"#)]
    #[case("not json")]
    #[case(r#"[{"name": 42}]"#)]
    fn rejects_malformed_json(#[case] json: &str) {
        let err = SeedCatalogue::from_json(json).expect_err("malformed");
        assert!(matches!(err, SeedError::ParseError { .. }));
    }

    #[rstest]
    #[case(r#"[{"name": ""}]"#, 0)]
    #[case(r#"[{"name": "Adamite"}, {"name": "   "}]"#, 1)]
    #[case(r#"[{"name": "Adamite"}, {"category": "Arsenate"}]"#, 1)]
    fn rejects_blank_names(#[case] json: &str, #[case] index: usize) {
        let err = SeedCatalogue::from_json(json).expect_err("blank name");
        assert_eq!(err, SeedError::EmptyName { index });
    }

    #[test]
    fn rejects_duplicate_names() {
        let json = r#"[{"name": "Adamite"}, {"name": "Aegirine"}, {"name": "Adamite "}]"#;
        let err = SeedCatalogue::from_json(json).expect_err("duplicate");
        assert_eq!(
            err,
            SeedError::DuplicateName {
                name: "Adamite".to_owned(),
                index: 2,
            }
        );
    }
}
