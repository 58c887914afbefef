//! Error types for the mineral-data crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or validating a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    IoError {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed.
    #[error("invalid seed JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The seed file contains no minerals.
    #[error("seed file contains no minerals")]
    Empty,

    /// A mineral has a blank name.
    #[error("mineral at index {index} has an empty name")]
    EmptyName {
        /// Position of the offending entry in the seed array.
        index: usize,
    },

    /// Two entries share the same name.
    #[error("duplicate mineral name '{name}' at index {index}")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Position of the second occurrence.
        index: usize,
    },
}
