//!
//! The artifact loading error.
//!

use std::path::PathBuf;

use itertools::Itertools;

///
/// The artifact loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the artifact file.
    #[error("Reading artifact file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// Error parsing the artifact file.
    #[error("Parsing artifact file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// The artifact search pattern is invalid.
    #[error("Invalid artifact search pattern `{pattern}`: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The pattern.
        pattern: String,
    },
    /// No artifact has been found for the contract.
    #[error("Artifact of contract `{name}` not found in {directory:?}")]
    Missing {
        /// The contract name.
        name: String,
        /// The artifacts directory.
        directory: PathBuf,
    },
    /// Several artifacts have been found for the contract.
    #[error(
        "Artifact of contract `{name}` is ambiguous: {}",
        .paths.iter().map(|path| path.to_string_lossy()).join(", ")
    )]
    Ambiguous {
        /// The contract name.
        name: String,
        /// The candidate paths.
        paths: Vec<PathBuf>,
    },
    /// The bytecode is not hexadecimal, usually because of unlinked libraries.
    #[error("Artifact file {path:?} bytecode is not valid hexadecimal")]
    InvalidBytecode {
        /// The path to the artifact file.
        path: PathBuf,
    },
}
