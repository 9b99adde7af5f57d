//!
//! The deployment ledger error.
//!

use std::path::PathBuf;

///
/// The deployment ledger error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the ledger template file.
    #[error("Reading ledger template {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the template file.
        path: PathBuf,
    },
    /// Error parsing the ledger template file.
    #[error("Parsing ledger template {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the template file.
        path: PathBuf,
    },
    /// Error serializing the ledger.
    #[error("Serializing the ledger: {0}")]
    Json(#[from] serde_json::Error),
}
