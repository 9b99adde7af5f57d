//!
//! The configuration error.
//!

use std::path::PathBuf;

///
/// The configuration error.
///
/// Any of these aborts planning before the first stage runs.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the configuration file.
    #[error("Reading configuration file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the configuration file.
        path: PathBuf,
    },
    /// Error parsing the configuration file.
    #[error("Parsing configuration file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the configuration file.
        path: PathBuf,
    },
    /// Error parsing the configuration JSON.
    #[error("Parsing configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is absent or empty.
    #[error("Missing configuration field `{field}`")]
    MissingField {
        /// The field path.
        field: String,
    },
    /// The field is not a valid account address.
    #[error("Invalid address `{value}` in the field `{field}`: {reason}")]
    InvalidAddress {
        /// The field path.
        field: String,
        /// The value as supplied.
        value: String,
        /// The problem description.
        reason: String,
    },
    /// The salt is not a 32-byte hexadecimal string.
    #[error("Invalid salt `{value}`: expected 32 bytes in hexadecimal")]
    InvalidSalt {
        /// The value as supplied.
        value: String,
    },
    /// The field is not an unsigned integer.
    #[error("Invalid amount `{value}` in the field `{field}`")]
    InvalidAmount {
        /// The field path.
        field: String,
        /// The value as supplied.
        value: String,
    },
    /// The field must be positive.
    #[error("The field `{field}` must be positive")]
    ZeroAmount {
        /// The field path.
        field: String,
    },
    /// The function selector is not 4 bytes in hexadecimal.
    #[error("Invalid function selector `{value}`: expected 4 bytes in hexadecimal")]
    InvalidSelector {
        /// The value as supplied.
        value: String,
    },
    /// The initial selectors and delays are not paired.
    #[error("{selectors} initial function selectors do not match {delays} initial delays")]
    SelectorDelayMismatch {
        /// The number of selectors.
        selectors: usize,
        /// The number of delays.
        delays: usize,
    },
    /// The DAO vesting beneficiary is always the timelock and cannot be configured.
    #[error("The field `vesting.dao.beneficiary` must be empty: the DAO vests to the timelock")]
    DaoBeneficiary,
    /// The contribution cap policy is invalid.
    #[error("Invalid treasury contribution cap: {0}")]
    CapPolicy(#[from] balance_map::Error),
}
