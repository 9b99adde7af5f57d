//!
//! The balance map building error.
//!

///
/// The balance map building error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The entitlement mapping has no entries.
    #[error("The balance map input is empty")]
    EmptyInput,
    /// The address is not a 20-byte hexadecimal string.
    #[error("Invalid address `{address}`")]
    InvalidAddress {
        /// The offending address as supplied.
        address: String,
    },
    /// The mixed-case address does not match its EIP-55 checksum.
    #[error("Address `{address}` has an invalid checksum, expected `{expected}`")]
    InvalidChecksum {
        /// The offending address as supplied.
        address: String,
        /// The correctly checksummed form.
        expected: String,
    },
    /// Two entries normalize to the same address.
    #[error("Duplicate address `{address}` (first seen as `{first}`)")]
    DuplicateAddress {
        /// The checksummed address.
        address: String,
        /// The spelling of the first occurrence.
        first: String,
    },
    /// The amount is not a decimal or `0x`-prefixed hexadecimal integer.
    #[error("Invalid amount `{amount}` for account `{address}`")]
    InvalidAmount {
        /// The account the amount belongs to.
        address: String,
        /// The offending amount as supplied.
        amount: String,
    },
    /// The amount is zero or negative.
    #[error("Non-positive amount `{amount}` for account `{address}`")]
    NonPositiveAmount {
        /// The account the amount belongs to.
        address: String,
        /// The offending amount as supplied.
        amount: String,
    },
    /// The sum of all amounts does not fit into 256 bits.
    #[error("The total of all amounts overflows 256 bits")]
    TotalOverflow,
    /// The cap policy cannot be applied.
    #[error("Invalid contribution cap policy: {reason}")]
    InvalidCapPolicy {
        /// The description of the problem.
        reason: String,
    },
    /// The cap policy yields a zero ceiling for the account.
    #[error("Contribution cap for account `{address}` is zero")]
    ZeroCap {
        /// The checksummed address.
        address: String,
    },
}
