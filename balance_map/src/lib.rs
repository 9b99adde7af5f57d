//!
//! The Merkle balance map library.
//!

pub(crate) mod address;
pub(crate) mod amount;
pub(crate) mod capped;
pub(crate) mod claim;
pub(crate) mod entry;
pub(crate) mod error;
pub(crate) mod leaf;
pub(crate) mod map;
pub(crate) mod tree;


pub use self::address::checksum;
pub use self::address::parse as parse_address;
pub use self::address::AddressError;
pub use self::address::BYTE_LENGTH_ETH_ADDRESS;
pub use self::amount::decimal;
pub use self::amount::parse as parse_amount;
pub use self::amount::AmountError;
pub use self::capped::CapPolicy;
pub use self::capped::CappedBalanceMap;
pub use self::capped::CappedClaim;
pub use self::claim::Claim;
pub use self::entry::BalanceEntry;
pub use self::error::Error;
pub use self::leaf::hash as leaf_hash;
pub use self::map::verify;
pub use self::map::BalanceMap;
pub use self::tree::MerkleTree;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
