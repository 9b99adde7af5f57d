//!
//! The account address normalization.
//!

use sha3::Digest;

/// The Ethereum address byte length.
pub const BYTE_LENGTH_ETH_ADDRESS: usize = 20;

///
/// The address parsing error.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Not a 20-byte hexadecimal string.
    Invalid,
    /// Mixed-case spelling that does not match the EIP-55 checksum.
    Checksum {
        /// The correctly checksummed form.
        expected: String,
    },
}

///
/// Parses an address, accepting all-lowercase, all-uppercase, or correctly checksummed spelling.
///
pub fn parse(value: &str) -> Result<web3::types::Address, AddressError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.len() != BYTE_LENGTH_ETH_ADDRESS * 2 {
        return Err(AddressError::Invalid);
    }

    let bytes = hex::decode(digits).map_err(|_| AddressError::Invalid)?;
    let address = web3::types::Address::from_slice(bytes.as_slice());

    let has_lowercase = digits.bytes().any(|byte| byte.is_ascii_lowercase());
    let has_uppercase = digits.bytes().any(|byte| byte.is_ascii_uppercase());
    if has_lowercase && has_uppercase {
        let expected = checksum(&address);
        if expected[2..] != *digits {
            return Err(AddressError::Checksum { expected });
        }
    }

    Ok(address)
}

///
/// Returns the EIP-55 mixed-case checksum spelling of the address, with the `0x` prefix.
///
pub fn checksum(address: &web3::types::Address) -> String {
    let lowercase = hex::encode(address.as_bytes());
    let hash = sha3::Keccak256::digest(lowercase.as_bytes());

    let mut result = String::with_capacity(2 + lowercase.len());
    result.push_str("0x");
    for (index, character) in lowercase.chars().enumerate() {
        let nibble = (hash[index / 2] >> if index % 2 == 0 { 4 } else { 0 }) & 0x0f;
        if character.is_ascii_alphabetic() && nibble >= 8 {
            result.push(character.to_ascii_uppercase());
        } else {
            result.push(character);
        }
    }
    result
}
