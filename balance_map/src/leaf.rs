//!
//! The Merkle leaf and node hashing.
//!

use sha3::Digest;

/// The EVM word byte length.
pub const BYTE_LENGTH_FIELD: usize = 32;

///
/// Hashes the claim leaf as `keccak256(abi.encodePacked(uint256 index, address account, uint256 amount))`.
///
pub fn hash(
    index: u64,
    address: &web3::types::Address,
    amount: &web3::types::U256,
) -> web3::types::H256 {
    let mut index_bytes = [0u8; BYTE_LENGTH_FIELD];
    web3::types::U256::from(index).to_big_endian(&mut index_bytes);
    let mut amount_bytes = [0u8; BYTE_LENGTH_FIELD];
    amount.to_big_endian(&mut amount_bytes);

    let mut hasher = sha3::Keccak256::new();
    hasher.update(index_bytes);
    hasher.update(address.as_bytes());
    hasher.update(amount_bytes);
    web3::types::H256::from_slice(hasher.finalize().as_slice())
}

///
/// Hashes an inner node from its two children, ordering them first.
///
/// The sorted pair is what lets a verifier recompute the root without knowing
/// whether each sibling is on the left or on the right.
///
pub fn combined_hash(a: &web3::types::H256, b: &web3::types::H256) -> web3::types::H256 {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = sha3::Keccak256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    web3::types::H256::from_slice(hasher.finalize().as_slice())
}
