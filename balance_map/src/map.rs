//!
//! The balance map.
//!

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::claim::Claim;
use crate::entry::BalanceEntry;
use crate::entry::NormalizedEntry;
use crate::error::Error;
use crate::tree::MerkleTree;

///
/// The balance map: the Merkle root committing to all entitlements, and a claim per recipient.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceMap {
    /// The Merkle root.
    pub merkle_root: web3::types::H256,
    /// The sum of all entitlements.
    #[serde(with = "crate::amount::decimal")]
    pub token_total: web3::types::U256,
    /// The claims keyed by the checksummed recipient address.
    pub claims: BTreeMap<String, Claim>,
}

impl BalanceMap {
    ///
    /// Builds the balance map from the entitlement entries.
    ///
    /// The result does not depend on the order of `entries`: indices are assigned by
    /// ascending amount, ties broken by ascending address.
    ///
    pub fn build<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = BalanceEntry>,
    {
        let entries = Self::canonicalize(entries)?;

        let mut token_total = web3::types::U256::zero();
        for entry in entries.iter() {
            token_total = token_total
                .checked_add(entry.amount)
                .ok_or(Error::TotalOverflow)?;
        }

        let leaves = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| crate::leaf::hash(index as u64, &entry.address, &entry.amount))
            .collect();
        let tree = MerkleTree::new(leaves)?;

        let claims = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let proof = tree.proof(index).expect("Always exists");
                (
                    crate::address::checksum(&entry.address),
                    Claim::new(index as u64, entry.amount, proof),
                )
            })
            .collect();

        Ok(Self {
            merkle_root: tree.root(),
            token_total,
            claims,
        })
    }

    ///
    /// Returns the claim of the specified account.
    ///
    pub fn claim(&self, address: &web3::types::Address) -> Option<&Claim> {
        self.claims.get(crate::address::checksum(address).as_str())
    }

    ///
    /// Validates the entries, rejects duplicates, and sorts them into index order.
    ///
    pub(crate) fn canonicalize<I>(entries: I) -> Result<Vec<NormalizedEntry>, Error>
    where
        I: IntoIterator<Item = BalanceEntry>,
    {
        let mut seen: HashMap<web3::types::Address, String> = HashMap::new();
        let mut normalized = Vec::new();
        for entry in entries.into_iter() {
            let parsed = entry.normalize()?;
            if let Some(first) = seen.get(&parsed.address) {
                return Err(Error::DuplicateAddress {
                    address: crate::address::checksum(&parsed.address),
                    first: first.to_owned(),
                });
            }
            seen.insert(parsed.address, entry.address);
            normalized.push(parsed);
        }

        if normalized.is_empty() {
            return Err(Error::EmptyInput);
        }

        normalized.sort_by(NormalizedEntry::canonical_cmp);
        Ok(normalized)
    }
}

///
/// Checks that `(index, address, amount)` with `proof` is committed to by `root`.
///
pub fn verify(
    root: &web3::types::H256,
    index: u64,
    address: &web3::types::Address,
    amount: &web3::types::U256,
    proof: &[web3::types::H256],
) -> bool {
    let leaf = crate::leaf::hash(index, address, amount);
    crate::tree::verify_leaf(root, leaf, proof)
}
