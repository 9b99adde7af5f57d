//!
//! The Merkle tree.
//!

#[cfg(test)]
mod tests;

use crate::error::Error;
use crate::leaf::combined_hash;

///
/// The Merkle tree over claim leaves, stored layer by layer from the leaves up.
///
/// Leaves stay in index order. A layer with an odd number of nodes promotes its last
/// node unchanged to the next layer, so no padding leaf is ever hashed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// The layers, the first one being the leaves and the last one holding only the root.
    layers: Vec<Vec<web3::types::H256>>,
}

impl MerkleTree {
    ///
    /// Builds the tree from the leaves in index order.
    ///
    pub fn new(leaves: Vec<web3::types::H256>) -> Result<Self, Error> {
        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut layers = vec![leaves];
        while layers.last().map(Vec::len).unwrap_or_default() > 1 {
            let next = Self::next_layer(layers.last().expect("Always exists"));
            layers.push(next);
        }

        Ok(Self { layers })
    }

    ///
    /// Returns the root hash.
    ///
    pub fn root(&self) -> web3::types::H256 {
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .expect("The tree always has a root")
    }

    ///
    /// Returns the number of leaves.
    ///
    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    ///
    /// Whether the tree has no leaves. Never true for a constructed tree.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Returns the sibling hashes from the leaf at `index` up to the root.
    ///
    pub fn proof(&self, mut index: usize) -> Option<Vec<web3::types::H256>> {
        if index >= self.len() {
            return None;
        }

        let mut proof = Vec::with_capacity(self.layers.len());
        for layer in self.layers[..self.layers.len() - 1].iter() {
            let sibling = index ^ 1;
            if let Some(hash) = layer.get(sibling) {
                proof.push(*hash);
            }
            index /= 2;
        }
        Some(proof)
    }

    ///
    /// Hashes one layer into the next one.
    ///
    fn next_layer(layer: &[web3::types::H256]) -> Vec<web3::types::H256> {
        layer
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => combined_hash(left, right),
                [single] => *single,
                _ => unreachable!("Chunks of two are never empty"),
            })
            .collect()
    }
}

///
/// Recomputes the root from the leaf hash and its proof, and compares it to `root`.
///
pub fn verify_leaf(
    root: &web3::types::H256,
    leaf: web3::types::H256,
    proof: &[web3::types::H256],
) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |hash, sibling| combined_hash(&hash, sibling));
    computed == *root
}
