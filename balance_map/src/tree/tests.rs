//!
//! The Merkle tree tests.
//!

use super::verify_leaf;
use super::MerkleTree;
use crate::error::Error;
use crate::leaf::combined_hash;

fn leaves(count: u8) -> Vec<web3::types::H256> {
    (1..=count).map(web3::types::H256::repeat_byte).collect()
}

#[test]
fn empty() {
    assert_eq!(MerkleTree::new(vec![]), Err(Error::EmptyInput));
}

#[test]
fn single_leaf_is_root() {
    let tree = MerkleTree::new(leaves(1)).expect("Always valid");
    assert_eq!(tree.root(), web3::types::H256::repeat_byte(1));
    assert_eq!(tree.proof(0), Some(vec![]));
}

#[test]
fn two_leaves() {
    let leaves = leaves(2);
    let tree = MerkleTree::new(leaves.clone()).expect("Always valid");
    assert_eq!(tree.root(), combined_hash(&leaves[0], &leaves[1]));
    assert_eq!(tree.proof(0), Some(vec![leaves[1]]));
    assert_eq!(tree.proof(1), Some(vec![leaves[0]]));
}

#[test]
fn odd_node_is_promoted() {
    let leaves = leaves(3);
    let tree = MerkleTree::new(leaves.clone()).expect("Always valid");

    let left = combined_hash(&leaves[0], &leaves[1]);
    assert_eq!(tree.root(), combined_hash(&left, &leaves[2]));
    assert_eq!(tree.proof(2), Some(vec![left]));
}

#[test]
fn every_proof_verifies() {
    for count in 1..=17 {
        let leaves = leaves(count);
        let tree = MerkleTree::new(leaves.clone()).expect("Always valid");
        for (index, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof(index).expect("Always exists");
            assert!(
                verify_leaf(&tree.root(), *leaf, proof.as_slice()),
                "leaf {index} of {count} does not verify"
            );
        }
    }
}

#[test]
fn proof_out_of_range() {
    let tree = MerkleTree::new(leaves(4)).expect("Always valid");
    assert_eq!(tree.proof(4), None);
}

#[test]
fn tampered_proof_fails() {
    let leaves = leaves(5);
    let tree = MerkleTree::new(leaves.clone()).expect("Always valid");
    let proof = tree.proof(1).expect("Always exists");

    for position in 0..proof.len() {
        let mut tampered = proof.clone();
        tampered[position] = web3::types::H256::repeat_byte(0xaa);
        assert!(!verify_leaf(&tree.root(), leaves[1], tampered.as_slice()));
    }
}
