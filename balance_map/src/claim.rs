//!
//! The per-recipient claim.
//!

///
/// The recipient claim: everything a claimant needs to redeem against the published root.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claim {
    /// The leaf index.
    pub index: u64,
    /// The entitlement.
    #[serde(with = "crate::amount::decimal")]
    pub amount: web3::types::U256,
    /// The sibling hashes from the leaf to the root.
    pub proof: Vec<web3::types::H256>,
}

impl Claim {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(index: u64, amount: web3::types::U256, proof: Vec<web3::types::H256>) -> Self {
        Self {
            index,
            amount,
            proof,
        }
    }
}
