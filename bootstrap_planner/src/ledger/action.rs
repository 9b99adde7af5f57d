//!
//! The deployment ledger action.
//!

use crate::contract::recipient::Recipient;

///
/// The deployment ledger action: one contract the executor deploys through the factory.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// The logical domain, e.g. `token.contract.coraprotocol.eth`.
    pub domain: String,
    /// The contract source file name.
    pub contract: String,
    /// The `0x`-prefixed init code.
    pub bytecode: String,
    /// The predicted address.
    #[serde(with = "crate::checksummed")]
    pub expected_address: web3::types::Address,
    /// The initial token distribution, carried by the token action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
    /// The airdrop Merkle root, carried by the airdrop action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merkle_root: Option<web3::types::H256>,
    /// The domains this action depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// The fields not managed by the planner, such as `title` and `description`.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Action {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        domain: String,
        contract: String,
        bytecode: String,
        expected_address: web3::types::Address,
        depends_on: Vec<String>,
    ) -> Self {
        Self {
            domain,
            contract,
            bytecode,
            expected_address,
            recipients: None,
            merkle_root: None,
            depends_on,
            extra: serde_json::Map::new(),
        }
    }

    ///
    /// Whether the action deploys anything.
    ///
    pub fn has_bytecode(&self) -> bool {
        !self.bytecode.trim_start_matches("0x").is_empty()
    }

    ///
    /// Overwrites the planner-managed fields with those of `other`, keeping the extra fields.
    ///
    pub fn update(&mut self, other: Self) {
        let Self {
            domain,
            contract,
            bytecode,
            expected_address,
            recipients,
            merkle_root,
            depends_on,
            extra,
        } = other;

        self.domain = domain;
        self.contract = contract;
        self.bytecode = bytecode;
        self.expected_address = expected_address;
        self.recipients = recipients;
        self.merkle_root = merkle_root;
        self.depends_on = depends_on;
        for (key, value) in extra.into_iter() {
            self.extra.insert(key, value);
        }
    }
}
