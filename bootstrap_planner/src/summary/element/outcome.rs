//!
//! The planning summary element outcome.
//!

///
/// The planning summary element outcome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The contract address has been predicted.
    Resolved {
        /// The predicted address.
        address: web3::types::Address,
    },
    /// A recipient has been appended to the initial distribution.
    Recipient {
        /// The recipient address.
        address: web3::types::Address,
        /// The amount.
        amount: web3::types::U256,
    },
    /// A balance map has been committed to.
    Committed {
        /// The Merkle root.
        root: web3::types::H256,
        /// The number of accounts.
        accounts: usize,
        /// The sum of the entitlements.
        total: web3::types::U256,
    },
    /// The ledger action has been deployed at the expected address.
    Deployed {
        /// The realized address.
        address: web3::types::Address,
    },
    /// The stage has failed.
    Failed {
        /// The error description.
        error: String,
    },
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn resolved(address: web3::types::Address) -> Self {
        Self::Resolved { address }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn recipient(address: web3::types::Address, amount: web3::types::U256) -> Self {
        Self::Recipient { address, amount }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn committed(root: web3::types::H256, accounts: usize, total: web3::types::U256) -> Self {
        Self::Committed {
            root,
            accounts,
            total,
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn deployed(address: web3::types::Address) -> Self {
        Self::Deployed { address }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::Failed {
            error: error.to_string(),
        }
    }
}
