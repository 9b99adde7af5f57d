//!
//! The planning error.
//!

use crate::planner::stage::Stage;

///
/// The planning error.
///
/// Planning stops at the first error; no partial plan is ever returned.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The creation bytecode is absent or empty.
    #[error("Contract `{contract}` has no creation bytecode")]
    MissingInitCode {
        /// The artifact name.
        contract: String,
    },
    /// A stage has been run before its predecessors.
    #[error("Stage `{stage}` requires stage `{missing}` to be completed first")]
    StageOrder {
        /// The stage.
        stage: Stage,
        /// The first missing predecessor.
        missing: Stage,
    },
    /// A stage refers to a contract that has not been resolved.
    #[error("Stage `{stage}` refers to the unresolved contract `{contract}`")]
    UnresolvedReference {
        /// The stage.
        stage: Stage,
        /// The plan name of the contract.
        contract: String,
    },
    /// A planned contract depends on a contract that is not planned before it.
    #[error("Contract `{contract}` depends on `{dependency}`, which is not planned before it")]
    DanglingDependency {
        /// The plan name of the dependent contract.
        contract: String,
        /// The plan name of the dependency.
        dependency: String,
    },
    /// A recipient has been added after the token distribution was frozen.
    #[error("Recipient `{contract}` added after the token distribution was frozen")]
    RecipientsFrozen {
        /// The plan name of the recipient contract.
        contract: String,
    },
    /// The airdrop balance map cannot be built.
    #[error("Airdrop balance map: {0}")]
    AirdropBalanceMap(balance_map::Error),
    /// The treasury allow-list cannot be built.
    #[error("Treasury allow-list: {0}")]
    TreasuryAllowlist(balance_map::Error),
    /// The airdrop entitlements exceed the airdrop allocation.
    #[error("Airdrop entitlements total {entitled} exceeds the airdrop allocation {allocated}")]
    AirdropUnderfunded {
        /// The sum of the entitlements.
        entitled: web3::types::U256,
        /// The configured airdrop allocation.
        allocated: web3::types::U256,
    },
    /// The initial distribution exceeds the total supply.
    #[error("Initial distribution {distributed} exceeds the total supply {total_supply}")]
    SupplyExceeded {
        /// The sum of the recipient amounts, saturated at the 256-bit maximum.
        distributed: web3::types::U256,
        /// The configured total supply.
        total_supply: web3::types::U256,
    },
}
