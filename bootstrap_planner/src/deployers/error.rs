//!
//! The deployer error.
//!

///
/// The deployer error.
///
/// Any error aborts the replay: no later action is deployed.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bytecode to deploy is empty.
    #[error("Cannot deploy empty bytecode")]
    EmptyBytecode,
    /// A contract already occupies the address.
    #[error("Address {} is already occupied", balance_map::checksum(.address))]
    AlreadyDeployed {
        /// The occupied address.
        address: web3::types::Address,
    },
    /// The ledger has no factory action.
    #[error("The ledger has no factory action `{domain}`")]
    MissingFactory {
        /// The expected factory domain.
        domain: String,
    },
    /// The ledger factory is not the one the deployer uses.
    #[error(
        "The ledger expects factory {}, but the deployer uses {}",
        balance_map::checksum(.expected),
        balance_map::checksum(.found)
    )]
    FactoryMismatch {
        /// The ledger factory.
        expected: web3::types::Address,
        /// The deployer factory.
        found: web3::types::Address,
    },
    /// The action bytecode is not hexadecimal.
    #[error("Action `{domain}` bytecode is not valid hexadecimal")]
    InvalidBytecode {
        /// The action domain.
        domain: String,
    },
    /// The realized address differs from the predicted one.
    #[error(
        "Action `{domain}` expected address {}, found {}",
        balance_map::checksum(.expected),
        balance_map::checksum(.found)
    )]
    AddressMismatch {
        /// The action domain.
        domain: String,
        /// The predicted address.
        expected: web3::types::Address,
        /// The realized address.
        found: web3::types::Address,
    },
}
