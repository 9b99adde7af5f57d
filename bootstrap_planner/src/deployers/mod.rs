//!
//! The contract deployers.
//!

pub mod error;
pub mod executor;
pub mod simulated_deployer;

#[cfg(test)]
mod tests;

use self::error::Error;

///
/// The deployer trait: a create2 factory the ledger actions are deployed through.
///
pub trait Deployer {
    ///
    /// Returns the factory address.
    ///
    fn factory(&self) -> web3::types::Address;

    ///
    /// Returns the address `deploy` would occupy, without deploying.
    ///
    fn simulate(
        &self,
        bytecode: &[u8],
        salt: web3::types::H256,
    ) -> Result<web3::types::Address, Error>;

    ///
    /// Deploys a contract.
    ///
    fn deploy(
        &mut self,
        bytecode: &[u8],
        salt: web3::types::H256,
    ) -> Result<web3::types::Address, Error>;
}
