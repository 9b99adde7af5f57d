//!
//! The in-memory create2 factory.
//!

use std::collections::BTreeMap;

use crate::address_predictor::AddressPredictor;

use super::error::Error;
use super::Deployer;

///
/// The in-memory create2 factory.
///
#[derive(Debug, Clone)]
pub struct SimulatedDeployer {
    /// The factory address.
    factory: web3::types::Address,
    /// The deployed init code hashes.
    deployed: BTreeMap<web3::types::Address, web3::types::H256>,
}

impl SimulatedDeployer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(factory: web3::types::Address) -> Self {
        Self {
            factory,
            deployed: BTreeMap::new(),
        }
    }

    ///
    /// Returns the init code hash of the contract deployed at `address`.
    ///
    pub fn deployed(&self, address: &web3::types::Address) -> Option<web3::types::H256> {
        self.deployed.get(address).copied()
    }

    ///
    /// Returns the number of deployed contracts.
    ///
    pub fn deployed_count(&self) -> usize {
        self.deployed.len()
    }
}

impl Deployer for SimulatedDeployer {
    fn factory(&self) -> web3::types::Address {
        self.factory
    }

    fn simulate(
        &self,
        bytecode: &[u8],
        salt: web3::types::H256,
    ) -> Result<web3::types::Address, Error> {
        if bytecode.is_empty() {
            return Err(Error::EmptyBytecode);
        }

        let hash = AddressPredictor::init_code_hash(bytecode);
        let address = AddressPredictor::create2_address(&self.factory, &salt, &hash);
        if self.deployed.contains_key(&address) {
            return Err(Error::AlreadyDeployed { address });
        }
        Ok(address)
    }

    fn deploy(
        &mut self,
        bytecode: &[u8],
        salt: web3::types::H256,
    ) -> Result<web3::types::Address, Error> {
        let address = self.simulate(bytecode, salt)?;
        self.deployed
            .insert(address, AddressPredictor::init_code_hash(bytecode));
        Ok(address)
    }
}
