//!
//! The create2 deploy address predictor.
//!

use crate::BYTE_LENGTH_ETH_ADDRESS;
use crate::BYTE_LENGTH_FIELD;

///
/// The create2 deploy address predictor.
///
/// Every contract of a campaign is deployed by the same factory with the same salt, so the
/// address only depends on the init code hash.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPredictor {
    /// The factory performing the deployments.
    factory: web3::types::Address,
    /// The campaign salt.
    salt: web3::types::H256,
}

impl AddressPredictor {
    /// The create2 preimage prefix.
    const CREATE2_PREFIX: u8 = 0xff;
}

impl AddressPredictor {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(factory: web3::types::Address, salt: web3::types::H256) -> Self {
        Self { factory, salt }
    }

    ///
    /// Returns the factory address.
    ///
    pub fn factory(&self) -> web3::types::Address {
        self.factory
    }

    ///
    /// Returns the campaign salt.
    ///
    pub fn salt(&self) -> web3::types::H256 {
        self.salt
    }

    ///
    /// Returns the address the factory deploys the code hashing to `init_code_hash` at.
    ///
    pub fn predict(&self, init_code_hash: &web3::types::H256) -> web3::types::Address {
        Self::create2_address(&self.factory, &self.salt, init_code_hash)
    }

    ///
    /// Computes `keccak256(0xff ++ factory ++ salt ++ init_code_hash)[12..]`.
    ///
    pub fn create2_address(
        factory: &web3::types::Address,
        salt: &web3::types::H256,
        init_code_hash: &web3::types::H256,
    ) -> web3::types::Address {
        let mut bytes = Vec::with_capacity(1 + BYTE_LENGTH_ETH_ADDRESS + 2 * BYTE_LENGTH_FIELD);
        bytes.push(Self::CREATE2_PREFIX);
        bytes.extend(factory.to_fixed_bytes());
        bytes.extend(salt.to_fixed_bytes());
        bytes.extend(init_code_hash.to_fixed_bytes());

        web3::types::Address::from_slice(
            &web3::signing::keccak256(bytes.as_slice())
                [BYTE_LENGTH_FIELD - BYTE_LENGTH_ETH_ADDRESS..],
        )
    }

    ///
    /// Hashes the init code.
    ///
    pub fn init_code_hash(init_code: &[u8]) -> web3::types::H256 {
        web3::types::H256(web3::signing::keccak256(init_code))
    }
}
