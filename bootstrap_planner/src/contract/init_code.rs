//!
//! The contract init code.
//!

use crate::address_predictor::AddressPredictor;
use crate::contract::argument::Argument;

///
/// The creation bytecode followed by the ABI-encoded constructor arguments.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitCode {
    /// The init code bytes.
    bytes: Vec<u8>,
    /// The init code hash.
    hash: web3::types::H256,
}

impl InitCode {
    ///
    /// Appends the encoded `arguments` to the `template` creation bytecode.
    ///
    pub fn new(template: &[u8], arguments: &[Argument]) -> Self {
        let tokens: Vec<web3::ethabi::Token> = arguments.iter().map(Argument::to_token).collect();

        let mut bytes = template.to_vec();
        bytes.extend(web3::ethabi::encode(tokens.as_slice()));
        let hash = AddressPredictor::init_code_hash(bytes.as_slice());

        Self { bytes, hash }
    }

    ///
    /// Returns the init code bytes.
    ///
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    ///
    /// Returns the `keccak256` of the init code.
    ///
    pub fn hash(&self) -> web3::types::H256 {
        self.hash
    }

    ///
    /// Returns the `0x`-prefixed hexadecimal representation.
    ///
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes.as_slice()))
    }
}
