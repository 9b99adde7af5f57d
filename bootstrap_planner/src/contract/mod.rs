//!
//! The planned contract.
//!

pub mod argument;
pub mod init_code;
pub mod recipient;
pub mod resolver;

#[cfg(test)]
mod tests;

use self::init_code::InitCode;

///
/// The planned contract: its init code, its predicted address, and the planned contracts
/// whose addresses it embeds.
///
/// Immutable once resolved.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSpec {
    /// The plan name, e.g. `team.vesting`.
    name: String,
    /// The artifact name.
    contract: String,
    /// The init code.
    init_code: InitCode,
    /// The create2 address.
    predicted_address: web3::types::Address,
    /// The plan names of the referenced contracts.
    depends_on: Vec<String>,
}

impl ContractSpec {
    ///
    /// A shortcut constructor.
    ///
    pub(crate) fn new(
        name: String,
        contract: String,
        init_code: InitCode,
        predicted_address: web3::types::Address,
        depends_on: Vec<String>,
    ) -> Self {
        Self {
            name,
            contract,
            init_code,
            predicted_address,
            depends_on,
        }
    }

    ///
    /// The plan name.
    ///
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    ///
    /// The artifact name.
    ///
    pub fn contract(&self) -> &str {
        self.contract.as_str()
    }

    ///
    /// The init code.
    ///
    pub fn init_code(&self) -> &InitCode {
        &self.init_code
    }

    ///
    /// The create2 address.
    ///
    pub fn predicted_address(&self) -> web3::types::Address {
        self.predicted_address
    }

    ///
    /// The plan names of the referenced contracts.
    ///
    pub fn depends_on(&self) -> &[String] {
        self.depends_on.as_slice()
    }
}
