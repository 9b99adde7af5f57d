//!
//! The initial token distribution recipient.
//!

///
/// The initial token distribution recipient.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Recipient {
    /// The recipient contract, by its plan name.
    #[serde(skip)]
    pub contract: String,
    /// The recipient address.
    #[serde(with = "crate::checksummed")]
    pub address: web3::types::Address,
    /// The amount minted to the recipient.
    #[serde(with = "balance_map::decimal")]
    pub amount: web3::types::U256,
}

impl Recipient {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: String, address: web3::types::Address, amount: web3::types::U256) -> Self {
        Self {
            contract,
            address,
            amount,
        }
    }

    ///
    /// Returns the `(address to, uint256 amount)` ABI tuple.
    ///
    pub fn to_token(&self) -> web3::ethabi::Token {
        web3::ethabi::Token::Tuple(vec![
            web3::ethabi::Token::Address(self.address),
            web3::ethabi::Token::Uint(self.amount),
        ])
    }
}
