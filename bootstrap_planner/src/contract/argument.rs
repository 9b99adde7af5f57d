//!
//! The constructor argument.
//!

use crate::contract::recipient::Recipient;
use crate::contract::ContractSpec;

///
/// The constructor argument.
///
/// Besides its ABI value, an argument remembers which planned contracts it refers to, so
/// the dependency edges of a contract follow from its arguments alone.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// The predicted address of a planned contract.
    Predicted {
        /// The plan name of the referenced contract.
        contract: String,
        /// The predicted address.
        address: web3::types::Address,
    },
    /// An external address.
    Address(web3::types::Address),
    /// An `address[]` of external addresses.
    Addresses(Vec<web3::types::Address>),
    /// A `uint256`.
    Uint(web3::types::U256),
    /// A `uint256[]`.
    Uints(Vec<web3::types::U256>),
    /// A `bytes32`.
    Bytes32(web3::types::H256),
    /// A `bytes4[]`.
    Selectors(Vec<[u8; 4]>),
    /// A dynamic `bytes`.
    Bytes(Vec<u8>),
    /// The `(address to, uint256 amount)[]` token distribution.
    Recipients(Vec<Recipient>),
    /// A tuple.
    Tuple(Vec<Argument>),
}

impl Argument {
    ///
    /// A shortcut constructor.
    ///
    pub fn predicted(spec: &ContractSpec) -> Self {
        Self::Predicted {
            contract: spec.name().to_owned(),
            address: spec.predicted_address(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn uint<V>(value: V) -> Self
    where
        V: Into<web3::types::U256>,
    {
        Self::Uint(value.into())
    }

    ///
    /// Returns the ABI token.
    ///
    pub fn to_token(&self) -> web3::ethabi::Token {
        use web3::ethabi::Token;

        match self {
            Self::Predicted { address, .. } => Token::Address(*address),
            Self::Address(address) => Token::Address(*address),
            Self::Addresses(addresses) => {
                Token::Array(addresses.iter().copied().map(Token::Address).collect())
            }
            Self::Uint(value) => Token::Uint(*value),
            Self::Uints(values) => Token::Array(values.iter().copied().map(Token::Uint).collect()),
            Self::Bytes32(value) => Token::FixedBytes(value.as_bytes().to_vec()),
            Self::Selectors(selectors) => Token::Array(
                selectors
                    .iter()
                    .map(|selector| Token::FixedBytes(selector.to_vec()))
                    .collect(),
            ),
            Self::Bytes(bytes) => Token::Bytes(bytes.to_owned()),
            Self::Recipients(recipients) => {
                Token::Array(recipients.iter().map(Recipient::to_token).collect())
            }
            Self::Tuple(elements) => Token::Tuple(elements.iter().map(Self::to_token).collect()),
        }
    }

    ///
    /// Appends the plan names of the referenced contracts to `dependencies`, skipping repeats.
    ///
    pub fn collect_dependencies(&self, dependencies: &mut Vec<String>) {
        match self {
            Self::Predicted { contract, .. } => Self::push_dependency(dependencies, contract),
            Self::Recipients(recipients) => {
                for recipient in recipients.iter() {
                    Self::push_dependency(dependencies, recipient.contract.as_str());
                }
            }
            Self::Tuple(elements) => {
                for element in elements.iter() {
                    element.collect_dependencies(dependencies);
                }
            }
            _ => {}
        }
    }

    ///
    /// Appends the dependency unless it is already known.
    ///
    fn push_dependency(dependencies: &mut Vec<String>, contract: &str) {
        if !dependencies.iter().any(|known| known == contract) {
            dependencies.push(contract.to_owned());
        }
    }
}
