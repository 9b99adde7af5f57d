//!
//! The target network.
//!

///
/// The target network, named after its chain identifier.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// The Ethereum mainnet.
    Mainnet,
    /// The Rinkeby testnet.
    Rinkeby,
    /// The Arbitrum One rollup.
    Arbitrum,
    /// A local development node.
    Local,
    /// Any other chain.
    Unknown,
}

impl Network {
    ///
    /// Returns the network with the specified chain identifier.
    ///
    pub fn from_chain_id(chain_id: u64) -> Self {
        match chain_id {
            1 => Self::Mainnet,
            4 => Self::Rinkeby,
            42161 => Self::Arbitrum,
            1337 => Self::Local,
            _ => Self::Unknown,
        }
    }

    ///
    /// Returns the airdrop claims file name.
    ///
    pub fn claims_file_name(&self) -> String {
        format!("claims-{self}.json")
    }

    ///
    /// Returns the treasury allow-list claims file name.
    ///
    pub fn capped_claims_file_name(&self) -> String {
        format!("capped-claims-{self}.json")
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Rinkeby => write!(f, "rinkeby"),
            Self::Arbitrum => write!(f, "arbitrum"),
            Self::Local => write!(f, "local"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Network;

    #[test]
    fn known() {
        assert_eq!(Network::from_chain_id(1), Network::Mainnet);
        assert_eq!(Network::from_chain_id(42161), Network::Arbitrum);
        assert_eq!(
            Network::from_chain_id(1337).claims_file_name(),
            "claims-local.json"
        );
    }

    #[test]
    fn unknown() {
        assert_eq!(Network::from_chain_id(10).to_string(), "unknown");
    }
}
