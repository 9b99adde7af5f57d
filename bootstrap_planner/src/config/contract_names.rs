//!
//! The artifact names of the campaign contracts.
//!

///
/// The artifact names of the campaign contracts.
///
/// Omitted names fall back to the defaults.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractNames {
    /// The governance initiation data contract.
    pub governance_data: String,
    /// The governance initiation data launcher contract.
    pub launcher: String,
    /// The treasury bootstrapping contract.
    pub treasury: String,
    /// The vesting contract, shared by the team, the DAO, and the advisors.
    pub vesting: String,
    /// The timelock controller contract.
    pub timelock: String,
    /// The cross-chain message relayer contract.
    pub relayer: String,
    /// The airdrop distributor contract.
    pub airdrop: String,
    /// The governance token contract.
    pub token: String,
    /// The governor contract.
    pub governor: String,
}

impl Default for ContractNames {
    fn default() -> Self {
        Self {
            governance_data: "GovernanceInitiationData".to_owned(),
            launcher: "GovernanceInitiationDataDeployer".to_owned(),
            treasury: "TreasuryBootstrapping".to_owned(),
            vesting: "Vesting".to_owned(),
            timelock: "CoraTimelockController".to_owned(),
            relayer: "MessageRelayer".to_owned(),
            airdrop: "MerkleDistributorWithDeadline".to_owned(),
            token: "CoraToken".to_owned(),
            governor: "CoraGovernor".to_owned(),
        }
    }
}

impl ContractNames {
    ///
    /// Returns the names in stage order, the launcher last.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.governance_data,
            &self.treasury,
            &self.vesting,
            &self.timelock,
            &self.relayer,
            &self.airdrop,
            &self.token,
            &self.governor,
            &self.launcher,
        ]
        .into_iter()
        .map(String::as_str)
    }
}
