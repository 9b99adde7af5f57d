//!
//! The configuration file as written by the operator.
//!

use crate::config::contract_names::ContractNames;

///
/// An integer written either as a JSON number or as a decimal or `0x` hexadecimal string.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A JSON number.
    Number(u64),
    /// A string, required for values beyond 64 bits.
    String(String),
}

///
/// The configuration file root.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The create2 factory address.
    pub factory: Option<String>,
    /// The campaign salt.
    pub salt: Option<String>,
    /// The domain suffix of the ledger actions.
    pub project_domain: Option<String>,
    /// The token total supply.
    pub total_supply: Quantity,
    /// The artifact names.
    #[serde(default)]
    pub contracts: ContractNames,
    /// The timelock and governor parameters.
    pub timelock: Timelock,
    /// The message relayer parameters.
    pub relayer: Relayer,
    /// The treasury bootstrapping parameters.
    pub treasury: Treasury,
    /// The airdrop parameters.
    pub airdrop: Airdrop,
    /// The vesting schedules.
    pub vesting: Vesting,
}

///
/// The timelock and governor parameters.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timelock {
    /// The timelock minimum delay.
    pub min_delay: Quantity,
    /// The function selectors with custom delays.
    #[serde(default)]
    pub initial_selectors: Vec<String>,
    /// The delays of the function selectors.
    #[serde(default)]
    pub initial_delays: Vec<Quantity>,
    /// The short proposal delay.
    pub short_delay: Quantity,
    /// The default proposal delay.
    pub default_delay: Quantity,
    /// The long proposal delay.
    pub long_delay: Quantity,
    /// The voting delay.
    pub voting_delay: Quantity,
    /// The voting period.
    pub voting_period: Quantity,
    /// The proposal threshold in token units.
    pub proposal_threshold: Quantity,
    /// The quorum numerator.
    pub quorum_numerator: Quantity,
}

///
/// The message relayer parameters.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relayer {
    /// The cross-chain gateway.
    pub gateway: Option<String>,
    /// The cross-chain gas service.
    pub gas_service: Option<String>,
}

///
/// The treasury bootstrapping parameters.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treasury {
    /// The treasury allocation.
    pub total: Quantity,
    /// The allow-list contribution cap policy.
    #[serde(default)]
    pub contribution_cap: Option<CapPolicy>,
}

///
/// The allow-list contribution cap policy.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapPolicy {
    /// The cap equals the entitlement.
    Entitlement,
    /// The same cap for every account.
    Fixed(Quantity),
    /// A fraction of the entitlement.
    Fraction {
        /// The numerator.
        numerator: Quantity,
        /// The denominator.
        denominator: Quantity,
    },
}

///
/// The airdrop parameters.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airdrop {
    /// The airdrop allocation.
    pub total: Quantity,
}

///
/// The vesting schedules.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vesting {
    /// The development team schedule.
    pub team: Schedule,
    /// The DAO schedule.
    pub dao: Schedule,
    /// The advisor schedules.
    #[serde(default)]
    pub advisors: Vec<Schedule>,
}

///
/// The vesting schedule.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// The beneficiary. Must be absent for the DAO.
    #[serde(default)]
    pub beneficiary: Option<String>,
    /// The vested amount.
    pub amount: Quantity,
    /// The vesting period in months.
    pub period_months: Quantity,
    /// The cliff in months.
    #[serde(default)]
    pub cliff_months: Option<Quantity>,
}
