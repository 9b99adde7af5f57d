//!
//! The campaign configuration.
//!

pub mod contract_names;
pub mod error;
pub mod raw;

#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;
use std::str::FromStr;

use self::contract_names::ContractNames;
use self::error::Error;
use self::raw::Quantity;

///
/// The validated campaign configuration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The create2 factory address.
    pub factory: web3::types::Address,
    /// The campaign salt.
    pub salt: web3::types::H256,
    /// The domain suffix of the ledger actions, e.g. `coraprotocol.eth`.
    pub project_domain: String,
    /// The token total supply.
    pub total_supply: web3::types::U256,
    /// The artifact names.
    pub contracts: ContractNames,
    /// The timelock and governor parameters.
    pub timelock: TimelockConfig,
    /// The message relayer parameters.
    pub relayer: RelayerConfig,
    /// The treasury bootstrapping parameters.
    pub treasury: TreasuryConfig,
    /// The airdrop allocation.
    pub airdrop_total: web3::types::U256,
    /// The vesting schedules.
    pub vesting: VestingConfig,
}

///
/// The timelock and governor parameters.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelockConfig {
    /// The timelock minimum delay.
    pub min_delay: web3::types::U256,
    /// The function selectors with custom delays, paired with `initial_delays`.
    pub initial_selectors: Vec<[u8; 4]>,
    /// The delays of the function selectors.
    pub initial_delays: Vec<web3::types::U256>,
    /// The short proposal delay.
    pub short_delay: web3::types::U256,
    /// The default proposal delay.
    pub default_delay: web3::types::U256,
    /// The long proposal delay.
    pub long_delay: web3::types::U256,
    /// The voting delay.
    pub voting_delay: web3::types::U256,
    /// The voting period.
    pub voting_period: web3::types::U256,
    /// The proposal threshold.
    pub proposal_threshold: web3::types::U256,
    /// The quorum numerator.
    pub quorum_numerator: web3::types::U256,
}

///
/// The message relayer parameters.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayerConfig {
    /// The cross-chain gateway.
    pub gateway: web3::types::Address,
    /// The cross-chain gas service.
    pub gas_service: web3::types::Address,
}

///
/// The treasury bootstrapping parameters.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasuryConfig {
    /// The treasury allocation.
    pub total: web3::types::U256,
    /// The allow-list contribution cap policy.
    pub contribution_cap: Option<balance_map::CapPolicy>,
}

///
/// The vesting terms.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingTerms {
    /// The vested amount.
    pub amount: web3::types::U256,
    /// The vesting period in months.
    pub period_months: web3::types::U256,
    /// The cliff in months.
    pub cliff_months: web3::types::U256,
}

///
/// The vesting schedule of an external beneficiary.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeneficiaryVesting {
    /// The beneficiary.
    pub beneficiary: web3::types::Address,
    /// The terms.
    pub terms: VestingTerms,
}

///
/// The vesting schedules.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingConfig {
    /// The development team.
    pub team: BeneficiaryVesting,
    /// The DAO. The beneficiary is the timelock.
    pub dao: VestingTerms,
    /// The advisors.
    pub advisors: Vec<BeneficiaryVesting>,
}

impl Config {
    ///
    /// Reads and validates the configuration file.
    ///
    pub fn load(path: &Path) -> Result<Self, Error> {
        Self::try_from(path)
    }
}

impl TryFrom<&Path> for Config {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let raw: raw::Config =
            serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Self::try_from(raw)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let raw: raw::Config = serde_json::from_str(string)?;
        Self::try_from(raw)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = Error;

    fn try_from(raw: raw::Config) -> Result<Self, Self::Error> {
        let factory = parse_address("factory", raw.factory.as_deref())?;
        let salt = parse_salt(raw.salt.as_deref())?;
        let project_domain = match raw.project_domain {
            Some(domain) if !domain.trim().is_empty() => domain.trim().to_owned(),
            _ => {
                return Err(Error::MissingField {
                    field: "projectDomain".to_owned(),
                })
            }
        };
        let total_supply = parse_positive("totalSupply", &raw.total_supply)?;

        let timelock = TimelockConfig::try_from(raw.timelock)?;

        let relayer = RelayerConfig {
            gateway: parse_address("relayer.gateway", raw.relayer.gateway.as_deref())?,
            gas_service: parse_address("relayer.gasService", raw.relayer.gas_service.as_deref())?,
        };

        let contribution_cap = raw
            .treasury
            .contribution_cap
            .as_ref()
            .map(parse_cap_policy)
            .transpose()?;
        let treasury = TreasuryConfig {
            total: parse_positive("treasury.total", &raw.treasury.total)?,
            contribution_cap,
        };

        let airdrop_total = parse_positive("airdrop.total", &raw.airdrop.total)?;

        let vesting = VestingConfig::try_from(raw.vesting)?;

        Ok(Self {
            factory,
            salt,
            project_domain,
            total_supply,
            contracts: raw.contracts,
            timelock,
            relayer,
            treasury,
            airdrop_total,
            vesting,
        })
    }
}

impl TryFrom<raw::Timelock> for TimelockConfig {
    type Error = Error;

    fn try_from(raw: raw::Timelock) -> Result<Self, Self::Error> {
        if raw.initial_selectors.len() != raw.initial_delays.len() {
            return Err(Error::SelectorDelayMismatch {
                selectors: raw.initial_selectors.len(),
                delays: raw.initial_delays.len(),
            });
        }

        let initial_selectors = raw
            .initial_selectors
            .iter()
            .map(|selector| parse_selector(selector.as_str()))
            .collect::<Result<Vec<[u8; 4]>, Error>>()?;
        let initial_delays = raw
            .initial_delays
            .iter()
            .enumerate()
            .map(|(index, delay)| {
                parse_quantity(format!("timelock.initialDelays[{index}]").as_str(), delay)
            })
            .collect::<Result<Vec<web3::types::U256>, Error>>()?;

        Ok(Self {
            min_delay: parse_quantity("timelock.minDelay", &raw.min_delay)?,
            initial_selectors,
            initial_delays,
            short_delay: parse_quantity("timelock.shortDelay", &raw.short_delay)?,
            default_delay: parse_quantity("timelock.defaultDelay", &raw.default_delay)?,
            long_delay: parse_quantity("timelock.longDelay", &raw.long_delay)?,
            voting_delay: parse_quantity("timelock.votingDelay", &raw.voting_delay)?,
            voting_period: parse_positive("timelock.votingPeriod", &raw.voting_period)?,
            proposal_threshold: parse_quantity(
                "timelock.proposalThreshold",
                &raw.proposal_threshold,
            )?,
            quorum_numerator: parse_positive("timelock.quorumNumerator", &raw.quorum_numerator)?,
        })
    }
}

impl TryFrom<raw::Vesting> for VestingConfig {
    type Error = Error;

    fn try_from(raw: raw::Vesting) -> Result<Self, Self::Error> {
        if raw.dao.beneficiary.is_some() {
            return Err(Error::DaoBeneficiary);
        }

        let team = BeneficiaryVesting::parse("vesting.team", &raw.team)?;
        let dao = VestingTerms::parse("vesting.dao", &raw.dao)?;
        let advisors = raw
            .advisors
            .iter()
            .enumerate()
            .map(|(index, schedule)| {
                BeneficiaryVesting::parse(format!("vesting.advisors[{index}]").as_str(), schedule)
            })
            .collect::<Result<Vec<BeneficiaryVesting>, Error>>()?;

        Ok(Self {
            team,
            dao,
            advisors,
        })
    }
}

impl VestingTerms {
    ///
    /// Validates the terms of the schedule at `field`.
    ///
    fn parse(field: &str, raw: &raw::Schedule) -> Result<Self, Error> {
        let cliff_months = match raw.cliff_months.as_ref() {
            Some(cliff) => parse_quantity(format!("{field}.cliffMonths").as_str(), cliff)?,
            None => web3::types::U256::zero(),
        };
        Ok(Self {
            amount: parse_positive(format!("{field}.amount").as_str(), &raw.amount)?,
            period_months: parse_positive(
                format!("{field}.periodMonths").as_str(),
                &raw.period_months,
            )?,
            cliff_months,
        })
    }
}

impl BeneficiaryVesting {
    ///
    /// Validates the schedule at `field`.
    ///
    fn parse(field: &str, raw: &raw::Schedule) -> Result<Self, Error> {
        Ok(Self {
            beneficiary: parse_address(
                format!("{field}.beneficiary").as_str(),
                raw.beneficiary.as_deref(),
            )?,
            terms: VestingTerms::parse(field, raw)?,
        })
    }
}

///
/// Parses a required address field.
///
fn parse_address(field: &str, value: Option<&str>) -> Result<web3::types::Address, Error> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => {
            return Err(Error::MissingField {
                field: field.to_owned(),
            })
        }
    };

    balance_map::parse_address(value).map_err(|error| Error::InvalidAddress {
        field: field.to_owned(),
        value: value.to_owned(),
        reason: match error {
            balance_map::AddressError::Invalid => "not a 20-byte hexadecimal string".to_owned(),
            balance_map::AddressError::Checksum { expected } => {
                format!("invalid checksum, expected `{expected}`")
            }
        },
    })
}

///
/// Parses the 32-byte salt.
///
fn parse_salt(value: Option<&str>) -> Result<web3::types::H256, Error> {
    let value = value.ok_or_else(|| Error::MissingField {
        field: "salt".to_owned(),
    })?;
    let digits = value.strip_prefix("0x").unwrap_or(value);
    match hex::decode(digits) {
        Ok(bytes) if bytes.len() == crate::BYTE_LENGTH_FIELD => {
            Ok(web3::types::H256::from_slice(bytes.as_slice()))
        }
        _ => Err(Error::InvalidSalt {
            value: value.to_owned(),
        }),
    }
}

///
/// Parses a 4-byte function selector.
///
fn parse_selector(value: &str) -> Result<[u8; 4], Error> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits)
        .ok()
        .and_then(|bytes| <[u8; 4]>::try_from(bytes.as_slice()).ok())
        .ok_or_else(|| Error::InvalidSelector {
            value: value.to_owned(),
        })
}

///
/// Parses an unsigned integer field.
///
fn parse_quantity(field: &str, value: &Quantity) -> Result<web3::types::U256, Error> {
    match value {
        Quantity::Number(number) => Ok(web3::types::U256::from(*number)),
        Quantity::String(string) => {
            balance_map::parse_amount(string.as_str()).map_err(|_| Error::InvalidAmount {
                field: field.to_owned(),
                value: string.to_owned(),
            })
        }
    }
}

///
/// Parses a strictly positive integer field.
///
fn parse_positive(field: &str, value: &Quantity) -> Result<web3::types::U256, Error> {
    let parsed = parse_quantity(field, value)?;
    if parsed.is_zero() {
        return Err(Error::ZeroAmount {
            field: field.to_owned(),
        });
    }
    Ok(parsed)
}

///
/// Parses and checks the contribution cap policy.
///
fn parse_cap_policy(raw: &raw::CapPolicy) -> Result<balance_map::CapPolicy, Error> {
    let policy = match raw {
        raw::CapPolicy::Entitlement => balance_map::CapPolicy::Entitlement,
        raw::CapPolicy::Fixed(value) => balance_map::CapPolicy::Fixed(parse_quantity(
            "treasury.contributionCap.fixed",
            value,
        )?),
        raw::CapPolicy::Fraction {
            numerator,
            denominator,
        } => balance_map::CapPolicy::Fraction {
            numerator: parse_quantity("treasury.contributionCap.fraction.numerator", numerator)?,
            denominator: parse_quantity(
                "treasury.contributionCap.fraction.denominator",
                denominator,
            )?,
        },
    };
    policy.validate()?;
    Ok(policy)
}
