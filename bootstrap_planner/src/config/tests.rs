//!
//! The configuration tests.
//!

use std::str::FromStr;

use super::error::Error;
use super::Config;

/// The factory of the sample campaign.
pub(crate) const FACTORY: &str = "0xce0042b868300000d44a59004da54a005ffdcf9f";

///
/// Returns the sample campaign configuration as JSON.
///
pub(crate) fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "factory": FACTORY,
        "salt": "0x00000000000000000000000000000000636f726170726f746f636f6c32303232",
        "projectDomain": "coraprotocol.eth",
        "totalSupply": "100000000000000000000000000",
        "timelock": {
            "minDelay": "600",
            "initialSelectors": ["0xa9059cbb"],
            "initialDelays": [7200],
            "shortDelay": 600,
            "defaultDelay": 28800,
            "longDelay": 57600,
            "votingDelay": 14400,
            "votingPeriod": 21600,
            "proposalThreshold": "100000000000000000000000",
            "quorumNumerator": 50
        },
        "relayer": {
            "gateway": "0xe432150cce91c13a887f7D836923d5597adD8E31",
            "gasService": "0x2d5d7d31F671F86C782533cc367F14109a082712"
        },
        "treasury": {
            "total": "10000000000000000000000000",
            "contributionCap": { "fraction": { "numerator": 1, "denominator": 10 } }
        },
        "airdrop": {
            "total": "4000000000000000000000000"
        },
        "vesting": {
            "team": {
                "beneficiary": "0x1111111111111111111111111111111111111111",
                "amount": "30000000000000000000000000",
                "periodMonths": "48",
                "cliffMonths": "0"
            },
            "dao": {
                "amount": "54000000000000000000000000",
                "periodMonths": 48
            },
            "advisors": [
                {
                    "beneficiary": "0x2222222222222222222222222222222222222222",
                    "amount": "500000000000000000000000",
                    "periodMonths": 24,
                    "cliffMonths": 6
                },
                {
                    "beneficiary": "0x3333333333333333333333333333333333333333",
                    "amount": "500000000000000000000000",
                    "periodMonths": 24
                }
            ]
        }
    })
}

///
/// Returns the sample campaign configuration.
///
pub(crate) fn sample() -> Config {
    Config::from_str(sample_json().to_string().as_str()).expect("Always valid")
}

///
/// Parses the sample after applying `mutate` to its JSON.
///
fn mutated<F>(mutate: F) -> Result<Config, Error>
where
    F: FnOnce(&mut serde_json::Value),
{
    let mut json = sample_json();
    mutate(&mut json);
    Config::from_str(json.to_string().as_str())
}

#[test]
fn ok() {
    let config = sample();

    assert_eq!(config.project_domain, "coraprotocol.eth");
    assert_eq!(config.total_supply, web3::types::U256::exp10(26));
    assert_eq!(config.timelock.initial_selectors, vec![[0xa9u8, 0x05, 0x9c, 0xbb]]);
    assert_eq!(
        config.timelock.initial_delays,
        vec![web3::types::U256::from(7200)]
    );
    assert_eq!(config.vesting.advisors.len(), 2);
    assert_eq!(
        config.vesting.advisors[1].terms.cliff_months,
        web3::types::U256::zero()
    );
    assert_eq!(
        config.treasury.contribution_cap,
        Some(balance_map::CapPolicy::Fraction {
            numerator: web3::types::U256::from(1),
            denominator: web3::types::U256::from(10),
        })
    );
    assert_eq!(config.contracts.token, "CoraToken");
}

#[test]
fn contract_name_override() {
    let config = mutated(|json| {
        json["contracts"] = serde_json::json!({ "token": "LaunchToken" });
    })
    .expect("Always valid");

    assert_eq!(config.contracts.token, "LaunchToken");
    assert_eq!(config.contracts.governor, "CoraGovernor");
}

#[test]
fn missing_factory() {
    let result = mutated(|json| {
        json.as_object_mut()
            .expect("Always valid")
            .remove("factory");
    });
    assert!(matches!(result, Err(Error::MissingField { field }) if field == "factory"));
}

#[test]
fn invalid_salt() {
    let result = mutated(|json| json["salt"] = serde_json::json!("0x1234"));
    assert!(matches!(result, Err(Error::InvalidSalt { .. })));
}

#[test]
fn invalid_checksum() {
    let result = mutated(|json| {
        json["relayer"]["gateway"] = serde_json::json!("0xE432150cce91c13a887f7D836923d5597adD8E31");
    });
    assert!(
        matches!(result, Err(Error::InvalidAddress { field, .. }) if field == "relayer.gateway")
    );
}

#[test]
fn zero_amount() {
    let result = mutated(|json| json["vesting"]["advisors"][1]["amount"] = serde_json::json!("0"));
    assert!(
        matches!(result, Err(Error::ZeroAmount { field }) if field == "vesting.advisors[1].amount")
    );
}

#[test]
fn fractional_amount() {
    let result = mutated(|json| json["airdrop"]["total"] = serde_json::json!("4.5"));
    assert!(matches!(result, Err(Error::InvalidAmount { .. })));
}

#[test]
fn missing_beneficiary() {
    let result = mutated(|json| {
        json["vesting"]["team"]
            .as_object_mut()
            .expect("Always valid")
            .remove("beneficiary");
    });
    assert!(
        matches!(result, Err(Error::MissingField { field }) if field == "vesting.team.beneficiary")
    );
}

#[test]
fn dao_beneficiary() {
    let result = mutated(|json| {
        json["vesting"]["dao"]["beneficiary"] =
            serde_json::json!("0x1111111111111111111111111111111111111111");
    });
    assert!(matches!(result, Err(Error::DaoBeneficiary)));
}

#[test]
fn selector_delay_mismatch() {
    let result = mutated(|json| json["timelock"]["initialDelays"] = serde_json::json!([]));
    assert!(matches!(
        result,
        Err(Error::SelectorDelayMismatch {
            selectors: 1,
            delays: 0
        })
    ));
}

#[test]
fn invalid_selector() {
    let result =
        mutated(|json| json["timelock"]["initialSelectors"] = serde_json::json!(["transfer"]));
    assert!(matches!(result, Err(Error::InvalidSelector { .. })));
}

#[test]
fn zero_cap_denominator() {
    let result = mutated(|json| {
        json["treasury"]["contributionCap"] =
            serde_json::json!({ "fraction": { "numerator": 1, "denominator": 0 } });
    });
    assert!(matches!(result, Err(Error::CapPolicy(_))));
}

#[test]
fn failure_is_repeatable() {
    let first = mutated(|json| json["salt"] = serde_json::json!("salt"));
    let second = mutated(|json| json["salt"] = serde_json::json!("salt"));
    assert_eq!(
        first.map_err(|error| error.to_string()),
        second.map_err(|error| error.to_string())
    );
}
