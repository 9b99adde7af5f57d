//!
//! The deployment ledger tests.
//!

use std::str::FromStr;

use super::Ledger;
use crate::planner::names;

const PROJECT_DOMAIN: &str = "coraprotocol.eth";

fn domain(label: &str) -> String {
    Ledger::domain(label, PROJECT_DOMAIN)
}

fn recorded() -> Ledger {
    let plan = crate::planner::tests::plan(&crate::config::tests::sample());
    let mut ledger = Ledger::default();
    ledger.record(&plan, PROJECT_DOMAIN);
    ledger
}

#[test]
fn domains_in_order() {
    let ledger = recorded();

    let domains: Vec<&str> = ledger
        .actions
        .iter()
        .map(|action| action.domain.as_str())
        .collect();
    assert_eq!(
        domains,
        vec![
            "deployer.contract.coraprotocol.eth",
            "data.contract.coraprotocol.eth",
            "treasury.contract.coraprotocol.eth",
            "team.vesting.contract.coraprotocol.eth",
            "timelock.contract.coraprotocol.eth",
            "relayer.contract.coraprotocol.eth",
            "dao.vesting.contract.coraprotocol.eth",
            "advisor-0.vesting.contract.coraprotocol.eth",
            "advisor-1.vesting.contract.coraprotocol.eth",
            "airdrop.contract.coraprotocol.eth",
            "token.contract.coraprotocol.eth",
            "governor.contract.coraprotocol.eth",
        ]
    );
}

#[test]
fn factory_action() {
    let ledger = recorded();
    let factory = &ledger.actions[0];

    assert_eq!(factory.contract, Ledger::FACTORY_CONTRACT);
    assert!(!factory.has_bytecode());
    assert_eq!(
        factory.expected_address,
        balance_map::parse_address(crate::config::tests::FACTORY).expect("Always valid")
    );
    assert!(factory.depends_on.is_empty());
}

#[test]
fn data_action_deploys_the_launcher() {
    let plan = crate::planner::tests::plan(&crate::config::tests::sample());
    let ledger = recorded();
    let data = ledger
        .action(domain(names::DATA).as_str())
        .expect("Always exists");

    assert_eq!(data.contract, "GovernanceInitiationDataDeployer.sol");
    assert_eq!(data.bytecode, plan.launcher().init_code().to_hex());
    assert_eq!(data.expected_address, plan.launcher().predicted_address());
    assert_eq!(
        data.depends_on,
        vec![
            domain(names::TOKEN),
            domain(names::TIMELOCK),
            domain(names::GOVERNOR),
            domain(Ledger::FACTORY_LABEL),
        ]
    );
}

#[test]
fn depends_on_data_and_factory() {
    let ledger = recorded();
    let treasury = ledger
        .action(domain(names::TREASURY).as_str())
        .expect("Always exists");

    assert_eq!(treasury.contract, "TreasuryBootstrapping.sol");
    assert_eq!(
        treasury.depends_on,
        vec![domain(names::DATA), domain(Ledger::FACTORY_LABEL)]
    );
}

#[test]
fn payloads() {
    let plan = crate::planner::tests::plan(&crate::config::tests::sample());
    let ledger = recorded();

    for action in ledger.actions.iter() {
        let is_token = action.domain == domain(names::TOKEN);
        let is_airdrop = action.domain == domain(names::AIRDROP);
        assert_eq!(action.recipients.is_some(), is_token, "{}", action.domain);
        assert_eq!(action.merkle_root.is_some(), is_airdrop, "{}", action.domain);
    }

    let token = ledger
        .action(domain(names::TOKEN).as_str())
        .expect("Always exists");
    assert_eq!(token.recipients.as_deref(), Some(plan.recipients()));
    let airdrop = ledger
        .action(domain(names::AIRDROP).as_str())
        .expect("Always exists");
    assert_eq!(airdrop.merkle_root, Some(plan.airdrop().merkle_root));
}

#[test]
fn json_shape() {
    let ledger = recorded();
    let json = ledger.to_json().expect("Always valid");

    assert!(json.starts_with("{\n    \"actions\": [\n        {\n            \"domain\""));

    let value = serde_json::Value::from_str(json.as_str()).expect("Always valid");
    let token = &value["actions"][10];
    assert_eq!(token["recipients"][0]["amount"], "10000000000000000000000000");
    assert!(token["recipients"][0].get("contract").is_none());
    assert!(token["bytecode"]
        .as_str()
        .expect("Always exists")
        .starts_with("0x"));
    assert!(value["actions"][0].get("recipients").is_none());
    assert!(value["actions"][9]["merkleRoot"]
        .as_str()
        .expect("Always exists")
        .starts_with("0x"));
}

#[test]
fn idempotent() {
    let plan = crate::planner::tests::plan(&crate::config::tests::sample());
    let mut ledger = recorded();
    let first = ledger.to_json().expect("Always valid");

    ledger.record(&plan, PROJECT_DOMAIN);
    let second = ledger.to_json().expect("Always valid");

    assert_eq!(ledger.actions.len(), 12);
    assert_eq!(first, second);
}

#[test]
fn reloads_its_own_output() {
    let ledger = recorded();
    let json = ledger.to_json().expect("Always valid");

    let reloaded: Ledger = serde_json::from_str(json.as_str()).expect("Always valid");
    assert_eq!(reloaded.actions.len(), ledger.actions.len());
    assert_eq!(reloaded.to_json().expect("Always valid"), json);
}

#[test]
fn template_is_preserved() {
    let template = serde_json::json!({
        "name": "Cora bootstrap",
        "version": 2,
        "actions": [
            {
                "domain": "deployer.contract.coraprotocol.eth",
                "contract": "Create2Deployer.sol",
                "bytecode": "0x",
                "expectedAddress": "0x0000000000000000000000000000000000000001",
                "title": "Deployer"
            },
            {
                "domain": "token.contract.coraprotocol.eth",
                "contract": "Old.sol",
                "bytecode": "0x00",
                "expectedAddress": "0x0000000000000000000000000000000000000002",
                "title": "Cora Token",
                "description": "The governance token",
                "dependsOn": []
            }
        ]
    });
    let mut ledger: Ledger = serde_json::from_value(template).expect("Always valid");
    let plan = crate::planner::tests::plan(&crate::config::tests::sample());
    ledger.record(&plan, PROJECT_DOMAIN);

    assert_eq!(ledger.metadata["name"], "Cora bootstrap");
    assert_eq!(ledger.metadata["version"], 2);
    assert_eq!(ledger.actions.len(), 12);

    let factory = &ledger.actions[0];
    assert_eq!(factory.contract, "Create2Deployer.sol");
    assert_eq!(factory.expected_address, plan.predictor().factory());
    assert_eq!(factory.extra["title"], "Deployer");

    let token = &ledger.actions[1];
    assert_eq!(token.domain, domain(names::TOKEN));
    assert_eq!(token.contract, "CoraToken.sol");
    assert_eq!(token.extra["title"], "Cora Token");
    assert_eq!(token.extra["description"], "The governance token");
    assert_eq!(
        token.expected_address,
        plan.spec(names::TOKEN)
            .expect("Always exists")
            .predicted_address()
    );

    let json = ledger.to_json().expect("Always valid");
    assert!(json.starts_with("{\n    \"name\": \"Cora bootstrap\",\n    \"version\": 2,"));
}

#[test]
fn first_step() {
    let mut ledger = recorded();
    ledger
        .metadata
        .insert("name".to_owned(), serde_json::Value::from("Cora bootstrap"));

    let first_step = ledger.first_step(PROJECT_DOMAIN);
    assert_eq!(first_step.metadata, ledger.metadata);
    assert_eq!(first_step.actions.as_slice(), &ledger.actions[..2]);
}

#[test]
fn rerecording_a_smaller_plan() {
    let config = crate::config::tests::sample();
    let mut smaller = config.clone();
    smaller.vesting.advisors.truncate(1);
    let smaller_plan = crate::planner::tests::plan(&smaller);

    let mut fresh = Ledger::default();
    fresh.record(&smaller_plan, PROJECT_DOMAIN);

    let mut ledger = recorded();
    let multisig = domain("multisig");
    let mut operator_action = ledger.actions[2].clone();
    operator_action.domain = multisig.clone();
    ledger.actions.push(operator_action);
    ledger.record(&smaller_plan, PROJECT_DOMAIN);

    assert!(ledger.action(domain("advisor-1.vesting").as_str()).is_none());
    assert!(ledger.action(multisig.as_str()).is_some());

    ledger.actions.retain(|action| action.domain != multisig);
    assert_eq!(ledger.actions.len(), 11);
    assert_eq!(
        ledger.to_json().expect("Always valid"),
        fresh.to_json().expect("Always valid")
    );
}
