//!
//! The deployer tests.
//!

use std::str::FromStr;

use super::error::Error;
use super::executor::Executor;
use super::simulated_deployer::SimulatedDeployer;
use super::Deployer;
use crate::ledger::Ledger;
use crate::planner::names;
use crate::summary::Summary;

const PROJECT_DOMAIN: &str = "coraprotocol.eth";

fn ledger() -> Ledger {
    let plan = crate::planner::tests::plan(&crate::config::tests::sample());
    let mut ledger = Ledger::default();
    ledger.record(&plan, PROJECT_DOMAIN);
    ledger
}

fn executor() -> Executor<SimulatedDeployer> {
    let config = crate::config::tests::sample();
    Executor::new(SimulatedDeployer::new(config.factory), config.salt)
}

#[test]
fn eip1014_vector() {
    let mut deployer = SimulatedDeployer::new(
        web3::types::Address::from_str("deadbeef00000000000000000000000000000000")
            .expect("Always valid"),
    );
    let address = deployer
        .deploy(&[0x00], web3::types::H256::zero())
        .expect("Always valid");
    assert_eq!(
        address,
        web3::types::Address::from_str("B928f69Bb1D91Cd65274e3c79d8986362984fDA3")
            .expect("Always valid")
    );
    assert_eq!(deployer.deployed_count(), 1);
}

#[test]
fn simulate_does_not_deploy() {
    let deployer = SimulatedDeployer::new(web3::types::Address::zero());
    let address = deployer
        .simulate(&[0x00], web3::types::H256::zero())
        .expect("Always valid");
    assert_eq!(deployer.deployed(&address), None);
    assert_eq!(deployer.deployed_count(), 0);
}

#[test]
fn occupied_address() {
    let mut deployer = SimulatedDeployer::new(web3::types::Address::zero());
    let address = deployer
        .deploy(&[0xde, 0xad], web3::types::H256::zero())
        .expect("Always valid");
    assert_eq!(
        deployer.deploy(&[0xde, 0xad], web3::types::H256::zero()),
        Err(Error::AlreadyDeployed { address })
    );
    assert!(deployer
        .deploy(&[0xde, 0xad], web3::types::H256::repeat_byte(0x01))
        .is_ok());
}

#[test]
fn empty_bytecode() {
    let mut deployer = SimulatedDeployer::new(web3::types::Address::zero());
    assert_eq!(
        deployer.deploy(&[], web3::types::H256::zero()),
        Err(Error::EmptyBytecode)
    );
}

#[test]
fn replay() {
    let ledger = ledger();
    let mut executor = executor();
    let mut summary = Summary::new(false, true);

    let deployed = executor
        .replay(&ledger, PROJECT_DOMAIN, &mut summary)
        .expect("Always valid");

    let expected: Vec<web3::types::Address> = ledger
        .actions
        .iter()
        .skip(1)
        .map(|action| action.expected_address)
        .collect();
    assert_eq!(deployed, expected);
    assert_eq!(executor.deployer().deployed_count(), 11);
    assert!(summary.is_successful());
}

#[test]
fn replay_twice() {
    let ledger = ledger();
    let mut executor = executor();
    executor
        .replay(&ledger, PROJECT_DOMAIN, &mut Summary::new(false, true))
        .expect("Always valid");

    let mut summary = Summary::new(false, true);
    let result = executor.replay(&ledger, PROJECT_DOMAIN, &mut summary);
    assert!(matches!(result, Err(Error::AlreadyDeployed { .. })));
    assert!(!summary.is_successful());
}

#[test]
fn tampered_bytecode_aborts() {
    let mut ledger = ledger();
    let relayer_domain = Ledger::domain(names::RELAYER, PROJECT_DOMAIN);
    let relayer = ledger
        .actions
        .iter_mut()
        .find(|action| action.domain == relayer_domain)
        .expect("Always exists");
    relayer.bytecode.push_str("00");
    let expected = relayer.expected_address;

    let mut executor = executor();
    let result = executor.replay(&ledger, PROJECT_DOMAIN, &mut Summary::new(false, true));
    assert!(matches!(
        result,
        Err(Error::AddressMismatch { domain, expected: mismatched, .. })
            if domain == relayer_domain && mismatched == expected
    ));
    assert_eq!(
        executor.deployer().deployed_count(),
        4,
        "the data, treasury, team vesting and timelock actions precede the relayer"
    );
}

#[test]
fn wrong_salt() {
    let ledger = ledger();
    let config = crate::config::tests::sample();
    let mut executor = Executor::new(
        SimulatedDeployer::new(config.factory),
        web3::types::H256::repeat_byte(0x42),
    );

    let result = executor.replay(&ledger, PROJECT_DOMAIN, &mut Summary::new(false, true));
    assert!(matches!(
        result,
        Err(Error::AddressMismatch { domain, .. }) if domain == Ledger::domain(names::DATA, PROJECT_DOMAIN)
    ));
    assert_eq!(executor.deployer().deployed_count(), 0);
}

#[test]
fn factory_mismatch() {
    let ledger = ledger();
    let config = crate::config::tests::sample();
    let mut executor = Executor::new(
        SimulatedDeployer::new(web3::types::Address::repeat_byte(0x01)),
        config.salt,
    );

    let result = executor.replay(&ledger, PROJECT_DOMAIN, &mut Summary::new(false, true));
    assert_eq!(
        result,
        Err(Error::FactoryMismatch {
            expected: config.factory,
            found: web3::types::Address::repeat_byte(0x01),
        })
    );
}

#[test]
fn missing_factory() {
    let mut ledger = ledger();
    ledger.actions.remove(0);

    let result = executor().replay(&ledger, PROJECT_DOMAIN, &mut Summary::new(false, true));
    assert_eq!(
        result,
        Err(Error::MissingFactory {
            domain: "deployer.contract.coraprotocol.eth".to_owned()
        })
    );
}

#[test]
fn invalid_bytecode() {
    let mut ledger = ledger();
    ledger.actions[1].bytecode = "0xzz".to_owned();

    let result = executor().replay(&ledger, PROJECT_DOMAIN, &mut Summary::new(false, true));
    assert!(matches!(result, Err(Error::InvalidBytecode { .. })));
}
