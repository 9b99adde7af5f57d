//!
//! The contract spec resolver tests.
//!

use super::argument::Argument;
use super::recipient::Recipient;
use super::resolver::ContractSpecResolver;
use crate::address_predictor::AddressPredictor;
use crate::error::Error;

const TEMPLATE: &[u8] = &[0x60, 0x80, 0x60, 0x40, 0x52];

fn resolver() -> ContractSpecResolver {
    ContractSpecResolver::new(AddressPredictor::new(
        web3::types::Address::repeat_byte(0xce),
        web3::types::H256::repeat_byte(0x01),
    ))
}

#[test]
fn deterministic() {
    let arguments = vec![
        Argument::Address(web3::types::Address::repeat_byte(0x11)),
        Argument::uint(48),
    ];
    let first = resolver()
        .resolve("team.vesting", "Vesting", Some(TEMPLATE), arguments.clone())
        .expect("Always valid");
    let second = resolver()
        .resolve("team.vesting", "Vesting", Some(TEMPLATE), arguments)
        .expect("Always valid");

    assert_eq!(first, second);
    assert_eq!(first.predicted_address(), second.predicted_address());
}

#[test]
fn init_code_layout() {
    let address = web3::types::Address::repeat_byte(0x11);
    let spec = resolver()
        .resolve(
            "treasury",
            "TreasuryBootstrapping",
            Some(TEMPLATE),
            vec![Argument::Address(address)],
        )
        .expect("Always valid");

    let bytes = spec.init_code().as_bytes();
    assert_eq!(bytes.len(), TEMPLATE.len() + crate::BYTE_LENGTH_FIELD);
    assert_eq!(&bytes[..TEMPLATE.len()], TEMPLATE);
    assert!(bytes[TEMPLATE.len()..TEMPLATE.len() + 12]
        .iter()
        .all(|byte| *byte == 0));
    assert_eq!(&bytes[TEMPLATE.len() + 12..], address.as_bytes());
    assert_eq!(
        spec.predicted_address(),
        resolver()
            .predictor()
            .predict(&AddressPredictor::init_code_hash(bytes))
    );
    assert!(spec.init_code().to_hex().starts_with("0x6080604052"));
}

#[test]
fn arguments_change_address() {
    let first = resolver()
        .resolve("timelock", "Timelock", Some(TEMPLATE), vec![Argument::uint(600)])
        .expect("Always valid");
    let second = resolver()
        .resolve("timelock", "Timelock", Some(TEMPLATE), vec![Argument::uint(601)])
        .expect("Always valid");
    assert_ne!(first.predicted_address(), second.predicted_address());
}

#[test]
fn dependencies() {
    let resolver = resolver();
    let data = resolver
        .resolve("data", "Data", Some(TEMPLATE), vec![])
        .expect("Always valid");
    let timelock = resolver
        .resolve(
            "timelock",
            "Timelock",
            Some(TEMPLATE),
            vec![Argument::predicted(&data)],
        )
        .expect("Always valid");
    let token = resolver
        .resolve(
            "token",
            "Token",
            Some(TEMPLATE),
            vec![
                Argument::predicted(&data),
                Argument::Recipients(vec![Recipient::new(
                    timelock.name().to_owned(),
                    timelock.predicted_address(),
                    web3::types::U256::from(1000),
                )]),
                Argument::Tuple(vec![
                    Argument::predicted(&timelock),
                    Argument::Address(web3::types::Address::repeat_byte(0x22)),
                ]),
            ],
        )
        .expect("Always valid");

    assert!(data.depends_on().is_empty());
    assert_eq!(timelock.depends_on(), ["data".to_owned()]);
    assert_eq!(token.depends_on(), ["data".to_owned(), "timelock".to_owned()]);
}

#[test]
fn missing_init_code() {
    let result = resolver().resolve("token", "CoraToken", Some(&[][..]), vec![]);
    assert!(matches!(result, Err(Error::MissingInitCode { contract }) if contract == "CoraToken"));

    let result = resolver().resolve("token", "CoraToken", None, vec![]);
    assert!(matches!(result, Err(Error::MissingInitCode { .. })));
}
