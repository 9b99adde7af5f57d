//!
//! The capped balance map tests.
//!

use super::CapPolicy;
use super::CappedBalanceMap;
use crate::entry::BalanceEntry;
use crate::error::Error;
use crate::map::BalanceMap;

const ALICE: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const BOB: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

fn entries() -> Vec<BalanceEntry> {
    vec![
        BalanceEntry::new(ALICE, "1000"),
        BalanceEntry::new(BOB, "2000"),
    ]
}

#[test]
fn shares_the_uncapped_root() {
    let capped =
        CappedBalanceMap::build(entries(), &CapPolicy::Entitlement).expect("Always valid");
    let plain = BalanceMap::build(entries()).expect("Always valid");

    assert_eq!(capped.merkle_root, plain.merkle_root);
    assert_eq!(capped.token_total, plain.token_total);
    for (address, claim) in plain.claims.iter() {
        let capped_claim = &capped.claims[address];
        assert_eq!(capped_claim.index, claim.index);
        assert_eq!(capped_claim.proof, claim.proof);
        assert_eq!(capped_claim.max_contribution, claim.amount);
    }
}

#[test]
fn fraction() {
    let policy = CapPolicy::Fraction {
        numerator: web3::types::U256::from(1),
        denominator: web3::types::U256::from(4),
    };
    let capped = CappedBalanceMap::build(entries(), &policy).expect("Always valid");

    assert_eq!(
        capped.claims[ALICE].max_contribution,
        web3::types::U256::from(250)
    );
    assert_eq!(
        capped.claims[BOB].max_contribution,
        web3::types::U256::from(500)
    );
}

#[test]
fn fixed() {
    let policy = CapPolicy::Fixed(web3::types::U256::from(30_000));
    let capped = CappedBalanceMap::build(entries(), &policy).expect("Always valid");

    assert!(capped
        .claims
        .values()
        .all(|claim| claim.max_contribution == web3::types::U256::from(30_000)));
}

#[test]
fn rounds_down_to_zero() {
    let policy = CapPolicy::Fraction {
        numerator: web3::types::U256::from(1),
        denominator: web3::types::U256::from(5000),
    };
    let result = CappedBalanceMap::build(entries(), &policy);
    assert_eq!(
        result,
        Err(Error::ZeroCap {
            address: ALICE.to_owned()
        })
    );
}

#[test]
fn zero_denominator() {
    let policy = CapPolicy::Fraction {
        numerator: web3::types::U256::from(1),
        denominator: web3::types::U256::zero(),
    };
    assert!(matches!(
        CappedBalanceMap::build(entries(), &policy),
        Err(Error::InvalidCapPolicy { .. })
    ));
}

#[test]
fn serializes_max_contribution_as_decimal() {
    let policy = CapPolicy::Fixed(web3::types::U256::exp10(22));
    let capped = CappedBalanceMap::build(entries(), &policy).expect("Always valid");
    let json = serde_json::to_value(&capped).expect("Always valid");

    assert_eq!(
        json["claims"][ALICE]["maxContribution"],
        serde_json::Value::String("10000000000000000000000".to_owned())
    );
    assert_eq!(
        json["claims"][ALICE]["amount"],
        serde_json::Value::String("1000".to_owned())
    );
}
