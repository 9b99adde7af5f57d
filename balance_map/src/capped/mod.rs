//!
//! The capped balance map, used for the private fundraising allow-list.
//!

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::entry::BalanceEntry;
use crate::error::Error;
use crate::map::BalanceMap;

///
/// The policy deriving a contribution ceiling from an entitlement.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapPolicy {
    /// The ceiling equals the entitlement.
    Entitlement,
    /// The ceiling is `amount * numerator / denominator`, rounded down.
    Fraction {
        /// The fraction numerator.
        numerator: web3::types::U256,
        /// The fraction denominator.
        denominator: web3::types::U256,
    },
    /// The same ceiling for every account.
    Fixed(web3::types::U256),
}

impl CapPolicy {
    ///
    /// Checks the policy parameters.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Entitlement => Ok(()),
            Self::Fraction { denominator, .. } if denominator.is_zero() => {
                Err(Error::InvalidCapPolicy {
                    reason: "the fraction denominator is zero".to_owned(),
                })
            }
            Self::Fraction { numerator, .. } if numerator.is_zero() => {
                Err(Error::InvalidCapPolicy {
                    reason: "the fraction numerator is zero".to_owned(),
                })
            }
            Self::Fraction { .. } => Ok(()),
            Self::Fixed(value) if value.is_zero() => Err(Error::InvalidCapPolicy {
                reason: "the fixed cap is zero".to_owned(),
            }),
            Self::Fixed(_) => Ok(()),
        }
    }

    ///
    /// Returns the ceiling for the entitlement.
    ///
    pub fn cap(&self, amount: &web3::types::U256) -> Result<web3::types::U256, Error> {
        match self {
            Self::Entitlement => Ok(*amount),
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let scaled = amount
                    .checked_mul(*numerator)
                    .ok_or_else(|| Error::InvalidCapPolicy {
                        reason: format!("`{amount} * {numerator}` overflows 256 bits"),
                    })?;
                scaled
                    .checked_div(*denominator)
                    .ok_or_else(|| Error::InvalidCapPolicy {
                        reason: "the fraction denominator is zero".to_owned(),
                    })
            }
            Self::Fixed(value) => Ok(*value),
        }
    }
}

///
/// The capped claim: a regular claim plus the contribution ceiling.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CappedClaim {
    /// The leaf index.
    pub index: u64,
    /// The entitlement committed to by the leaf.
    #[serde(with = "crate::amount::decimal")]
    pub amount: web3::types::U256,
    /// The maximum contribution allowed for the account.
    #[serde(with = "crate::amount::decimal")]
    pub max_contribution: web3::types::U256,
    /// The sibling hashes from the leaf to the root.
    pub proof: Vec<web3::types::H256>,
}

///
/// The capped balance map.
///
/// The tree is exactly the one [`BalanceMap::build`] produces for the same entries, so a
/// capped map and an uncapped map over the same input share the root.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CappedBalanceMap {
    /// The Merkle root.
    pub merkle_root: web3::types::H256,
    /// The sum of all entitlements.
    #[serde(with = "crate::amount::decimal")]
    pub token_total: web3::types::U256,
    /// The claims keyed by the checksummed recipient address.
    pub claims: BTreeMap<String, CappedClaim>,
}

impl CappedBalanceMap {
    ///
    /// Builds the capped balance map.
    ///
    pub fn build<I>(entries: I, policy: &CapPolicy) -> Result<Self, Error>
    where
        I: IntoIterator<Item = BalanceEntry>,
    {
        policy.validate()?;

        let map = BalanceMap::build(entries)?;
        let mut claims = BTreeMap::new();
        for (address, claim) in map.claims.into_iter() {
            let max_contribution = policy.cap(&claim.amount)?;
            if max_contribution.is_zero() {
                return Err(Error::ZeroCap { address });
            }
            claims.insert(
                address,
                CappedClaim {
                    index: claim.index,
                    amount: claim.amount,
                    max_contribution,
                    proof: claim.proof,
                },
            );
        }

        Ok(Self {
            merkle_root: map.merkle_root,
            token_total: map.token_total,
            claims,
        })
    }
}
