//!
//! The complete deployment plan.
//!

use crate::address_predictor::AddressPredictor;
use crate::contract::recipient::Recipient;
use crate::contract::ContractSpec;
use crate::error::Error;

///
/// The complete deployment plan: every contract resolved, no address reference left open.
///
#[derive(Debug, Clone)]
pub struct Plan {
    /// The address predictor of the campaign.
    predictor: AddressPredictor,
    /// The contracts in stage order, from the governance data to the governor.
    specs: Vec<ContractSpec>,
    /// The governance initiation data launcher.
    launcher: ContractSpec,
    /// The frozen initial token distribution.
    recipients: Vec<Recipient>,
    /// The airdrop balance map.
    airdrop: balance_map::BalanceMap,
    /// The treasury allow-list.
    treasury_allowlist: Option<balance_map::CappedBalanceMap>,
}

impl Plan {
    ///
    /// A shortcut constructor.
    ///
    pub(crate) fn new(
        predictor: AddressPredictor,
        specs: Vec<ContractSpec>,
        launcher: ContractSpec,
        recipients: Vec<Recipient>,
        airdrop: balance_map::BalanceMap,
        treasury_allowlist: Option<balance_map::CappedBalanceMap>,
    ) -> Self {
        Self {
            predictor,
            specs,
            launcher,
            recipients,
            airdrop,
            treasury_allowlist,
        }
    }

    ///
    /// The address predictor of the campaign.
    ///
    pub fn predictor(&self) -> &AddressPredictor {
        &self.predictor
    }

    ///
    /// The contracts in stage order, without the launcher.
    ///
    pub fn specs(&self) -> &[ContractSpec] {
        self.specs.as_slice()
    }

    ///
    /// Returns the contract with the plan name `name`, the launcher included.
    ///
    pub fn spec(&self, name: &str) -> Option<&ContractSpec> {
        self.specs
            .iter()
            .chain(std::iter::once(&self.launcher))
            .find(|spec| spec.name() == name)
    }

    ///
    /// The governance initiation data launcher.
    ///
    pub fn launcher(&self) -> &ContractSpec {
        &self.launcher
    }

    ///
    /// The frozen initial token distribution.
    ///
    pub fn recipients(&self) -> &[Recipient] {
        self.recipients.as_slice()
    }

    ///
    /// The airdrop balance map.
    ///
    pub fn airdrop(&self) -> &balance_map::BalanceMap {
        &self.airdrop
    }

    ///
    /// The treasury allow-list, if one has been supplied.
    ///
    pub fn treasury_allowlist(&self) -> Option<&balance_map::CappedBalanceMap> {
        self.treasury_allowlist.as_ref()
    }

    ///
    /// Checks that the contracts form a DAG in plan order: every dependency of a contract
    /// is planned before it.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        let mut planned: Vec<&str> = Vec::with_capacity(self.specs.len() + 1);
        for spec in self.specs.iter().chain(std::iter::once(&self.launcher)) {
            if let Some(dependency) = spec
                .depends_on()
                .iter()
                .find(|dependency| !planned.contains(&dependency.as_str()))
            {
                return Err(Error::DanglingDependency {
                    contract: spec.name().to_owned(),
                    dependency: dependency.to_owned(),
                });
            }
            planned.push(spec.name());
        }
        Ok(())
    }
}
