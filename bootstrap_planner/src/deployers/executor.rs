//!
//! The deployment ledger executor.
//!

use crate::ledger::action::Action;
use crate::ledger::Ledger;
use crate::summary::Summary;

use super::error::Error;
use super::Deployer;

///
/// The deployment ledger executor.
///
/// Replays the ledger actions in order through the deployer, checking every realized
/// address against the predicted one.
///
#[derive(Debug)]
pub struct Executor<D>
where
    D: Deployer,
{
    /// The factory deployer.
    deployer: D,
    /// The campaign salt.
    salt: web3::types::H256,
}

impl<D> Executor<D>
where
    D: Deployer,
{
    /// The summary step name.
    const STEP: &'static str = "replay";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(deployer: D, salt: web3::types::H256) -> Self {
        Self { deployer, salt }
    }

    ///
    /// Returns the deployer.
    ///
    pub fn deployer(&self) -> &D {
        &self.deployer
    }

    ///
    /// Replays the ledger, returning the deployed addresses in order.
    ///
    /// Actions without bytecode, such as the factory itself, are skipped. The first error
    /// aborts the replay.
    ///
    pub fn replay(
        &mut self,
        ledger: &Ledger,
        project_domain: &str,
        summary: &mut Summary,
    ) -> Result<Vec<web3::types::Address>, Error> {
        let factory_domain = Ledger::domain(Ledger::FACTORY_LABEL, project_domain);
        if let Err(error) = self.check_factory(ledger, factory_domain.as_str()) {
            summary.failed(Self::STEP, factory_domain.as_str(), &error);
            return Err(error);
        }

        let mut deployed = Vec::with_capacity(ledger.actions.len());
        for action in ledger
            .actions
            .iter()
            .filter(|action| action.has_bytecode())
        {
            match self.execute(action) {
                Ok(address) => {
                    summary.deployed(Self::STEP, action.domain.as_str(), address);
                    deployed.push(address);
                }
                Err(error) => {
                    summary.failed(Self::STEP, action.domain.as_str(), &error);
                    return Err(error);
                }
            }
        }
        Ok(deployed)
    }

    ///
    /// Checks that the ledger factory is the deployer one.
    ///
    fn check_factory(&self, ledger: &Ledger, factory_domain: &str) -> Result<(), Error> {
        let action = ledger
            .action(factory_domain)
            .ok_or_else(|| Error::MissingFactory {
                domain: factory_domain.to_owned(),
            })?;
        if action.expected_address != self.deployer.factory() {
            return Err(Error::FactoryMismatch {
                expected: action.expected_address,
                found: self.deployer.factory(),
            });
        }
        Ok(())
    }

    ///
    /// Simulates, then deploys the action.
    ///
    fn execute(&mut self, action: &Action) -> Result<web3::types::Address, Error> {
        let bytecode = hex::decode(action.bytecode.trim_start_matches("0x")).map_err(|_| {
            Error::InvalidBytecode {
                domain: action.domain.clone(),
            }
        })?;

        let simulated = self.deployer.simulate(bytecode.as_slice(), self.salt)?;
        Self::check_address(action, simulated)?;
        let deployed = self.deployer.deploy(bytecode.as_slice(), self.salt)?;
        Self::check_address(action, deployed)?;
        Ok(deployed)
    }

    ///
    /// Checks the realized address against the predicted one.
    ///
    fn check_address(action: &Action, found: web3::types::Address) -> Result<(), Error> {
        if found != action.expected_address {
            return Err(Error::AddressMismatch {
                domain: action.domain.clone(),
                expected: action.expected_address,
                found,
            });
        }
        Ok(())
    }
}
