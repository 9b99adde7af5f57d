//!
//! The planning accumulator threaded through the stages.
//!

use crate::contract::ContractSpec;
use crate::error::Error;
use crate::planner::recipients::Recipients;
use crate::planner::stage::Stage;

///
/// The planning accumulator.
///
/// Every stage consumes the state and returns the extended one.
///
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    /// The completed stages.
    pub completed: Vec<Stage>,
    /// The resolved contracts in resolution order.
    pub specs: Vec<ContractSpec>,
    /// The initial token distribution.
    pub recipients: Recipients,
    /// The airdrop balance map.
    pub airdrop: Option<balance_map::BalanceMap>,
    /// The treasury allow-list.
    pub treasury_allowlist: Option<balance_map::CappedBalanceMap>,
}

impl PlanState {
    ///
    /// Checks that the predecessors of `stage` have been completed.
    ///
    pub fn check_predecessors(&self, stage: Stage) -> Result<(), Error> {
        match stage
            .predecessors()
            .iter()
            .find(|predecessor| !self.completed.contains(predecessor))
        {
            Some(missing) => Err(Error::StageOrder {
                stage,
                missing: *missing,
            }),
            None => Ok(()),
        }
    }

    ///
    /// Returns the resolved contract `name`, as needed by `stage`.
    ///
    pub fn spec(&self, stage: Stage, name: &str) -> Result<&ContractSpec, Error> {
        self.specs
            .iter()
            .find(|spec| spec.name() == name)
            .ok_or_else(|| Error::UnresolvedReference {
                stage,
                contract: name.to_owned(),
            })
    }

    ///
    /// Marks `stage` as completed.
    ///
    pub fn complete(mut self, stage: Stage) -> Self {
        self.completed.push(stage);
        self
    }
}
