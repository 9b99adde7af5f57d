//!
//! The deployment planner.
//!

pub mod names;
pub mod plan;
pub mod recipients;
pub mod stage;
pub mod state;


use itertools::Itertools;

use crate::address_predictor::AddressPredictor;
use crate::artifacts::Artifacts;
use crate::config::BeneficiaryVesting;
use crate::config::Config;
use crate::config::VestingTerms;
use crate::contract::argument::Argument;
use crate::contract::recipient::Recipient;
use crate::contract::resolver::ContractSpecResolver;
use crate::contract::ContractSpec;
use crate::error::Error;
use crate::summary::Summary;

use self::plan::Plan;
use self::stage::Stage;
use self::state::PlanState;

///
/// The deployment planner.
///
/// Resolves every campaign contract in stage order, without any network access.
///
#[derive(Debug)]
pub struct Planner<'a> {
    /// The campaign configuration.
    config: &'a Config,
    /// The creation bytecode source.
    artifacts: &'a Artifacts,
    /// The airdrop entitlements.
    airdrop: Vec<balance_map::BalanceEntry>,
    /// The treasury allow-list entitlements.
    treasury_allowlist: Option<Vec<balance_map::BalanceEntry>>,
    /// The contract spec resolver.
    resolver: ContractSpecResolver,
}

impl<'a> Planner<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        config: &'a Config,
        artifacts: &'a Artifacts,
        airdrop: Vec<balance_map::BalanceEntry>,
    ) -> Self {
        Self {
            config,
            artifacts,
            airdrop,
            treasury_allowlist: None,
            resolver: ContractSpecResolver::new(AddressPredictor::new(
                config.factory,
                config.salt,
            )),
        }
    }

    ///
    /// Adds the treasury allow-list, committed to with the configured contribution caps.
    ///
    pub fn with_treasury_allowlist(mut self, entries: Vec<balance_map::BalanceEntry>) -> Self {
        self.treasury_allowlist = Some(entries);
        self
    }

    ///
    /// Runs all stages.
    ///
    /// Every stage outcome is recorded to `summary`. The first failure aborts planning.
    ///
    pub fn plan(&self, summary: &mut Summary) -> Result<Plan, Error> {
        if let Err(error) = self.check_init_codes() {
            summary.failed("preflight", "artifacts", &error);
            return Err(error);
        }

        let mut state = Stage::ALL
            .into_iter()
            .try_fold(PlanState::default(), |state, stage| {
                match state
                    .check_predecessors(stage)
                    .and_then(|()| self.run(state, stage, summary))
                {
                    Ok(state) => Ok(state.complete(stage)),
                    Err(error) => {
                        summary.failed(stage, "", &error);
                        Err(error)
                    }
                }
            })?;

        let launcher = state
            .specs
            .pop()
            .filter(|spec| spec.name() == names::LAUNCHER)
            .ok_or_else(|| Error::UnresolvedReference {
                stage: Stage::Launcher,
                contract: names::LAUNCHER.to_owned(),
            })?;
        let airdrop = state.airdrop.ok_or_else(|| Error::UnresolvedReference {
            stage: Stage::Airdrop,
            contract: names::AIRDROP.to_owned(),
        })?;

        let plan = Plan::new(
            *self.resolver.predictor(),
            state.specs,
            launcher,
            state.recipients.into(),
            airdrop,
            state.treasury_allowlist,
        );
        plan.validate()?;
        Ok(plan)
    }

    ///
    /// Checks that every creation bytecode is present before any stage runs.
    ///
    fn check_init_codes(&self) -> Result<(), Error> {
        for contract in self.config.contracts.iter().unique() {
            if self
                .artifacts
                .bytecode(contract)
                .map_or(true, |bytecode| bytecode.is_empty())
            {
                return Err(Error::MissingInitCode {
                    contract: contract.to_owned(),
                });
            }
        }
        Ok(())
    }

    ///
    /// Runs one stage.
    ///
    fn run(
        &self,
        state: PlanState,
        stage: Stage,
        summary: &mut Summary,
    ) -> Result<PlanState, Error> {
        match stage {
            Stage::GovernanceData => self.governance_data(state, summary),
            Stage::Treasury => self.treasury(state, summary),
            Stage::TeamVesting => self.team_vesting(state, summary),
            Stage::Timelock => self.timelock(state, summary),
            Stage::Relayer => self.relayer(state, summary),
            Stage::DaoVesting => self.dao_vesting(state, summary),
            Stage::AdvisorVesting => self.advisor_vesting(state, summary),
            Stage::BalanceMap => self.balance_map(state, summary),
            Stage::Airdrop => self.airdrop(state, summary),
            Stage::Token => self.token(state, summary),
            Stage::Governor => self.governor(state, summary),
            Stage::Launcher => self.launcher(state, summary),
        }
    }

    fn governance_data(
        &self,
        state: PlanState,
        summary: &mut Summary,
    ) -> Result<PlanState, Error> {
        let contract = self.config.contracts.governance_data.as_str();
        let spec = self.resolve(names::DATA, contract, vec![])?;
        Ok(Self::push_spec(state, Stage::GovernanceData, spec, summary))
    }

    fn treasury(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Treasury;
        let data = state.spec(stage, names::DATA)?;

        let spec = self.resolve(
            names::TREASURY,
            self.config.contracts.treasury.as_str(),
            vec![Argument::predicted(data)],
        )?;
        let amount = self.config.treasury.total;
        let state = Self::push_spec(state, stage, spec.clone(), summary);
        Self::push_recipient(state, stage, &spec, amount, summary)
    }

    fn team_vesting(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::TeamVesting;
        let data = state.spec(stage, names::DATA)?;
        let BeneficiaryVesting { beneficiary, terms } = &self.config.vesting.team;

        let spec = self.vesting(
            names::TEAM_VESTING,
            data,
            Argument::Address(*beneficiary),
            terms,
        )?;
        let state = Self::push_spec(state, stage, spec.clone(), summary);
        Self::push_recipient(state, stage, &spec, terms.amount, summary)
    }

    fn timelock(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Timelock;
        let data = state.spec(stage, names::DATA)?;

        let spec = self.resolve(
            names::TIMELOCK,
            self.config.contracts.timelock.as_str(),
            vec![
                Argument::Uint(self.config.timelock.min_delay),
                Argument::Addresses(vec![]),
                Argument::Addresses(vec![]),
                Argument::predicted(data),
            ],
        )?;
        Ok(Self::push_spec(state, stage, spec, summary))
    }

    fn relayer(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Relayer;
        let timelock = state.spec(stage, names::TIMELOCK)?;

        let spec = self.resolve(
            names::RELAYER,
            self.config.contracts.relayer.as_str(),
            vec![
                Argument::Address(self.config.relayer.gateway),
                Argument::Address(self.config.relayer.gas_service),
                Argument::predicted(timelock),
            ],
        )?;
        Ok(Self::push_spec(state, stage, spec, summary))
    }

    fn dao_vesting(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::DaoVesting;
        let data = state.spec(stage, names::DATA)?;
        let timelock = state.spec(stage, names::TIMELOCK)?;
        let terms = &self.config.vesting.dao;

        let spec = self.vesting(
            names::DAO_VESTING,
            data,
            Argument::predicted(timelock),
            terms,
        )?;
        let state = Self::push_spec(state, stage, spec.clone(), summary);
        Self::push_recipient(state, stage, &spec, terms.amount, summary)
    }

    fn advisor_vesting(
        &self,
        state: PlanState,
        summary: &mut Summary,
    ) -> Result<PlanState, Error> {
        let stage = Stage::AdvisorVesting;
        self.config.vesting.advisors.iter().enumerate().try_fold(
            state,
            |state, (index, BeneficiaryVesting { beneficiary, terms })| {
                let data = state.spec(stage, names::DATA)?;
                let spec = self.vesting(
                    names::advisor_vesting(index).as_str(),
                    data,
                    Argument::Address(*beneficiary),
                    terms,
                )?;
                let state = Self::push_spec(state, stage, spec.clone(), summary);
                Self::push_recipient(state, stage, &spec, terms.amount, summary)
            },
        )
    }

    fn balance_map(
        &self,
        mut state: PlanState,
        summary: &mut Summary,
    ) -> Result<PlanState, Error> {
        let stage = Stage::BalanceMap;

        let airdrop = balance_map::BalanceMap::build(self.airdrop.iter().cloned())
            .map_err(Error::AirdropBalanceMap)?;
        if airdrop.token_total > self.config.airdrop_total {
            return Err(Error::AirdropUnderfunded {
                entitled: airdrop.token_total,
                allocated: self.config.airdrop_total,
            });
        }
        summary.committed(
            stage,
            names::AIRDROP,
            airdrop.merkle_root,
            airdrop.claims.len(),
            airdrop.token_total,
        );
        state.airdrop = Some(airdrop);

        if let Some(entries) = self.treasury_allowlist.as_ref() {
            let policy = self
                .config
                .treasury
                .contribution_cap
                .clone()
                .unwrap_or(balance_map::CapPolicy::Entitlement);
            let allowlist = balance_map::CappedBalanceMap::build(entries.iter().cloned(), &policy)
                .map_err(Error::TreasuryAllowlist)?;
            summary.committed(
                stage,
                names::TREASURY,
                allowlist.merkle_root,
                allowlist.claims.len(),
                allowlist.token_total,
            );
            state.treasury_allowlist = Some(allowlist);
        }

        Ok(state)
    }

    fn airdrop(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Airdrop;
        let data = state.spec(stage, names::DATA)?;
        let root = state
            .airdrop
            .as_ref()
            .map(|airdrop| airdrop.merkle_root)
            .ok_or_else(|| Error::UnresolvedReference {
                stage,
                contract: names::AIRDROP.to_owned(),
            })?;

        let spec = self.resolve(
            names::AIRDROP,
            self.config.contracts.airdrop.as_str(),
            vec![Argument::predicted(data), Argument::Bytes32(root)],
        )?;
        let amount = self.config.airdrop_total;
        let state = Self::push_spec(state, stage, spec.clone(), summary);
        Self::push_recipient(state, stage, &spec, amount, summary)
    }

    fn token(&self, mut state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Token;

        let distributed = state.recipients.total();
        if distributed > self.config.total_supply {
            return Err(Error::SupplyExceeded {
                distributed,
                total_supply: self.config.total_supply,
            });
        }
        let recipients = state.recipients.freeze().to_vec();

        let data = state.spec(stage, names::DATA)?;
        let spec = self.resolve(
            names::TOKEN,
            self.config.contracts.token.as_str(),
            vec![Argument::predicted(data), Argument::Recipients(recipients)],
        )?;
        Ok(Self::push_spec(state, stage, spec, summary))
    }

    fn governor(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Governor;
        let token = state.spec(stage, names::TOKEN)?;
        let timelock = state.spec(stage, names::TIMELOCK)?;
        let relayer = state.spec(stage, names::RELAYER)?;
        let parameters = &self.config.timelock;

        let spec = self.resolve(
            names::GOVERNOR,
            self.config.contracts.governor.as_str(),
            vec![Argument::Tuple(vec![
                Argument::predicted(token),
                Argument::predicted(timelock),
                Argument::predicted(relayer),
                Argument::Selectors(parameters.initial_selectors.clone()),
                Argument::Uints(parameters.initial_delays.clone()),
                Argument::Uint(parameters.short_delay),
                Argument::Uint(parameters.default_delay),
                Argument::Uint(parameters.long_delay),
                Argument::Uint(parameters.voting_delay),
                Argument::Uint(parameters.voting_period),
                Argument::Uint(parameters.proposal_threshold),
                Argument::Uint(parameters.quorum_numerator),
            ])],
        )?;
        Ok(Self::push_spec(state, stage, spec, summary))
    }

    fn launcher(&self, state: PlanState, summary: &mut Summary) -> Result<PlanState, Error> {
        let stage = Stage::Launcher;
        let data = state.spec(stage, names::DATA)?;
        let token = state.spec(stage, names::TOKEN)?;
        let timelock = state.spec(stage, names::TIMELOCK)?;
        let governor = state.spec(stage, names::GOVERNOR)?;

        let spec = self.resolve(
            names::LAUNCHER,
            self.config.contracts.launcher.as_str(),
            vec![
                Argument::Bytes(data.init_code().as_bytes().to_vec()),
                Argument::Bytes32(self.config.salt),
                Argument::Tuple(vec![
                    Argument::predicted(token),
                    Argument::predicted(timelock),
                    Argument::predicted(governor),
                ]),
            ],
        )?;
        Ok(Self::push_spec(state, stage, spec, summary))
    }

    ///
    /// Resolves a vesting contract with the `(data, beneficiary, start, cliff, period)` layout.
    ///
    fn vesting(
        &self,
        name: &str,
        data: &ContractSpec,
        beneficiary: Argument,
        terms: &VestingTerms,
    ) -> Result<ContractSpec, Error> {
        self.resolve(
            name,
            self.config.contracts.vesting.as_str(),
            vec![
                Argument::predicted(data),
                beneficiary,
                Argument::uint(0),
                Argument::Uint(terms.cliff_months),
                Argument::Uint(terms.period_months),
            ],
        )
    }

    ///
    /// Resolves a contract from its artifact.
    ///
    fn resolve(
        &self,
        name: &str,
        contract: &str,
        arguments: Vec<Argument>,
    ) -> Result<ContractSpec, Error> {
        self.resolver
            .resolve(name, contract, self.artifacts.bytecode(contract), arguments)
    }

    ///
    /// Appends the resolved contract to the state.
    ///
    fn push_spec(
        mut state: PlanState,
        stage: Stage,
        spec: ContractSpec,
        summary: &mut Summary,
    ) -> PlanState {
        summary.resolved(stage, spec.name(), spec.predicted_address());
        state.specs.push(spec);
        state
    }

    ///
    /// Appends the contract to the initial token distribution.
    ///
    fn push_recipient(
        mut state: PlanState,
        stage: Stage,
        spec: &ContractSpec,
        amount: web3::types::U256,
        summary: &mut Summary,
    ) -> Result<PlanState, Error> {
        state.recipients.push(Recipient::new(
            spec.name().to_owned(),
            spec.predicted_address(),
            amount,
        ))?;
        summary.recipient(stage, spec.name(), spec.predicted_address(), amount);
        Ok(state)
    }
}
