//!
//! The deployment ledger.
//!

pub mod action;
pub mod error;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::contract::ContractSpec;
use crate::planner::names;
use crate::planner::plan::Plan;

use self::action::Action;
use self::error::Error;

///
/// The deployment ledger: the ordered action list replayed by the executor.
///
/// A ledger is usually recorded over a persisted template. The template fields other than
/// `actions` are kept as they are.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ledger {
    /// The template fields not managed by the planner.
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// The actions in execution order.
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Ledger {
    /// The domain label of the create2 factory.
    pub const FACTORY_LABEL: &'static str = "deployer";

    /// The contract name of a factory action inserted by the planner.
    pub const FACTORY_CONTRACT: &'static str = "Deployer.sol";

    /// The JSON indent of the written ledger files.
    pub const JSON_INDENT: &'static [u8] = b"    ";

    ///
    /// Returns the domain of the contract labeled `label`.
    ///
    pub fn domain(label: &str, project_domain: &str) -> String {
        format!("{label}.contract.{project_domain}")
    }

    ///
    /// Records the plan.
    ///
    /// The factory action is inserted first if missing. Actions are matched by domain: an
    /// existing action is updated in place, a new one is appended. Actions of campaign
    /// contracts absent from the plan are removed, other actions are kept. Recording the
    /// same plan again leaves the ledger unchanged.
    ///
    pub fn record(&mut self, plan: &Plan, project_domain: &str) {
        let factory_domain = Self::domain(Self::FACTORY_LABEL, project_domain);
        let factory = plan.predictor().factory();
        match self
            .actions
            .iter_mut()
            .find(|action| action.domain == factory_domain)
        {
            Some(action) => action.expected_address = factory,
            None => self.actions.insert(
                0,
                Action::new(
                    factory_domain,
                    Self::FACTORY_CONTRACT.to_owned(),
                    "0x".to_owned(),
                    factory,
                    vec![],
                ),
            ),
        }

        let specs = std::iter::once(plan.launcher()).chain(
            plan.specs()
                .iter()
                .filter(|spec| spec.name() != names::DATA),
        );
        let planned: Vec<Action> = specs
            .map(|spec| Self::planned_action(plan, spec, project_domain))
            .collect();

        self.actions.retain(|action| {
            !Self::is_planned_domain(action.domain.as_str(), project_domain)
                || planned.iter().any(|planned| planned.domain == action.domain)
        });
        for action in planned.into_iter() {
            self.upsert(action);
        }
    }

    ///
    /// Returns the first-step ledger: the factory and governance data actions only.
    ///
    pub fn first_step(&self, project_domain: &str) -> Self {
        let domains = [
            Self::domain(Self::FACTORY_LABEL, project_domain),
            Self::domain(names::DATA, project_domain),
        ];
        Self {
            metadata: self.metadata.clone(),
            actions: self
                .actions
                .iter()
                .filter(|action| domains.contains(&action.domain))
                .cloned()
                .collect(),
        }
    }

    ///
    /// Returns the action with the `domain`.
    ///
    pub fn action(&self, domain: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.domain == domain)
    }

    ///
    /// Serializes the ledger with a four-space indent.
    ///
    pub fn to_json(&self) -> Result<String, Error> {
        let mut buffer = Vec::with_capacity(4096);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(Self::JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        serde::Serialize::serialize(self, &mut serializer)?;
        Ok(String::from_utf8(buffer).expect("Always valid"))
    }

    ///
    /// Updates the action with the same domain, or appends `action`.
    ///
    fn upsert(&mut self, action: Action) {
        match self
            .actions
            .iter_mut()
            .find(|existing| existing.domain == action.domain)
        {
            Some(existing) => existing.update(action),
            None => self.actions.push(action),
        }
    }

    ///
    /// Builds the action of the planned contract.
    ///
    fn planned_action(plan: &Plan, spec: &ContractSpec, project_domain: &str) -> Action {
        let mut depends_on: Vec<String> = spec
            .depends_on()
            .iter()
            .map(|name| Self::domain(Self::label(name), project_domain))
            .collect();
        depends_on.push(Self::domain(Self::FACTORY_LABEL, project_domain));

        let mut action = Action::new(
            Self::domain(Self::label(spec.name()), project_domain),
            format!("{}.sol", spec.contract()),
            spec.init_code().to_hex(),
            spec.predicted_address(),
            depends_on,
        );
        match spec.name() {
            names::TOKEN => action.recipients = Some(plan.recipients().to_vec()),
            names::AIRDROP => action.merkle_root = Some(plan.airdrop().merkle_root),
            _ => {}
        }
        action
    }

    ///
    /// Whether the `domain` belongs to a campaign contract the planner produces.
    ///
    fn is_planned_domain(domain: &str, project_domain: &str) -> bool {
        let label = match domain
            .strip_suffix(project_domain)
            .and_then(|prefix| prefix.strip_suffix(".contract."))
        {
            Some(label) => label,
            None => return false,
        };

        matches!(
            label,
            names::DATA
                | names::TREASURY
                | names::TIMELOCK
                | names::RELAYER
                | names::AIRDROP
                | names::TOKEN
                | names::GOVERNOR
        ) || label.ends_with(".vesting")
    }

    ///
    /// Returns the domain label of the plan name.
    ///
    /// The governance data is deployed by the launcher, so the launcher takes its domain.
    ///
    fn label(name: &str) -> &str {
        match name {
            names::LAUNCHER => names::DATA,
            name => name,
        }
    }
}

impl TryFrom<&Path> for Ledger {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}
