//!
//! The planning summary element.
//!

pub mod outcome;

use colored::Colorize;

use self::outcome::Outcome;

///
/// The planning summary element.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The stage or replay step name.
    pub step: String,
    /// The subject, usually a plan name or a ledger domain.
    pub subject: String,
    /// The outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(step: String, subject: String, outcome: Outcome) -> Self {
        Self {
            step,
            subject,
            outcome,
        }
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        if !verbosity && !matches!(self.outcome, Outcome::Failed { .. }) {
            return None;
        }

        let outcome = match self.outcome {
            Outcome::Resolved { .. } => "RESOLVED".green(),
            Outcome::Recipient { .. } => "RECIPIENT".cyan(),
            Outcome::Committed { .. } => "COMMITTED".blue(),
            Outcome::Deployed { .. } => "DEPLOYED".green(),
            Outcome::Failed { .. } => "FAILED".bright_red(),
        };

        let details = match self.outcome {
            Outcome::Resolved { ref address } | Outcome::Deployed { ref address } => {
                balance_map::checksum(address).bright_white().to_string()
            }
            Outcome::Recipient {
                ref address,
                ref amount,
            } => format!("{} ({amount})", balance_map::checksum(address))
                .bright_white()
                .to_string(),
            Outcome::Committed {
                ref root,
                accounts,
                ref total,
            } => format!("root {root:?} ({accounts} accounts, total {total})")
                .bright_white()
                .to_string(),
            Outcome::Failed { ref error } => error.to_owned(),
        };

        Some(format!(
            "{:16} {:>9} {:24} {}",
            self.step.bright_white(),
            outcome,
            self.subject,
            details
        ))
    }
}
