//!
//! The planning summary.
//!

pub mod element;

use colored::Colorize;

use self::element::outcome::Outcome;
use self::element::Element;

///
/// The planning summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The resolved contracts counter.
    resolved: usize,
    /// The recipients counter.
    recipients: usize,
    /// The balance map commitments counter.
    committed: usize,
    /// The deployed contracts counter.
    deployed: usize,
    /// The failures counter.
    failed: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            verbosity,
            quiet,
            resolved: 0,
            recipients: 0,
            committed: 0,
            deployed: 0,
            failed: 0,
        }
    }

    ///
    /// Whether nothing has failed.
    ///
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    ///
    /// Returns the elements in the order they have been pushed.
    ///
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    ///
    /// Adds a resolved contract outcome.
    ///
    pub fn resolved<S>(&mut self, step: S, subject: &str, address: web3::types::Address)
    where
        S: ToString,
    {
        self.push_element(Element::new(
            step.to_string(),
            subject.to_owned(),
            Outcome::resolved(address),
        ));
    }

    ///
    /// Adds an appended recipient outcome.
    ///
    pub fn recipient<S>(
        &mut self,
        step: S,
        subject: &str,
        address: web3::types::Address,
        amount: web3::types::U256,
    ) where
        S: ToString,
    {
        self.push_element(Element::new(
            step.to_string(),
            subject.to_owned(),
            Outcome::recipient(address, amount),
        ));
    }

    ///
    /// Adds a balance map commitment outcome.
    ///
    pub fn committed<S>(
        &mut self,
        step: S,
        subject: &str,
        root: web3::types::H256,
        accounts: usize,
        total: web3::types::U256,
    ) where
        S: ToString,
    {
        self.push_element(Element::new(
            step.to_string(),
            subject.to_owned(),
            Outcome::committed(root, accounts, total),
        ));
    }

    ///
    /// Adds a deployed contract outcome.
    ///
    pub fn deployed<S>(&mut self, step: S, subject: &str, address: web3::types::Address)
    where
        S: ToString,
    {
        self.push_element(Element::new(
            step.to_string(),
            subject.to_owned(),
            Outcome::deployed(address),
        ));
    }

    ///
    /// Adds a failed outcome.
    ///
    pub fn failed<S, E>(&mut self, step: S, subject: &str, error: E)
    where
        S: ToString,
        E: ToString,
    {
        self.push_element(Element::new(
            step.to_string(),
            subject.to_owned(),
            Outcome::failed(error),
        ));
    }

    ///
    /// Pushes an element to the summary, printing it.
    ///
    fn push_element(&mut self, element: Element) {
        if !self.quiet {
            if let Some(string) = element.print(self.verbosity) {
                println!("{string}");
            }
        }

        match element.outcome {
            Outcome::Resolved { .. } => self.resolved += 1,
            Outcome::Recipient { .. } => self.recipients += 1,
            Outcome::Committed { .. } => self.committed += 1,
            Outcome::Deployed { .. } => self.deployed += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }

        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔════════════════════╡ CAMPAIGN PLANNING ╞═════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:10}                                {:10}     ║",
            "RESOLVED".green(),
            self.resolved.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:10}                                {:10}     ║",
            "RECIPIENTS".cyan(),
            self.recipients.to_string().cyan(),
        )?;
        writeln!(
            f,
            "║     {:10}                                {:10}     ║",
            "COMMITTED".blue(),
            self.committed.to_string().blue(),
        )?;
        writeln!(
            f,
            "║     {:10}                                {:10}     ║",
            "DEPLOYED".green(),
            self.deployed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:10}                                {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
