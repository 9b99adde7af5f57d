//!
//! The balance map generator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The balance map generator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The JSON file mapping account addresses to entitlements.
    #[arg(short, long)]
    pub input: PathBuf,

    /// The output JSON file. The claims are printed to stdout if unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Caps every contribution at the specified amount.
    #[arg(long)]
    pub cap_fixed: Option<String>,

    /// The numerator of the fraction of the entitlement used as the contribution cap.
    #[arg(long)]
    pub cap_numerator: Option<String>,

    /// The denominator of the fraction of the entitlement used as the contribution cap.
    #[arg(long)]
    pub cap_denominator: Option<String>,

    /// Records the entitlement itself as the contribution cap.
    #[arg(long)]
    pub cap_entitlement: bool,

    /// Suppresses the progress output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        let is_fraction = arguments.cap_numerator.is_some() || arguments.cap_denominator.is_some();
        if is_fraction
            && (arguments.cap_numerator.is_none() || arguments.cap_denominator.is_none())
        {
            anyhow::bail!(
                "The arguments `--cap-numerator` and `--cap-denominator` must be passed together"
            );
        }

        let policies = [
            arguments.cap_fixed.is_some(),
            is_fraction,
            arguments.cap_entitlement,
        ];
        if policies.into_iter().filter(|is_set| *is_set).count() > 1 {
            anyhow::bail!("Only one contribution cap policy can be specified");
        }

        Ok(arguments)
    }

    ///
    /// Returns the contribution cap policy, if any.
    ///
    pub fn cap_policy(&self) -> anyhow::Result<Option<balance_map::CapPolicy>> {
        if let Some(value) = self.cap_fixed.as_deref() {
            return Ok(Some(balance_map::CapPolicy::Fixed(Self::parse_amount(
                "--cap-fixed",
                value,
            )?)));
        }
        if let (Some(numerator), Some(denominator)) = (
            self.cap_numerator.as_deref(),
            self.cap_denominator.as_deref(),
        ) {
            return Ok(Some(balance_map::CapPolicy::Fraction {
                numerator: Self::parse_amount("--cap-numerator", numerator)?,
                denominator: Self::parse_amount("--cap-denominator", denominator)?,
            }));
        }
        if self.cap_entitlement {
            return Ok(Some(balance_map::CapPolicy::Entitlement));
        }
        Ok(None)
    }

    ///
    /// Parses an amount argument.
    ///
    fn parse_amount(name: &str, value: &str) -> anyhow::Result<web3::types::U256> {
        balance_map::parse_amount(value)
            .map_err(|_| anyhow::anyhow!("Invalid amount `{value}` in the argument `{name}`"))
    }
}
