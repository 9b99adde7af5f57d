//!
//! The deployment planner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The deployment planner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The campaign configuration JSON file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// The directory searched for the Hardhat contract artifacts.
    #[arg(short, long)]
    pub artifacts: PathBuf,

    /// The JSON file mapping airdrop recipients to entitlements.
    #[arg(long)]
    pub airdrop: PathBuf,

    /// The chain ID the campaign is planned for.
    #[arg(long)]
    pub chain_id: u64,

    /// The output directory.
    #[arg(short, long, default_value = "files")]
    pub output: PathBuf,

    /// The ledger template JSON file. Its extra fields and actions are kept.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// The JSON file mapping treasury allow-list accounts to entitlements.
    #[arg(long)]
    pub treasury_allowlist: Option<PathBuf>,

    /// Replays the ledger against an in-memory create2 factory.
    #[arg(long)]
    pub replay: bool,

    /// Prints every planning step.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the summary table.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("The arguments `--verbose` and `--quiet` are mutually exclusive");
        }

        if arguments.output.is_file() {
            anyhow::bail!(
                "The output path {:?} is a file, but a directory is expected",
                arguments.output
            );
        }

        Ok(arguments)
    }
}
