//!
//! The deployment planner executable.
//!

pub(crate) mod arguments;

use std::path::Path;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The full ledger file name.
const LEDGER_FULL_FILE_NAME: &str = "deploymentActions_full.json";

/// The first-step ledger file name.
const LEDGER_FIRST_STEP_FILE_NAME: &str = "deploymentActions_first_step.json";

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => bootstrap_planner::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            bootstrap_planner::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let config = bootstrap_planner::Config::load(arguments.config.as_path())?;
    let network = bootstrap_planner::Network::from_chain_id(arguments.chain_id);
    println!(
        "     {} chain ID {} ({network}), factory {}, salt {:?}",
        "Network".bright_green().bold(),
        arguments.chain_id,
        balance_map::checksum(&config.factory),
        config.salt,
    );

    let artifacts =
        bootstrap_planner::Artifacts::load(arguments.artifacts.as_path(), config.contracts.iter())?;
    let airdrop = read_entries(arguments.airdrop.as_path())?;
    let mut planner = bootstrap_planner::Planner::new(&config, &artifacts, airdrop);
    if let Some(path) = arguments.treasury_allowlist.as_deref() {
        planner = planner.with_treasury_allowlist(read_entries(path)?);
    }

    let mut summary = bootstrap_planner::Summary::new(arguments.verbose, arguments.quiet);
    let run_time_start = Instant::now();
    println!("    {} the campaign", "Planning".bright_green().bold());
    let plan = match planner.plan(&mut summary) {
        Ok(plan) => plan,
        Err(error) => {
            if !arguments.quiet {
                println!("{summary}");
            }
            anyhow::bail!("Planning failed: {error}");
        }
    };

    let mut ledger = match arguments.template.as_deref() {
        Some(path) => bootstrap_planner::Ledger::try_from(path)?,
        None => bootstrap_planner::Ledger::default(),
    };
    ledger.record(&plan, config.project_domain.as_str());

    if arguments.replay {
        println!("   {} the ledger", "Replaying".bright_green().bold());
        let mut executor = bootstrap_planner::Executor::new(
            bootstrap_planner::SimulatedDeployer::new(config.factory),
            config.salt,
        );
        if let Err(error) =
            executor.replay(&ledger, config.project_domain.as_str(), &mut summary)
        {
            if !arguments.quiet {
                println!("{summary}");
            }
            anyhow::bail!("Replay failed: {error}");
        }
    }

    std::fs::create_dir_all(arguments.output.as_path()).map_err(|error| {
        anyhow::anyhow!("Output directory {:?} creating: {error}", arguments.output)
    })?;
    write(
        arguments.output.join(LEDGER_FULL_FILE_NAME).as_path(),
        ledger.to_json()?,
    )?;
    write(
        arguments.output.join(LEDGER_FIRST_STEP_FILE_NAME).as_path(),
        ledger
            .first_step(config.project_domain.as_str())
            .to_json()?,
    )?;
    write(
        arguments
            .output
            .join(network.claims_file_name())
            .as_path(),
        serde_json::to_string_pretty(plan.airdrop())?,
    )?;
    if let Some(allowlist) = plan.treasury_allowlist() {
        write(
            arguments
                .output
                .join(network.capped_claims_file_name())
                .as_path(),
            serde_json::to_string_pretty(allowlist)?,
        )?;
    }

    if !arguments.quiet {
        println!("{summary}");
    }
    println!(
        "    {} {} contracts planned in {}m{:02}s",
        "Finished".bright_green().bold(),
        plan.specs().len() + 1,
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    if !summary.is_successful() {
        anyhow::bail!("");
    }

    Ok(())
}

///
/// Reads the entitlement entries from the JSON file mapping addresses to amounts.
///
fn read_entries(path: &Path) -> anyhow::Result<Vec<balance_map::BalanceEntry>> {
    let json = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Balance file {path:?} reading: {error}"))?;
    let entries = balance_map::BalanceEntry::from_json_map(json.as_str())
        .map_err(|error| anyhow::anyhow!("Balance file {path:?} parsing: {error}"))?;
    Ok(entries)
}

///
/// Writes an output file.
///
fn write(path: &Path, contents: String) -> anyhow::Result<()> {
    std::fs::write(path, contents)
        .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
    println!(
        "     {} {}",
        "Written".bright_green().bold(),
        path.to_string_lossy()
    );
    Ok(())
}
