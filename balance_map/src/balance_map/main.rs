//!
//! The balance map generator executable.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => balance_map::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            balance_map::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    if !arguments.quiet {
        eprintln!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let entries = read_entries(arguments.input.as_path())?;
    let count = entries.len();

    let json = match arguments.cap_policy()? {
        Some(policy) => {
            let map = balance_map::CappedBalanceMap::build(entries, &policy)?;
            if !arguments.quiet {
                print_root(&map.merkle_root, &map.token_total, count);
            }
            serde_json::to_string_pretty(&map)?
        }
        None => {
            let map = balance_map::BalanceMap::build(entries)?;
            if !arguments.quiet {
                print_root(&map.merkle_root, &map.token_total, count);
            }
            serde_json::to_string_pretty(&map)?
        }
    };

    match arguments.output {
        Some(path) => {
            std::fs::write(path.as_path(), json)
                .map_err(|error| anyhow::anyhow!("Claims file {path:?} writing: {error}"))?;
            if !arguments.quiet {
                eprintln!(
                    "     {} claims to {}",
                    "Written".bright_green().bold(),
                    path.to_string_lossy()
                );
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}

///
/// Reads the entitlement entries from the input file.
///
fn read_entries(path: &Path) -> anyhow::Result<Vec<balance_map::BalanceEntry>> {
    let json = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Balance file {path:?} reading: {error}"))?;
    let entries = balance_map::BalanceEntry::from_json_map(json.as_str())
        .map_err(|error| anyhow::anyhow!("Balance file {path:?} parsing: {error}"))?;
    Ok(entries)
}

///
/// Prints the root and the totals.
///
fn print_root(root: &web3::types::H256, total: &web3::types::U256, count: usize) {
    eprintln!(
        "       {} {count} accounts, total {total}, root {root:?}",
        "Built".bright_green().bold(),
    );
}
