//!
//! The plan names of the campaign contracts.
//!
//! A plan name doubles as the label of the contract's ledger domain.
//!

/// The governance initiation data.
pub const DATA: &str = "data";

/// The treasury bootstrapping.
pub const TREASURY: &str = "treasury";

/// The development team vesting.
pub const TEAM_VESTING: &str = "team.vesting";

/// The timelock controller.
pub const TIMELOCK: &str = "timelock";

/// The message relayer.
pub const RELAYER: &str = "relayer";

/// The DAO vesting.
pub const DAO_VESTING: &str = "dao.vesting";

/// The airdrop distributor.
pub const AIRDROP: &str = "airdrop";

/// The governance token.
pub const TOKEN: &str = "token";

/// The governor.
pub const GOVERNOR: &str = "governor";

/// The governance initiation data launcher.
pub const LAUNCHER: &str = "launcher";

///
/// Returns the plan name of the advisor vesting at `index`.
///
pub fn advisor_vesting(index: usize) -> String {
    format!("advisor-{index}.vesting")
}
