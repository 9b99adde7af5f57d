//!
//! The planning stage.
//!

///
/// The planning stage.
///
/// Each stage embeds addresses predicted by earlier stages, so the stages form a fixed
/// sequential chain with no parallel decomposition.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// The governance initiation data contract.
    GovernanceData,
    /// The treasury bootstrapping contract.
    Treasury,
    /// The development team vesting contract.
    TeamVesting,
    /// The timelock controller.
    Timelock,
    /// The cross-chain message relayer.
    Relayer,
    /// The DAO vesting contract.
    DaoVesting,
    /// The advisor vesting contracts.
    AdvisorVesting,
    /// The airdrop balance map.
    BalanceMap,
    /// The airdrop distributor.
    Airdrop,
    /// The governance token.
    Token,
    /// The governor.
    Governor,
    /// The governance initiation data launcher.
    Launcher,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Self; 12] = [
        Self::GovernanceData,
        Self::Treasury,
        Self::TeamVesting,
        Self::Timelock,
        Self::Relayer,
        Self::DaoVesting,
        Self::AdvisorVesting,
        Self::BalanceMap,
        Self::Airdrop,
        Self::Token,
        Self::Governor,
        Self::Launcher,
    ];

    ///
    /// Returns the stages whose outputs this stage consumes.
    ///
    pub fn predecessors(&self) -> &'static [Self] {
        match self {
            Self::GovernanceData => &[],
            Self::Treasury => &[Self::GovernanceData],
            Self::TeamVesting => &[Self::GovernanceData, Self::Treasury],
            Self::Timelock => &[Self::GovernanceData],
            Self::Relayer => &[Self::Timelock],
            Self::DaoVesting => &[Self::GovernanceData, Self::Timelock, Self::TeamVesting],
            Self::AdvisorVesting => &[Self::GovernanceData, Self::DaoVesting],
            Self::BalanceMap => &[],
            Self::Airdrop => &[
                Self::GovernanceData,
                Self::BalanceMap,
                Self::AdvisorVesting,
            ],
            Self::Token => &[Self::GovernanceData, Self::Airdrop],
            Self::Governor => &[Self::Token, Self::Timelock, Self::Relayer],
            Self::Launcher => &[
                Self::GovernanceData,
                Self::Token,
                Self::Timelock,
                Self::Governor,
            ],
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GovernanceData => write!(f, "governance-data"),
            Self::Treasury => write!(f, "treasury"),
            Self::TeamVesting => write!(f, "team-vesting"),
            Self::Timelock => write!(f, "timelock"),
            Self::Relayer => write!(f, "relayer"),
            Self::DaoVesting => write!(f, "dao-vesting"),
            Self::AdvisorVesting => write!(f, "advisor-vesting"),
            Self::BalanceMap => write!(f, "balance-map"),
            Self::Airdrop => write!(f, "airdrop"),
            Self::Token => write!(f, "token"),
            Self::Governor => write!(f, "governor"),
            Self::Launcher => write!(f, "launcher"),
        }
    }
}
