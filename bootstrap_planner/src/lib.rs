//!
//! The deterministic create2 deployment planner library.
//!

pub(crate) mod address_predictor;
pub(crate) mod artifacts;
pub(crate) mod checksummed;
pub(crate) mod config;
pub(crate) mod contract;
pub(crate) mod deployers;
pub(crate) mod error;
pub(crate) mod ledger;
pub(crate) mod network;
pub(crate) mod planner;
pub(crate) mod summary;

pub use self::address_predictor::AddressPredictor;
pub use self::artifacts::error::Error as ArtifactsError;
pub use self::artifacts::Artifact;
pub use self::artifacts::Artifacts;
pub use self::config::contract_names::ContractNames;
pub use self::config::error::Error as ConfigError;
pub use self::config::Config;
pub use self::contract::argument::Argument;
pub use self::contract::init_code::InitCode;
pub use self::contract::recipient::Recipient;
pub use self::contract::resolver::ContractSpecResolver;
pub use self::contract::ContractSpec;
pub use self::deployers::error::Error as DeployerError;
pub use self::deployers::executor::Executor;
pub use self::deployers::simulated_deployer::SimulatedDeployer;
pub use self::deployers::Deployer;
pub use self::error::Error;
pub use self::ledger::action::Action;
pub use self::ledger::error::Error as LedgerError;
pub use self::ledger::Ledger;
pub use self::network::Network;
pub use self::planner::names;
pub use self::planner::plan::Plan;
pub use self::planner::stage::Stage;
pub use self::planner::Planner;
pub use self::summary::Summary;

/// The EVM field byte length.
pub const BYTE_LENGTH_FIELD: usize = 32;

/// The Ethereum address byte length.
pub const BYTE_LENGTH_ETH_ADDRESS: usize = 20;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
