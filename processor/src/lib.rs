//! Block processing for the UR chain core.
//!
//! Sequences transaction execution for one block: classifies signup
//! transactions, applies their payouts before the transaction body runs,
//! accumulates mining rewards (uncles included), and finalises the header's
//! two signup counters. Validation recomputes the counters and rejects any
//! block whose header disagrees.

pub mod accumulator;
pub mod config;
pub mod driver;
pub mod error;
pub mod executor;
pub mod gas;
pub mod logging;
pub mod miner;
pub mod receipt;

pub use accumulator::{calculate_block_totals, update_block_totals};
pub use config::{ChainConfig, RewardScheme};
pub use driver::BlockProcessor;
pub use error::ProcessorError;
pub use executor::{Executor, NoopExecutor};
pub use gas::GasPool;
pub use logging::{init_from_config, init_logging, LogFormat};
pub use miner::{accumulate_mining_rewards, mining_accumulation};
pub use receipt::Receipt;
