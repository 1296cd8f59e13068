use crate::config::RewardScheme;
use thiserror::Error;
use ur_rewards::RewardError;
use ur_store::StoreError;

#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The computed signup counters disagree with the header. The block is
    /// rejected; accepting it would fork consensus.
    #[error("header counters mismatch: {field} is {got}, computed {expected}")]
    HeaderCountersMismatch {
        field: &'static str,
        got: String,
        expected: String,
    },

    /// The configured reward scheme is not the one this build implements.
    #[error("reward scheme {0:?} is not supported by this build")]
    UnsupportedScheme(RewardScheme),

    #[error("gas limit exceeded: needed {needed}, remaining {remaining}")]
    OutOfGas { needed: u64, remaining: u64 },

    /// A fatal reward failure. `InvalidChain` never surfaces here; the
    /// driver downgrades it to a skipped payout.
    #[error(transparent)]
    Reward(#[from] RewardError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),
}
