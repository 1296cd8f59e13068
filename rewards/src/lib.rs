//! The UR signup-reward engine.
//!
//! A fixed set of privileged accounts may issue one-wei "signup"
//! transactions whose data payload anchors a referral chain of previous
//! signups. Each included signup mints a set of payouts: the new member, up
//! to seven referrers, a per-signup miner bonus, the UR Future Fund, a
//! conditional management fee and the scheme's receiver account. All amounts
//! are scaled by a step-function reduction factor driven by the cumulative
//! signup count.
//!
//! This crate is the pure half of the engine: constants, classification,
//! chain resolution and balance crediting. Block-level sequencing and the
//! header counters live in `ur_processor`.

pub mod classifier;
pub mod distributor;
pub mod error;
pub mod message;
pub mod registry;
pub mod resolver;
pub mod schedule;
pub mod table;

pub use classifier::is_signup_transaction;
pub use distributor::{apply_signup_rewards, management_fee};
pub use error::RewardError;
pub use message::{SignupMessage, SIGNUP_MESSAGE_VERSION};
pub use registry::{PrivilegedEntry, PrivilegedRegistry};
pub use resolver::{signup_chain, MAX_REFERRAL_DEPTH};
pub use schedule::ReductionSchedule;
pub use table::{RewardProfile, RewardTable};
