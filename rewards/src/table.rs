//! Reward constants and the per-factor payout profiles.
//!
//! The 100-ratio amounts below are the source of truth; every other profile
//! is derived by integer scaling `⌊v·f/100⌋` at construction time. The seven
//! member rewards sum to exactly the signup reward, so a full seven-level
//! referral chain distributes the whole cascade with zero residual.

use crate::schedule::ReductionSchedule;
use ur_types::{ur_to_wei, Wei};

/// Reward paid to the newly signed-up member, in UR.
const SIGNUP_REWARD_UR: &str = "2000";

/// Per-level referrer rewards, nearest referrer first, in UR.
/// These sum to exactly 2000 UR.
const MEMBERS_SIGNUP_REWARDS_UR: [&str; 7] = [
    "60.60", "60.60", "121.21", "181.81", "303.03", "484.84", "787.91",
];

/// Fee paid to the UR Future Fund per signup, in UR.
const UR_FUTURE_FUND_FEE_UR: &str = "5000";

/// Conditional management fee per signup, in UR.
const MANAGEMENT_FEE_UR: &str = "1000";

/// The static base mining reward, in UR. Defined by the surrounding
/// block-execution contract; the per-signup miner bonus equals it at scale
/// 100.
const BLOCK_REWARD_UR: &str = "7";

/// All payout amounts for one reduction factor.
#[derive(Clone, Debug)]
pub struct RewardProfile {
    pub factor: u32,
    pub ur_future_fund_fee: Wei,
    pub management_fee: Wei,
    pub signup_reward: Wei,
    pub members_signup_rewards: [Wei; 7],
    pub miner_reward: Wei,
    /// Sum of the seven scaled member rewards. The scaled values are summed,
    /// not the unscaled total scaled; truncation makes the two differ.
    pub total_signup_rewards: Wei,
    /// Unconditional issuance per signup at this factor:
    /// `total_signup_rewards + ur_future_fund_fee + signup_reward +
    /// miner_reward`. The management fee is conditional and excluded.
    pub total: Wei,
}

impl RewardProfile {
    fn at_factor(factor: u32, block_reward: &Wei) -> Self {
        let members_signup_rewards: [Wei; 7] = std::array::from_fn(|i| {
            ur(MEMBERS_SIGNUP_REWARDS_UR[i]).scale(factor)
        });
        let mut total_signup_rewards = Wei::zero();
        for m in &members_signup_rewards {
            total_signup_rewards += m;
        }
        let ur_future_fund_fee = ur(UR_FUTURE_FUND_FEE_UR).scale(factor);
        let signup_reward = ur(SIGNUP_REWARD_UR).scale(factor);
        let miner_reward = block_reward.scale(factor);
        let mut total = total_signup_rewards.clone();
        total += &ur_future_fund_fee;
        total += &signup_reward;
        total += &miner_reward;
        Self {
            factor,
            ur_future_fund_fee,
            management_fee: ur(MANAGEMENT_FEE_UR).scale(factor),
            signup_reward,
            members_signup_rewards,
            miner_reward,
            total_signup_rewards,
            total,
        }
    }
}

/// The full reward table: one precomputed profile per reduction factor plus
/// the schedule that selects between them.
///
/// Built once at process start and shared by reference; safe to share across
/// threads without synchronisation.
pub struct RewardTable {
    profiles: Vec<RewardProfile>,
    schedule: ReductionSchedule,
    block_reward: Wei,
}

/// The twelve factors the schedule can produce.
const FACTORS: [u32; 12] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5, 0];

impl RewardTable {
    /// Build the table with the chain's standard block reward.
    pub fn new() -> Self {
        Self::with_block_reward(ur(BLOCK_REWARD_UR))
    }

    /// Build the table with an explicit base block reward.
    pub fn with_block_reward(block_reward: Wei) -> Self {
        let profiles = FACTORS
            .iter()
            .map(|&f| RewardProfile::at_factor(f, &block_reward))
            .collect();
        Self {
            profiles,
            schedule: ReductionSchedule::standard(),
            block_reward,
        }
    }

    /// The profile for an explicit factor, if it is one the schedule yields.
    pub fn profile(&self, factor: u32) -> Option<&RewardProfile> {
        self.profiles.iter().find(|p| p.factor == factor)
    }

    /// The profile governing payouts when the parent header carries
    /// `n_signups` cumulative signups.
    pub fn profile_for(&self, n_signups: u64) -> &RewardProfile {
        let factor = self.schedule.factor(n_signups);
        // Every factor the schedule yields has a precomputed profile.
        self.profiles
            .iter()
            .find(|p| p.factor == factor)
            .unwrap_or(&self.profiles[0])
    }

    /// The reduction factor for a cumulative signup count.
    pub fn factor(&self, n_signups: u64) -> u32 {
        self.schedule.factor(n_signups)
    }

    /// The base static mining reward this table was built with.
    pub fn block_reward(&self) -> &Wei {
        &self.block_reward
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a constant UR literal.
///
/// # Panics
/// Panics on a malformed literal; the tables are built from fixed constants
/// at process start, so a failure here is a compile-time mistake surfacing.
fn ur(s: &str) -> Wei {
    match ur_to_wei(s) {
        Ok(w) => w,
        Err(_) => panic!("invalid UR constant: {s}"),
    }
}
