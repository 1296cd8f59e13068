//! Reward distribution for one signup transaction.
//!
//! Credits run BEFORE the EVM applies the transaction body, so the payouts
//! are observable to the transaction's own execution and to every later
//! transaction in the same block. All amounts come from the profile selected
//! by the PARENT header's signup count; nothing here reads intra-block
//! running counters.

use crate::error::RewardError;
use crate::registry::PrivilegedRegistry;
use crate::resolver::signup_chain;
use crate::table::{RewardProfile, RewardTable};
use ur_store::{ChainStore, StateStore};
use ur_types::{BlockHeader, Transaction, Wei};

/// Average-issuance ceiling below which the management fee applies: 10 000 UR
/// per signup.
fn management_fee_ceiling() -> Wei {
    Wei::from_ur(10_000)
}

/// The management fee owed for a signup, given the parent header's counters.
///
/// The fee applies while the chain-wide average issuance per signup is at or
/// below 10 000 UR (a low-participation regime the protocol subsidises), and
/// always on the very first signup. Once the average exceeds the ceiling the
/// fee stops.
pub fn management_fee(
    profile: &RewardProfile,
    parent_n_signups: u64,
    parent_total_wei: &Wei,
) -> Wei {
    if parent_n_signups == 0 {
        return profile.management_fee.clone();
    }
    match parent_total_wei.div_floor(&Wei::from_u64(parent_n_signups)) {
        Some(avg) if avg <= management_fee_ceiling() => profile.management_fee.clone(),
        _ => Wei::zero(),
    }
}

/// Apply the signup payouts for `tx` to `state`.
///
/// Credits, in order: the miner's per-signup bonus, the new member's signup
/// reward, each resolved referrer's level reward, the UR Future Fund fee,
/// and finally the receiver's residual (the per-level amounts of the levels
/// the chain did not reach) plus the management fee when it applies.
///
/// `Err(InvalidChain)` means the payload did not resolve; the caller skips
/// the payout and executes the transaction normally. Any other error is
/// fatal to the block.
pub fn apply_signup_rewards(
    state: &mut dyn StateStore,
    chain: &dyn ChainStore,
    table: &RewardTable,
    registry: &PrivilegedRegistry,
    parent: &BlockHeader,
    header: &BlockHeader,
    tx: &Transaction,
) -> Result<(), RewardError> {
    let entry = registry
        .receivers_of(&tx.from)
        .ok_or(RewardError::NotPrivileged(tx.from))?;
    let profile = table.profile_for(parent.n_signups);
    let referrers = signup_chain(chain, tx)?;

    state.credit(&header.coinbase, &profile.miner_reward)?;
    state.credit(&tx.to, &profile.signup_reward)?;
    for (referrer, amount) in referrers.iter().zip(&profile.members_signup_rewards) {
        state.credit(referrer, amount)?;
    }

    // The levels the chain did not reach accumulate in the receiver account.
    let mut receiver_amount = management_fee(profile, parent.n_signups, &parent.total_wei);
    for amount in &profile.members_signup_rewards[referrers.len()..] {
        receiver_amount += amount;
    }
    state.credit(&entry.ur_future_fund, &profile.ur_future_fund_fee)?;
    state.credit(&entry.receiver, &receiver_amount)?;
    Ok(())
}
