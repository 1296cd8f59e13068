//! Header counter accumulation.
//!
//! Recomputes the two consensus counters, `n_signups` and `total_wei`, from
//! the parent header and the block body. The arithmetic mirrors the
//! distributor exactly: the reduction factor AND the management fee are
//! locked from the parent's counters at the block boundary, so within-block
//! drift can never change a payout and replaying a block always reproduces
//! the same pair.

use ur_rewards::{is_signup_transaction, management_fee, signup_chain, PrivilegedRegistry, RewardTable};
use ur_store::ChainStore;
use ur_types::{BlockHeader, Transaction, Wei};

use crate::miner::mining_accumulation;

/// Compute the new `(n_signups, total_wei)` pair for a block.
///
/// Per signup the counters advance by the locked profile's unconditional
/// total plus the locked management fee; mining rewards (uncles included)
/// are added once for the whole block. A classified signup whose referral
/// chain does not resolve is skipped: it received no payout, so it must not
/// advance the counters either.
pub fn calculate_block_totals(
    table: &RewardTable,
    registry: &PrivilegedRegistry,
    chain: &dyn ChainStore,
    parent_n_signups: u64,
    parent_total_wei: &Wei,
    header: &BlockHeader,
    uncles: &[BlockHeader],
    messages: &[Transaction],
) -> (u64, Wei) {
    let profile = table.profile_for(parent_n_signups);
    let block_mng_fee = management_fee(profile, parent_n_signups, parent_total_wei);

    let mut n_signups = parent_n_signups;
    let mut total_wei = parent_total_wei.clone();
    for (_, credit) in mining_accumulation(table.block_reward(), header, uncles) {
        total_wei += &credit;
    }
    for message in messages {
        if is_signup_transaction(registry, message) && signup_chain(chain, message).is_ok() {
            n_signups += 1;
            total_wei += &profile.total;
            total_wei += &block_mng_fee;
        }
    }
    (n_signups, total_wei)
}

/// Write the computed counters into the current header.
pub fn update_block_totals(
    table: &RewardTable,
    registry: &PrivilegedRegistry,
    chain: &dyn ChainStore,
    parent: &BlockHeader,
    header: &mut BlockHeader,
    uncles: &[BlockHeader],
    messages: &[Transaction],
) {
    let (n_signups, total_wei) = calculate_block_totals(
        table,
        registry,
        chain,
        parent.n_signups,
        &parent.total_wei,
        header,
        uncles,
        messages,
    );
    header.n_signups = n_signups;
    header.total_wei = total_wei;
}
