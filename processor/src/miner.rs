//! Mining reward accumulation.
//!
//! The Ethereum-family uncle rule, unchanged: each uncle's miner receives
//! `⌊(uncle.number + 8 − header.number) · BlockReward / 8⌋`, and the block's
//! miner receives the static reward plus `⌊BlockReward / 32⌋` per included
//! uncle. No reduction factor applies; base mining rewards are independent
//! of signup scaling.

use crate::ProcessorError;
use ur_store::StateStore;
use ur_types::{Address, BlockHeader, Wei};

/// The per-address mining credits for a block. Pure; shared by the state
/// application below and by the header-counter accumulator.
pub fn mining_accumulation(
    block_reward: &Wei,
    header: &BlockHeader,
    uncles: &[BlockHeader],
) -> Vec<(Address, Wei)> {
    let mut credits = Vec::with_capacity(uncles.len() + 1);
    let mut miner = block_reward.clone();
    for uncle in uncles {
        // An uncle more than 7 generations back cannot occur on a
        // well-formed chain; credit nothing rather than underflow.
        let credit = match uncle
            .number
            .checked_add(8)
            .and_then(|n| n.checked_sub(header.number))
        {
            Some(depth) => &(block_reward * depth) / 8,
            None => Wei::zero(),
        };
        credits.push((uncle.coinbase, credit));
        miner += &(block_reward / 32);
    }
    credits.push((header.coinbase, miner));
    credits
}

/// Credit the block's miner and every uncle miner.
pub fn accumulate_mining_rewards(
    state: &mut dyn StateStore,
    block_reward: &Wei,
    header: &BlockHeader,
    uncles: &[BlockHeader],
) -> Result<(), ProcessorError> {
    for (address, credit) in mining_accumulation(block_reward, header, uncles) {
        state.credit(&address, &credit)?;
    }
    Ok(())
}
