//! Referral-chain resolution.
//!
//! A descendant signup's payload points at the referring member's own signup
//! transaction by (block number, tx hash). Following those pointers yields
//! the referral chain, nearest referrer first, capped at seven levels.

use crate::error::RewardError;
use crate::message::SignupMessage;
use ur_store::ChainStore;
use ur_types::{Address, Transaction};

/// Referrers beyond this depth receive nothing; their per-level amounts fold
/// into the receiver's residual.
pub const MAX_REFERRAL_DEPTH: usize = 7;

/// Resolve the referral chain anchored in `tx.data`.
///
/// Each hop must reference an existing block, an existing transaction inside
/// it, and that transaction must carry the one-wei signup marker; otherwise
/// the whole chain is invalid. Reaching a root payload terminates with the
/// partial chain. The walk is bounded by [`MAX_REFERRAL_DEPTH`] iterations.
pub fn signup_chain(
    chain: &dyn ChainStore,
    tx: &Transaction,
) -> Result<Vec<Address>, RewardError> {
    let mut referrers = Vec::with_capacity(MAX_REFERRAL_DEPTH);
    let mut data = tx.data.clone();
    while referrers.len() < MAX_REFERRAL_DEPTH {
        match SignupMessage::parse(&data)? {
            SignupMessage::Root => break,
            SignupMessage::Descendant {
                block_number,
                tx_hash,
            } => {
                let block = chain
                    .block_by_number(block_number)
                    .ok_or(RewardError::InvalidChain)?;
                let referenced = chain
                    .transaction_in_block(&block, &tx_hash)
                    .ok_or(RewardError::InvalidChain)?;
                if !referenced.is_one_wei() {
                    return Err(RewardError::InvalidChain);
                }
                referrers.push(referenced.to);
                data = referenced.data;
            }
        }
    }
    Ok(referrers)
}
