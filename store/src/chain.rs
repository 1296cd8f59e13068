//! Read-only view of the canonical chain.

use ur_types::{Block, Transaction, TxHash};

/// Synchronous lookups against the canonical chain.
///
/// By the time a block is being validated the surrounding node has already
/// synchronised headers and bodies, so implementations answer from an
/// in-memory cache or a local database; nothing here suspends on I/O.
pub trait ChainStore {
    /// The canonical block at height `n`, or `None` if unknown.
    fn block_by_number(&self, n: u64) -> Option<Block>;

    /// A transaction within `block` by hash, or `None` if absent.
    fn transaction_in_block(&self, block: &Block, hash: &TxHash) -> Option<Transaction> {
        block.transaction(hash).cloned()
    }
}
