//! In-memory canonical chain.

use std::collections::BTreeMap;
use ur_store::ChainStore;
use ur_types::{Block, BlockHeader, Transaction};

/// An in-memory chain indexed by block number.
#[derive(Clone, Debug, Default)]
pub struct NullChain {
    blocks: BTreeMap<u64, Block>,
}

impl NullChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block at its own header number, replacing any previous block
    /// at that height.
    pub fn insert(&mut self, block: Block) {
        self.blocks.insert(block.header.number, block);
    }

    /// Append a block of `transactions` at the next height and return its
    /// header. Heights start at 1 so number 0 stays free for a genesis.
    pub fn push_block(&mut self, transactions: Vec<Transaction>) -> BlockHeader {
        let number = self.blocks.keys().next_back().map_or(1, |n| n + 1);
        let mut header = BlockHeader::genesis();
        header.number = number;
        let block = Block {
            header: header.clone(),
            transactions,
            uncles: vec![],
        };
        self.blocks.insert(number, block);
        header
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl ChainStore for NullChain {
    fn block_by_number(&self, n: u64) -> Option<Block> {
        self.blocks.get(&n).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_consecutive_numbers() {
        let mut chain = NullChain::new();
        assert_eq!(chain.push_block(vec![]).number, 1);
        assert_eq!(chain.push_block(vec![]).number, 2);
        assert!(chain.block_by_number(1).is_some());
        assert!(chain.block_by_number(3).is_none());
    }
}
