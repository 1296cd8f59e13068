//! Block header and block types.
//!
//! Headers carry two consensus fields beyond the Ethereum-family standard
//! set: `n_signups` (cumulative signup count) and `total_wei` (cumulative
//! issued wei). Both participate in the header hash computed by the
//! surrounding node, so any disagreement splits consensus.

use crate::{Address, BlockHash, Transaction, TxHash, Wei};
use serde::{Deserialize, Serialize};

/// An extended block header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub number: u64,
    pub parent_hash: BlockHash,
    pub coinbase: Address,
    pub gas_limit: u64,
    pub timestamp: u64,
    /// Cumulative number of signup transactions up to and including this block.
    pub n_signups: u64,
    /// Cumulative wei issued by mining and signup rewards up to and including
    /// this block. Serialised as an unsigned big-endian byte string in the
    /// header encoding.
    pub total_wei: Wei,
    /// Header hash, computed and stamped by the surrounding node.
    pub hash: BlockHash,
}

impl BlockHeader {
    /// An empty genesis-shaped header. Tests and builders start from this.
    pub fn genesis() -> Self {
        Self {
            number: 0,
            parent_hash: BlockHash::ZERO,
            coinbase: Address::ZERO,
            gas_limit: 0,
            timestamp: 0,
            n_signups: 0,
            total_wei: Wei::zero(),
            hash: BlockHash::ZERO,
        }
    }
}

/// A block: header, ordered transactions, uncle headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    pub uncles: Vec<BlockHeader>,
}

impl Block {
    /// Look up a transaction in this block by hash.
    pub fn transaction(&self, hash: &TxHash) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.hash == *hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_lookup() {
        let tx = Transaction {
            from: Address::ZERO,
            to: Address::ZERO,
            value: Wei::from_u64(1),
            data: vec![1],
            hash: TxHash::new([0xAB; 32]),
        };
        let block = Block {
            header: BlockHeader::genesis(),
            transactions: vec![tx.clone()],
            uncles: vec![],
        };
        assert_eq!(block.transaction(&TxHash::new([0xAB; 32])), Some(&tx));
        assert_eq!(block.transaction(&TxHash::new([0xCD; 32])), None);
    }
}
