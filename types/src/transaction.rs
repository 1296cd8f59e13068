//! Signer-resolved transaction form.

use crate::{Address, TxHash, Wei};
use serde::{Deserialize, Serialize};

/// A transaction as observed by block processing.
///
/// The sender has already been recovered by the surrounding node's signer, so
/// `from` is a concrete field rather than a lazy signature recovery. The
/// reward engine never re-verifies signatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub from: Address,
    pub to: Address,
    pub value: Wei,
    pub data: Vec<u8>,
    pub hash: TxHash,
}

impl Transaction {
    /// Whether the transaction carries the one-wei protocol marker value.
    pub fn is_one_wei(&self) -> bool {
        self.value == Wei::from_u64(1)
    }
}
