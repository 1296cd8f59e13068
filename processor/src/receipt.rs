//! Transaction receipts.

use serde::{Deserialize, Serialize};
use ur_types::TxHash;

/// Outcome of executing one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub gas_used: u64,
    /// Whether signup payouts were credited for this transaction.
    pub signup_applied: bool,
}
