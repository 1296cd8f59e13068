//! Mutable account-balance state.

use crate::StoreError;
use ur_types::{Address, Wei};

/// Balance state owned by the active block-processing driver.
///
/// The reward engine only ever mints: every payout is an additive credit from
/// the virtual issuance source. There is no debit operation here; ordinary
/// value transfer belongs to transaction execution, not to this interface.
///
/// Atomicity contract: the driver mutates exactly one `StateStore` per block.
/// Callers hand it a disposable snapshot/journal and discard the whole thing
/// if processing fails, so a mid-block error never leaves partial credits
/// visible.
pub trait StateStore {
    /// Credit `amount` to `addr`, creating the account if needed.
    fn credit(&mut self, addr: &Address, amount: &Wei) -> Result<(), StoreError>;

    /// Current balance of `addr`; zero for unknown accounts.
    fn balance(&self, addr: &Address) -> Result<Wei, StoreError>;
}
