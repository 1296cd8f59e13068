//! In-memory journaled balance state.

use std::collections::HashMap;
use ur_store::{StateStore, StoreError};
use ur_types::{Address, Wei};

/// An in-memory balance state that records every credit in a journal.
///
/// The journal gives tests two things: whole-block atomicity (take a
/// [`snapshot`](NullState::snapshot) before processing,
/// [`revert`](NullState::revert) on failure) and an audit trail for
/// conservation checks (the sum of journal entries since a mark equals the
/// issuance the block claims).
#[derive(Clone, Debug, Default)]
pub struct NullState {
    balances: HashMap<Address, Wei>,
    journal: Vec<(Address, Wei)>,
}

impl NullState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mark identifying the current journal position.
    pub fn snapshot(&self) -> usize {
        self.journal.len()
    }

    /// Undo every credit applied after `mark`, restoring the balances that
    /// existed when the snapshot was taken.
    pub fn revert(&mut self, mark: usize) {
        while self.journal.len() > mark {
            let (addr, amount) = match self.journal.pop() {
                Some(entry) => entry,
                None => break,
            };
            if let Some(balance) = self.balances.get_mut(&addr) {
                if let Some(rest) = balance.checked_sub(&amount) {
                    *balance = rest;
                }
            }
        }
    }

    /// Sum of all credits applied after `mark`.
    pub fn credited_since(&self, mark: usize) -> Wei {
        let mut total = Wei::zero();
        for (_, amount) in &self.journal[mark..] {
            total += amount;
        }
        total
    }

    /// Number of credits applied so far.
    pub fn credit_count(&self) -> usize {
        self.journal.len()
    }
}

impl StateStore for NullState {
    fn credit(&mut self, addr: &Address, amount: &Wei) -> Result<(), StoreError> {
        let balance = self.balances.entry(*addr).or_default();
        *balance += amount;
        self.journal.push((*addr, amount.clone()));
        Ok(())
    }

    fn balance(&self, addr: &Address) -> Result<Wei, StoreError> {
        Ok(self.balances.get(addr).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_accumulate() {
        let mut state = NullState::new();
        let addr = Address::new([1; 20]);
        state.credit(&addr, &Wei::from_u64(10)).unwrap();
        state.credit(&addr, &Wei::from_u64(5)).unwrap();
        assert_eq!(state.balance(&addr).unwrap(), Wei::from_u64(15));
    }

    #[test]
    fn unknown_account_has_zero_balance() {
        let state = NullState::new();
        assert!(state.balance(&Address::ZERO).unwrap().is_zero());
    }

    #[test]
    fn revert_restores_snapshot() {
        let mut state = NullState::new();
        let a = Address::new([1; 20]);
        let b = Address::new([2; 20]);
        state.credit(&a, &Wei::from_u64(10)).unwrap();
        let mark = state.snapshot();
        state.credit(&a, &Wei::from_u64(7)).unwrap();
        state.credit(&b, &Wei::from_u64(3)).unwrap();
        state.revert(mark);
        assert_eq!(state.balance(&a).unwrap(), Wei::from_u64(10));
        assert!(state.balance(&b).unwrap().is_zero());
    }

    #[test]
    fn credited_since_sums_the_tail() {
        let mut state = NullState::new();
        let a = Address::new([1; 20]);
        state.credit(&a, &Wei::from_u64(10)).unwrap();
        let mark = state.snapshot();
        state.credit(&a, &Wei::from_u64(7)).unwrap();
        state.credit(&a, &Wei::from_u64(3)).unwrap();
        assert_eq!(state.credited_since(mark), Wei::from_u64(10));
    }
}
