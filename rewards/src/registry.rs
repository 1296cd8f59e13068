//! The privileged-sender registry.
//!
//! Seven fixed accounts are authorised to originate signup transactions.
//! Each is paired with a receiver account (residuals and the management fee)
//! and a UR Future Fund account. The table is a constant; no on-chain
//! mechanism adds or removes entries.

use std::collections::HashMap;
use ur_types::Address;

/// (privileged sender, receiver, UR Future Fund) hex triples.
const PRIVILEGED_ADDRESSES: [(&str, &str, &str); 7] = [
    (
        "0x5d32e21bf3594aa66c205fde8dbee3dc726bd61d",
        "0xb76a8e9d411b75a3c0fd6fafaf9b4af9da1ec6d7",
        "0x1c83bb5a3c5ff80bb2c44a588db21151a1b5ad51",
    ),
    (
        "0x9194d1fa799d9feb9755aadc2aa28ba7904b0efd",
        "0xc4411a0446b503db00d597a6c6a0643cec1e9eda",
        "0x3a9bfa33d4e1b5c9dab9dabcdf349cc95a4a4a28",
    ),
    (
        "0xab4b7eeb95b56bae3b2630525b4d9165f0cab172",
        "0x5a0df72c29822efc70ff1cc41a4da6d951330b71",
        "0x8d1dbf28aa94c23c7a63da9d3f62a7d6e3c3e1de",
    ),
    (
        "0xea82e994a02fb137ffaca8051b24f8629b478423",
        "0xe74be964a4d69951e3a74d997553c2063cf9ac04",
        "0x26b23d97e7bef4cbd64be2c89afe21d01b47cdbc",
    ),
    (
        "0xb1626c3fc1662410d85d83553d395cabba148be1",
        "0x29199be72e1f692ad64ff25ea55b3b44c6ee3bb6",
        "0x74e01e80de83d2d9baa31f0a0b4dc129ed5cd9b2",
    ),
    (
        "0x65afd2c418a1005f678f9681f50595071e936d7c",
        "0x08b57c894cd81e98638553a6cdfbede0cdcaa3ad",
        "0x92c8e5bb1c62a17d31e9e5ab9f7e6d57dd1d8b10",
    ),
    (
        "0x49158a28df943acd20be7c8e758d8f4a9dc07d05",
        "0xe2c362411658e9f1eb76e5f40a2d717109a8b33c",
        "0x60f43f3e65427bcd6e256e1e3eb8ea27bbdeb566",
    ),
];

/// The payout destinations paired with one privileged sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrivilegedEntry {
    pub receiver: Address,
    pub ur_future_fund: Address,
}

/// Immutable mapping from privileged sender to its payout destinations.
pub struct PrivilegedRegistry {
    entries: HashMap<Address, PrivilegedEntry>,
}

impl PrivilegedRegistry {
    /// Build the registry from the constant table.
    ///
    /// # Panics
    /// Panics if a literal fails to parse or the distinctness invariant is
    /// violated (sender, receiver and fund must be pairwise distinct). The
    /// table is a process-start constant, so either is a build mistake.
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(PRIVILEGED_ADDRESSES.len());
        for (sender, receiver, fund) in PRIVILEGED_ADDRESSES {
            let sender = addr(sender);
            let entry = PrivilegedEntry {
                receiver: addr(receiver),
                ur_future_fund: addr(fund),
            };
            assert!(
                sender != entry.receiver
                    && sender != entry.ur_future_fund
                    && entry.receiver != entry.ur_future_fund,
                "privileged entry {sender} reuses an address"
            );
            entries.insert(sender, entry);
        }
        Self { entries }
    }

    /// Whether `address` may originate signup transactions.
    pub fn is_privileged(&self, address: &Address) -> bool {
        self.entries.contains_key(address)
    }

    /// The payout destinations for a privileged sender.
    pub fn receivers_of(&self, address: &Address) -> Option<&PrivilegedEntry> {
        self.entries.get(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PrivilegedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn addr(s: &str) -> Address {
    match Address::from_hex(s) {
        Ok(a) => a,
        Err(_) => panic!("invalid address constant: {s}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_seven_senders_are_privileged() {
        let registry = PrivilegedRegistry::new();
        assert_eq!(registry.len(), 7);
        for (sender, _, _) in PRIVILEGED_ADDRESSES {
            assert!(registry.is_privileged(&Address::from_hex(sender).unwrap()));
        }
    }

    #[test]
    fn unknown_sender_is_not_privileged() {
        let registry = PrivilegedRegistry::new();
        assert!(!registry.is_privileged(&Address::ZERO));
        assert!(registry.receivers_of(&Address::ZERO).is_none());
    }

    #[test]
    fn receivers_and_funds_are_not_privileged() {
        // Receiver and fund accounts must not themselves originate signups.
        let registry = PrivilegedRegistry::new();
        for (_, receiver, fund) in PRIVILEGED_ADDRESSES {
            assert!(!registry.is_privileged(&Address::from_hex(receiver).unwrap()));
            assert!(!registry.is_privileged(&Address::from_hex(fund).unwrap()));
        }
    }

    #[test]
    fn entry_lookup_returns_the_pair() {
        let registry = PrivilegedRegistry::new();
        let sender = Address::from_hex(PRIVILEGED_ADDRESSES[0].0).unwrap();
        let entry = registry.receivers_of(&sender).unwrap();
        assert_eq!(
            entry.receiver,
            Address::from_hex(PRIVILEGED_ADDRESSES[0].1).unwrap()
        );
        assert_eq!(
            entry.ur_future_fund,
            Address::from_hex(PRIVILEGED_ADDRESSES[0].2).unwrap()
        );
    }
}
