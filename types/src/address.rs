//! 20-byte account address type.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse an address from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw).map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        let arr: [u8; 20] = bytes
            .try_into()
            .map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let a = Address::from_hex("0x5d32e21bf3594aa66c205fde8dbee3dc726bd61d").unwrap();
        assert_eq!(a.to_string(), "0x5d32e21bf3594aa66c205fde8dbee3dc726bd61d");
    }

    #[test]
    fn prefix_is_optional() {
        let with = Address::from_hex("0x5d32e21bf3594aa66c205fde8dbee3dc726bd61d").unwrap();
        let without = Address::from_hex("5d32e21bf3594aa66c205fde8dbee3dc726bd61d").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(Address::from_hex("0xdeadbeef").is_err());
        assert!(Address::from_hex("not hex at all").is_err());
    }
}
