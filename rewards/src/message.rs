//! Signup wire-message codec.
//!
//! A signup transaction carries its referral anchor in `tx.data`:
//!
//! - byte 0: message version, exactly `0x01`
//! - root signup (a privileged address signs a member): total length 1
//! - descendant signup (a member referred the new member): total length 41,
//!   bytes [1..9) the referring signup's block number (big-endian u64),
//!   bytes [9..41) the referring signup's transaction hash

use crate::error::RewardError;
use ur_types::TxHash;

/// The current signup message version.
pub const SIGNUP_MESSAGE_VERSION: u8 = 1;

const ROOT_LEN: usize = 1;
const DESCENDANT_LEN: usize = 41;

/// A decoded signup payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupMessage {
    /// No referrer; the chain terminates here.
    Root,
    /// Points at the referring member's own signup transaction.
    Descendant { block_number: u64, tx_hash: TxHash },
}

impl SignupMessage {
    /// Decode a signup payload. Any deviation from the bit-exact format is
    /// an invalid chain.
    pub fn parse(data: &[u8]) -> Result<Self, RewardError> {
        if data.first() != Some(&SIGNUP_MESSAGE_VERSION) {
            return Err(RewardError::InvalidChain);
        }
        match data.len() {
            ROOT_LEN => Ok(Self::Root),
            DESCENDANT_LEN => {
                let mut number = [0u8; 8];
                number.copy_from_slice(&data[1..9]);
                let mut hash = [0u8; 32];
                hash.copy_from_slice(&data[9..41]);
                Ok(Self::Descendant {
                    block_number: u64::from_be_bytes(number),
                    tx_hash: TxHash::new(hash),
                })
            }
            _ => Err(RewardError::InvalidChain),
        }
    }

    /// Encode to the wire format.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Root => vec![SIGNUP_MESSAGE_VERSION],
            Self::Descendant {
                block_number,
                tx_hash,
            } => {
                let mut data = Vec::with_capacity(DESCENDANT_LEN);
                data.push(SIGNUP_MESSAGE_VERSION);
                data.extend_from_slice(&block_number.to_be_bytes());
                data.extend_from_slice(tx_hash.as_bytes());
                data
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_message() {
        assert_eq!(SignupMessage::parse(&[1]).unwrap(), SignupMessage::Root);
    }

    #[test]
    fn descendant_message() {
        let mut data = vec![1u8];
        data.extend_from_slice(&10u64.to_be_bytes());
        data.extend_from_slice(&[0xAB; 32]);
        let msg = SignupMessage::parse(&data).unwrap();
        assert_eq!(
            msg,
            SignupMessage::Descendant {
                block_number: 10,
                tx_hash: TxHash::new([0xAB; 32]),
            }
        );
        assert_eq!(msg.encode(), data);
    }

    #[test]
    fn wrong_version_rejected() {
        assert!(SignupMessage::parse(&[2]).is_err());
        assert!(SignupMessage::parse(&[0]).is_err());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(SignupMessage::parse(&[]).is_err());
        assert!(SignupMessage::parse(&[1, 2, 3]).is_err());
        assert!(SignupMessage::parse(&[1; 10]).is_err());
        assert!(SignupMessage::parse(&[1; 40]).is_err());
        assert!(SignupMessage::parse(&[1; 42]).is_err());
    }
}
