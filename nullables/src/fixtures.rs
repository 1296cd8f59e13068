//! Shared test fixture builders.

use ur_types::{Address, BlockHeader, Transaction, TxHash, Wei};

/// Payload of a root signup (privileged sender, no referrer).
pub fn signup_root_data() -> Vec<u8> {
    vec![1]
}

/// Payload of a descendant signup pointing at the referring member's signup
/// transaction.
pub fn signup_descendant_data(block_number: u64, tx_hash: &TxHash) -> Vec<u8> {
    let mut data = Vec::with_capacity(41);
    data.push(1);
    data.extend_from_slice(&block_number.to_be_bytes());
    data.extend_from_slice(tx_hash.as_bytes());
    data
}

/// A one-wei transaction with the given payload. The hash is synthesised
/// from `tag` so fixtures stay deterministic and distinct.
pub fn signup_tx(from: Address, to: Address, data: Vec<u8>, tag: u8) -> Transaction {
    Transaction {
        from,
        to,
        value: Wei::from_u64(1),
        data,
        hash: TxHash::new([tag; 32]),
    }
}

/// An ordinary value transfer.
pub fn transfer_tx(from: Address, to: Address, value: Wei, tag: u8) -> Transaction {
    Transaction {
        from,
        to,
        value,
        data: vec![],
        hash: TxHash::new([tag; 32]),
    }
}

/// A header at `number` with the given coinbase and a roomy gas limit.
pub fn header(number: u64, coinbase: Address) -> BlockHeader {
    let mut h = BlockHeader::genesis();
    h.number = number;
    h.coinbase = coinbase;
    h.gas_limit = 10_000_000;
    h
}
