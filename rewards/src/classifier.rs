//! Signup-transaction classification.

use crate::message::SIGNUP_MESSAGE_VERSION;
use crate::registry::PrivilegedRegistry;
use ur_types::Transaction;

/// Whether `tx` is a signup transaction.
///
/// A transaction is a signup iff its sender is privileged, its value is the
/// one-wei protocol marker and its data opens with the current message
/// version. Anything else is an ordinary transfer; the reward engine never
/// touches it.
///
/// Classification only inspects the leading byte. A payload that passes here
/// can still fail resolution (wrong length, dangling pointer), which
/// withholds the payout without invalidating the transaction or the block.
pub fn is_signup_transaction(registry: &PrivilegedRegistry, tx: &Transaction) -> bool {
    registry.is_privileged(&tx.from)
        && tx.is_one_wei()
        && tx.data.first() == Some(&SIGNUP_MESSAGE_VERSION)
}
