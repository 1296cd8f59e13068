use thiserror::Error;
use ur_store::StoreError;
use ur_types::Address;

#[derive(Debug, Error)]
pub enum RewardError {
    /// A referral hop was malformed or referenced an unknown block or
    /// transaction. The transaction still executes as a plain transfer; only
    /// the signup payout is withheld.
    #[error("detected an invalid signup chain")]
    InvalidChain,

    /// The classifier said privileged but the registry disagrees. Unreachable
    /// by contract; observing it means an implementation bug, not a bad block.
    #[error("sender {0} is not a privileged address")]
    NotPrivileged(Address),

    /// The balance state refused a credit. Fatal to the whole block.
    #[error("state credit failed: {0}")]
    StateCredit(#[from] StoreError),
}
