//! Abstract storage traits for the UR chain core.
//!
//! The reward engine never owns storage. The surrounding node supplies a
//! mutable balance state and a read view of the canonical chain; every
//! backend (the real trie-backed state, in-memory doubles for testing)
//! implements these traits and the rest of the workspace depends only on
//! them.

pub mod chain;
pub mod error;
pub mod state;

pub use chain::ChainStore;
pub use error::StoreError;
pub use state::StateStore;
