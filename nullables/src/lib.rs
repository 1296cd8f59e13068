//! Nullable infrastructure for deterministic testing.
//!
//! The reward engine's collaborators (balance state, canonical chain) are
//! abstracted behind the `ur_store` traits. This crate provides
//! test-friendly implementations that return deterministic values, can be
//! inspected programmatically, and never touch the filesystem or network.
//!
//! Usage: swap the node's real backends for nullables in tests.

pub mod chain;
pub mod fixtures;
pub mod state;

pub use chain::NullChain;
pub use state::NullState;
