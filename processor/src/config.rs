//! Chain configuration with TOML file support.

use crate::ProcessorError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use ur_types::Wei;

/// Which reward scheme governs the chain.
///
/// Exactly one scheme is active per chain. The signup-chain scheme is the
/// current one; the legacy bonus-multiplier rule is recognised in
/// configuration for old chain specs but no longer implemented, and the
/// driver refuses to start under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewardScheme {
    SignupChain,
    LegacyBonus,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self::SignupChain
    }
}

/// Configuration for the block-processing core.
///
/// Can be loaded from a TOML file via [`ChainConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain name, informational only.
    #[serde(default = "default_network")]
    pub network: String,

    /// The active reward scheme.
    #[serde(default)]
    pub reward_scheme: RewardScheme,

    /// Static base mining reward in whole UR.
    #[serde(default = "default_block_reward_ur")]
    pub block_reward_ur: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            reward_scheme: RewardScheme::default(),
            block_reward_ur: default_block_reward_ur(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

impl ChainConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ProcessorError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ProcessorError::Config(format!("cannot read config file: {e}")))?;
        toml::from_str(&raw).map_err(|e| ProcessorError::Config(format!("invalid config: {e}")))
    }

    /// The base mining reward in wei.
    pub fn block_reward(&self) -> Wei {
        Wei::from_ur(self.block_reward_ur)
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> String {
    "ur-mainnet".to_string()
}

fn default_block_reward_ur() -> u64 {
    7
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
