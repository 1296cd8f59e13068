//! The block-processing driver.
//!
//! Owns the immutable reward context (config, table, registry) and walks one
//! block at a time: signup payouts first, then the transaction body, then
//! mining rewards, then the header counters. Validation recomputes the
//! counters and rejects mismatches; sealing writes them.
//!
//! One driver instance owns one mutable state snapshot. Instances for
//! different chain branches can run in parallel; the shared table and
//! registry are read-only after construction.

use tracing::{debug, warn};
use ur_rewards::{
    apply_signup_rewards, is_signup_transaction, PrivilegedRegistry, RewardError, RewardTable,
};
use ur_store::{ChainStore, StateStore};
use ur_types::{Block, BlockHeader, Transaction, Wei};

use crate::accumulator::calculate_block_totals;
use crate::config::{ChainConfig, RewardScheme};
use crate::executor::Executor;
use crate::gas::GasPool;
use crate::miner::accumulate_mining_rewards;
use crate::receipt::Receipt;
use crate::ProcessorError;

/// Sequences transaction execution and reward crediting for whole blocks.
pub struct BlockProcessor<'c> {
    config: ChainConfig,
    table: RewardTable,
    registry: PrivilegedRegistry,
    chain: &'c dyn ChainStore,
}

impl<'c> BlockProcessor<'c> {
    /// Build a driver for `config` against a canonical-chain view.
    ///
    /// Only the signup-chain scheme is implemented; a chain spec naming the
    /// legacy bonus rule is refused here rather than silently mis-rewarded.
    pub fn new(config: ChainConfig, chain: &'c dyn ChainStore) -> Result<Self, ProcessorError> {
        if config.reward_scheme != RewardScheme::SignupChain {
            return Err(ProcessorError::UnsupportedScheme(config.reward_scheme));
        }
        let table = RewardTable::with_block_reward(config.block_reward());
        Ok(Self {
            config,
            table,
            registry: PrivilegedRegistry::new(),
            chain,
        })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn table(&self) -> &RewardTable {
        &self.table
    }

    pub fn registry(&self) -> &PrivilegedRegistry {
        &self.registry
    }

    /// Validate-and-apply: execute the block against `state` and require the
    /// header's counters to match the recomputed pair.
    ///
    /// On any error the passed-in state must be discarded by the caller; the
    /// driver does not attempt partial rollback.
    pub fn process(
        &self,
        block: &Block,
        parent: &BlockHeader,
        state: &mut dyn StateStore,
        executor: &mut dyn Executor,
    ) -> Result<Vec<Receipt>, ProcessorError> {
        let (receipts, n_signups, total_wei) =
            self.execute_block(&block.header, block, parent, state, executor)?;

        if n_signups != block.header.n_signups {
            warn!(
                block = block.header.number,
                got = block.header.n_signups,
                expected = n_signups,
                "rejecting block: signup counter mismatch"
            );
            return Err(ProcessorError::HeaderCountersMismatch {
                field: "n_signups",
                got: block.header.n_signups.to_string(),
                expected: n_signups.to_string(),
            });
        }
        if total_wei != block.header.total_wei {
            warn!(
                block = block.header.number,
                "rejecting block: issuance counter mismatch"
            );
            return Err(ProcessorError::HeaderCountersMismatch {
                field: "total_wei",
                got: block.header.total_wei.to_string(),
                expected: total_wei.to_string(),
            });
        }
        Ok(receipts)
    }

    /// Producer-side variant: execute the block and write the computed
    /// counters into its header instead of validating them.
    pub fn seal(
        &self,
        block: &mut Block,
        parent: &BlockHeader,
        state: &mut dyn StateStore,
        executor: &mut dyn Executor,
    ) -> Result<Vec<Receipt>, ProcessorError> {
        let header = block.header.clone();
        let (receipts, n_signups, total_wei) =
            self.execute_block(&header, block, parent, state, executor)?;
        block.header.n_signups = n_signups;
        block.header.total_wei = total_wei;
        Ok(receipts)
    }

    fn execute_block(
        &self,
        header: &BlockHeader,
        block: &Block,
        parent: &BlockHeader,
        state: &mut dyn StateStore,
        executor: &mut dyn Executor,
    ) -> Result<(Vec<Receipt>, u64, Wei), ProcessorError> {
        let mut gas = GasPool::new(header.gas_limit);
        let mut receipts = Vec::with_capacity(block.transactions.len());
        for tx in &block.transactions {
            let signup_applied = self.apply_signup(state, parent, header, tx)?;
            let mut receipt = executor.execute(state, header, tx, &mut gas)?;
            receipt.signup_applied = signup_applied;
            receipts.push(receipt);
        }
        accumulate_mining_rewards(state, self.table.block_reward(), header, &block.uncles)?;
        let (n_signups, total_wei) = calculate_block_totals(
            &self.table,
            &self.registry,
            self.chain,
            parent.n_signups,
            &parent.total_wei,
            header,
            &block.uncles,
            &block.transactions,
        );
        Ok((receipts, n_signups, total_wei))
    }

    /// Credit signup payouts for `tx` if it is a well-formed signup.
    ///
    /// A payload that fails to resolve is not a consensus fault: the payout
    /// is withheld and the transaction proceeds as an ordinary transfer.
    fn apply_signup(
        &self,
        state: &mut dyn StateStore,
        parent: &BlockHeader,
        header: &BlockHeader,
        tx: &Transaction,
    ) -> Result<bool, ProcessorError> {
        if !is_signup_transaction(&self.registry, tx) {
            return Ok(false);
        }
        match apply_signup_rewards(
            state,
            self.chain,
            &self.table,
            &self.registry,
            parent,
            header,
            tx,
        ) {
            Ok(()) => Ok(true),
            Err(RewardError::InvalidChain) => {
                debug!(tx = %tx.hash, "signup payload did not resolve; no payout");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::NoopExecutor;
    use ur_nullables::{fixtures, NullChain, NullState};
    use ur_types::Address;

    fn privileged() -> Address {
        Address::from_hex("0x5d32e21bf3594aa66c205fde8dbee3dc726bd61d").unwrap()
    }

    fn seal_and_validate(block: &mut Block, parent: &BlockHeader, chain: &NullChain) {
        let processor = BlockProcessor::new(ChainConfig::default(), chain).unwrap();
        let mut seal_state = NullState::new();
        processor
            .seal(block, parent, &mut seal_state, &mut NoopExecutor)
            .unwrap();
        let mut state = NullState::new();
        processor
            .process(block, parent, &mut state, &mut NoopExecutor)
            .unwrap();
    }

    #[test]
    fn legacy_scheme_is_refused() {
        let chain = NullChain::new();
        let config = ChainConfig {
            reward_scheme: RewardScheme::LegacyBonus,
            ..ChainConfig::default()
        };
        assert!(matches!(
            BlockProcessor::new(config, &chain),
            Err(ProcessorError::UnsupportedScheme(RewardScheme::LegacyBonus))
        ));
    }

    #[test]
    fn sealed_block_validates() {
        let chain = NullChain::new();
        let parent = fixtures::header(0, Address::new([1; 20]));
        let signup = fixtures::signup_tx(
            privileged(),
            Address::new([9; 20]),
            fixtures::signup_root_data(),
            1,
        );
        let mut block = Block {
            header: fixtures::header(1, Address::new([1; 20])),
            transactions: vec![signup],
            uncles: vec![],
        };
        seal_and_validate(&mut block, &parent, &chain);
        assert_eq!(block.header.n_signups, 1);
        assert_eq!(block.header.total_wei, Wei::from_ur(10_014));
    }

    #[test]
    fn wrong_counters_reject_the_block() {
        let chain = NullChain::new();
        let parent = fixtures::header(0, Address::new([1; 20]));
        let mut block = Block {
            header: fixtures::header(1, Address::new([1; 20])),
            transactions: vec![],
            uncles: vec![],
        };
        block.header.n_signups = 3;
        let processor = BlockProcessor::new(ChainConfig::default(), &chain).unwrap();
        let mut state = NullState::new();
        let err = processor
            .process(&block, &parent, &mut state, &mut NoopExecutor)
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::HeaderCountersMismatch { field: "n_signups", .. }
        ));
    }
}
