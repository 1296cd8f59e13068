//! The transaction-body execution seam.
//!
//! The EVM is an external collaborator; the driver only needs something that
//! applies a transaction body against state and reports gas. Production
//! wires the real virtual machine in here. [`NoopExecutor`] is the test
//! stand-in: it charges intrinsic gas and produces a receipt without
//! mutating balances, which keeps reward-path assertions exact.

use crate::gas::GasPool;
use crate::receipt::Receipt;
use crate::ProcessorError;
use ur_store::StateStore;
use ur_types::{BlockHeader, Transaction};

/// Intrinsic gas of a plain transaction.
const INTRINSIC_GAS: u64 = 21_000;

/// Applies one transaction body (value transfer, code execution) to state.
pub trait Executor {
    fn execute(
        &mut self,
        state: &mut dyn StateStore,
        header: &BlockHeader,
        tx: &Transaction,
        gas: &mut GasPool,
    ) -> Result<Receipt, ProcessorError>;
}

/// Executor stand-in that charges intrinsic gas and leaves state untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopExecutor;

impl Executor for NoopExecutor {
    fn execute(
        &mut self,
        _state: &mut dyn StateStore,
        _header: &BlockHeader,
        tx: &Transaction,
        gas: &mut GasPool,
    ) -> Result<Receipt, ProcessorError> {
        gas.consume(INTRINSIC_GAS)?;
        Ok(Receipt {
            tx_hash: tx.hash,
            gas_used: INTRINSIC_GAS,
            signup_applied: false,
        })
    }
}
