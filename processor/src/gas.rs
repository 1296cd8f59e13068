//! Per-block gas accounting.

use crate::ProcessorError;

/// Tracks the gas remaining in the block being processed.
#[derive(Clone, Copy, Debug)]
pub struct GasPool {
    remaining: u64,
}

impl GasPool {
    pub fn new(gas_limit: u64) -> Self {
        Self {
            remaining: gas_limit,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Deduct `amount` from the pool.
    pub fn consume(&mut self, amount: u64) -> Result<(), ProcessorError> {
        if amount > self.remaining {
            return Err(ProcessorError::OutOfGas {
                needed: amount,
                remaining: self.remaining,
            });
        }
        self.remaining -= amount;
        Ok(())
    }
}
