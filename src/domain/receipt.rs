//! Mined transaction receipt summary.

use std::fmt;

use alloy_primitives::B256;

/// Outcome of the mined strategy transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    pub tx_hash: B256,
    /// Receipt status (`true` when the status code is 1).
    pub success: bool,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "Success" } else { "Failed" };
        write!(f, "{} ({status}", self.tx_hash)?;
        if let Some(block) = self.block_number {
            write!(f, ", block {block}")?;
        }
        write!(f, ", gas used {})", self.gas_used)
    }
}
