//! Strategy contract port.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::{EncodedCall, GasPolicy, TransactionResult};
use crate::error::Result;

/// On-chain contract that buys a token on the caller's behalf.
#[async_trait]
pub trait StrategyInvoker: Send + Sync {
    /// Address of the paying wallet.
    fn buyer(&self) -> Address;

    /// Address of the strategy contract (receives the purchased token).
    fn strategy_address(&self) -> Address;

    /// Submit `buyTargetNFT` for `call` and wait until it is mined.
    ///
    /// A mined receipt is returned as-is, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::TransactionFailed`](crate::error::PurchaseError::TransactionFailed)
    /// when submission or the receipt wait fails.
    async fn invoke(&self, call: &EncodedCall, gas: GasPolicy) -> Result<TransactionResult>;
}
