use std::str::FromStr;
use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use listing_sniper::domain::{EncodedCall, GasPolicy, TransactionResult};
use listing_sniper::error::Result;
use listing_sniper::port::StrategyInvoker;

use super::fixtures::{BUYER, STRATEGY};

/// Strategy fake that "mines" every call with a fixed receipt status.
#[derive(Clone)]
pub struct RecordingInvoker {
    buyer: Address,
    strategy: Address,
    success: bool,
    calls: Arc<Mutex<Vec<(EncodedCall, GasPolicy)>>>,
}

impl RecordingInvoker {
    pub fn succeeding() -> Self {
        Self::with_status(true)
    }

    pub fn reverting() -> Self {
        Self::with_status(false)
    }

    fn with_status(success: bool) -> Self {
        Self {
            buyer: Address::from_str(BUYER).expect("buyer address"),
            strategy: Address::from_str(STRATEGY).expect("strategy address"),
            success,
            calls: Arc::default(),
        }
    }

    /// Use the same address as buyer and strategy.
    pub fn self_recipient(mut self) -> Self {
        self.strategy = self.buyer;
        self
    }

    pub fn calls(&self) -> Vec<(EncodedCall, GasPolicy)> {
        self.calls.lock().expect("lock invoker calls").clone()
    }
}

#[async_trait]
impl StrategyInvoker for RecordingInvoker {
    fn buyer(&self) -> Address {
        self.buyer
    }

    fn strategy_address(&self) -> Address {
        self.strategy
    }

    async fn invoke(&self, call: &EncodedCall, gas: GasPolicy) -> Result<TransactionResult> {
        self.calls
            .lock()
            .expect("lock invoker calls")
            .push((call.clone(), gas));
        Ok(TransactionResult {
            tx_hash: B256::repeat_byte(0xab),
            success: self.success,
            block_number: Some(21_000_000),
            gas_used: 180_000,
        })
    }
}
