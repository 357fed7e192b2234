//! Encoded marketplace call and the gas policy used to submit it.

use alloy_primitives::utils::format_ether;
use alloy_primitives::{Address, Bytes, U256};

/// One gwei in wei.
pub const GWEI: u128 = 1_000_000_000;

/// Default gas limit for the strategy call.
pub const DEFAULT_GAS_LIMIT: u64 = 800_000;

/// Default gas price in gwei.
pub const DEFAULT_GAS_PRICE_GWEI: u64 = 3;

/// ABI-encoded fulfillment call ready to be forwarded by the strategy
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    /// Marketplace contract the strategy forwards `data` to.
    pub target: Address,
    /// Payment in wei, sent both as argument and as `msg.value`.
    pub value: U256,
    pub data: Bytes,
    pub expected_id: U256,
    /// Function name the marketplace reported, if any.
    pub function: Option<String>,
}

impl EncodedCall {
    #[must_use]
    pub fn value_ether(&self) -> String {
        format_ether(self.value)
    }
}

/// Fixed gas parameters for the purchase transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasPolicy {
    pub limit: u64,
    pub price_wei: u128,
}

impl GasPolicy {
    #[must_use]
    pub const fn from_gwei(limit: u64, price_gwei: u64) -> Self {
        Self {
            limit,
            price_wei: price_gwei as u128 * GWEI,
        }
    }
}

impl Default for GasPolicy {
    fn default() -> Self {
        Self::from_gwei(DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE_GWEI)
    }
}
