//! Chain, strategy contract and gas configuration.

use serde::Deserialize;

use crate::domain::{GasPolicy, DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE_GWEI};

/// JSON-RPC connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// RPC endpoint. `RPC_URL` env var takes precedence.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Upper bound on waiting for the transaction receipt.
    #[serde(default = "default_receipt_timeout_secs")]
    pub receipt_timeout_secs: u64,
}

fn default_rpc_url() -> String {
    "https://ethereum-rpc.publicnode.com".into()
}

const fn default_receipt_timeout_secs() -> u64 {
    300
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            receipt_timeout_secs: default_receipt_timeout_secs(),
        }
    }
}

/// Deployed strategy contract.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyConfig {
    #[serde(default = "default_strategy_address")]
    pub address: String,
}

fn default_strategy_address() -> String {
    "0x6BCba7Cd81a5F12c10Ca1BF9B36761CC382658E8".into()
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            address: default_strategy_address(),
        }
    }
}

/// Fixed gas parameters. Not estimated.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GasConfig {
    #[serde(default = "default_gas_limit")]
    pub limit: u64,
    #[serde(default = "default_gas_price_gwei")]
    pub price_gwei: u64,
}

const fn default_gas_limit() -> u64 {
    DEFAULT_GAS_LIMIT
}

const fn default_gas_price_gwei() -> u64 {
    DEFAULT_GAS_PRICE_GWEI
}

impl GasConfig {
    #[must_use]
    pub const fn policy(&self) -> GasPolicy {
        GasPolicy::from_gwei(self.limit, self.price_gwei)
    }
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            limit: default_gas_limit(),
            price_gwei: default_gas_price_gwei(),
        }
    }
}
