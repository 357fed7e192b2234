//! `buyTargetNFT` invocation over JSON-RPC.

use std::time::Duration;

use alloy_primitives::Address;
use alloy_provider::network::{EthereumWallet, ReceiptResponse};
use alloy_provider::ProviderBuilder;
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::info;

use crate::domain::{EncodedCall, GasPolicy, TransactionResult};
use crate::error::{PurchaseError, Result};
use crate::port::outbound::strategy::StrategyInvoker;

sol! {
    #[sol(rpc)]
    contract NftStrategy {
        function buyTargetNFT(
            uint256 value,
            bytes calldata data,
            uint256 expectedId,
            address target
        ) external payable;
    }
}

/// Strategy contract bound to the paying wallet.
///
/// The provider is built per call so the adapter holds no connection state.
pub struct StrategyContract {
    signer: PrivateKeySigner,
    rpc_url: url::Url,
    address: Address,
    receipt_timeout: Duration,
}

impl StrategyContract {
    #[must_use]
    pub fn new(
        signer: PrivateKeySigner,
        rpc_url: url::Url,
        address: Address,
        receipt_timeout: Duration,
    ) -> Self {
        Self {
            signer,
            rpc_url,
            address,
            receipt_timeout,
        }
    }

    #[must_use]
    pub fn receipt_timeout(&self) -> Duration {
        self.receipt_timeout
    }
}

fn failed(reason: String) -> PurchaseError {
    PurchaseError::TransactionFailed {
        reason,
        receipt: None,
    }
}

#[async_trait]
impl StrategyInvoker for StrategyContract {
    fn buyer(&self) -> Address {
        self.signer.address()
    }

    fn strategy_address(&self) -> Address {
        self.address
    }

    async fn invoke(&self, call: &EncodedCall, gas: GasPolicy) -> Result<TransactionResult> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url.clone());

        let strategy = NftStrategy::new(self.address, &provider);

        info!(
            strategy = %self.address,
            target = %call.target,
            value_wei = %call.value,
            gas_limit = gas.limit,
            gas_price_wei = gas.price_wei,
            "Calling buyTargetNFT"
        );

        let pending_tx = strategy
            .buyTargetNFT(call.value, call.data.clone(), call.expected_id, call.target)
            .value(call.value)
            .gas(gas.limit)
            .gas_price(gas.price_wei)
            .send()
            .await
            .map_err(|e| failed(format!("Failed to send transaction: {e}")))?;

        info!(tx_hash = %pending_tx.tx_hash(), "Transaction sent");

        let receipt = pending_tx
            .with_timeout(Some(self.receipt_timeout))
            .get_receipt()
            .await
            .map_err(|e| failed(format!("Failed to get receipt: {e}")))?;

        let result = TransactionResult {
            tx_hash: receipt.transaction_hash(),
            success: receipt.status(),
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
        };

        info!(
            tx_hash = %result.tx_hash,
            block = ?result.block_number,
            gas_used = result.gas_used,
            success = result.success,
            "Transaction mined"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Bytes, U256};
    use alloy_sol_types::SolCall;
    use std::str::FromStr;

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn contract() -> StrategyContract {
        StrategyContract::new(
            PrivateKeySigner::from_str(TEST_KEY).unwrap(),
            "http://127.0.0.1:8545".parse().unwrap(),
            Address::from_str("0x6BCba7Cd81a5F12c10Ca1BF9B36761CC382658E8").unwrap(),
            Duration::from_secs(300),
        )
    }

    #[test]
    fn buyer_is_signer_address() {
        assert_eq!(
            contract().buyer(),
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );
    }

    #[test]
    fn strategy_address_is_configured_address() {
        assert_eq!(
            contract().strategy_address(),
            Address::from_str("0x6BCba7Cd81a5F12c10Ca1BF9B36761CC382658E8").unwrap()
        );
        assert_eq!(contract().receipt_timeout(), Duration::from_secs(300));
    }

    #[test]
    fn buy_call_carries_forwarded_arguments() {
        let call = NftStrategy::buyTargetNFTCall {
            value: U256::from(500u64),
            data: Bytes::from(vec![0, 0, 0, 0, 1]),
            expectedId: U256::from(5077u64),
            target: Address::repeat_byte(0x42),
        };
        let encoded = call.abi_encode();
        let decoded = NftStrategy::buyTargetNFTCall::abi_decode(&encoded).unwrap();

        assert_eq!(decoded.value, U256::from(500u64));
        assert_eq!(decoded.expectedId, U256::from(5077u64));
        assert_eq!(decoded.target, Address::repeat_byte(0x42));
        assert_eq!(decoded.data, Bytes::from(vec![0, 0, 0, 0, 1]));
        assert_eq!(&encoded[..4], &NftStrategy::buyTargetNFTCall::SELECTOR[..]);
    }

    #[tokio::test]
    async fn unreachable_rpc_fails_without_receipt() {
        let strategy = StrategyContract::new(
            PrivateKeySigner::from_str(TEST_KEY).unwrap(),
            "http://127.0.0.1:1".parse().unwrap(),
            Address::repeat_byte(0x01),
            Duration::from_secs(1),
        );
        let call = EncodedCall {
            target: Address::repeat_byte(0x02),
            value: U256::from(1u64),
            data: Bytes::new(),
            expected_id: U256::from(1u64),
            function: None,
        };

        let result = strategy.invoke(&call, GasPolicy::default()).await;
        assert!(matches!(
            result,
            Err(crate::error::Error::Purchase(PurchaseError::TransactionFailed {
                receipt: None,
                ..
            }))
        ));
    }
}
