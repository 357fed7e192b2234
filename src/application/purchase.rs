//! The purchase run.
//!
//! One strictly sequential pass over the ports: best listing, fulfillment
//! data, calldata encoding, strategy invocation. Each stage is awaited before
//! the next begins and the first failure ends the run.

use alloy_primitives::U256;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::adapter::outbound::seaport::encode_fulfillment;
use crate::domain::{EncodedCall, FulfillmentRequest, GasPolicy, PurchaseOutcome, RunState};
use crate::error::{PurchaseError, Result};
use crate::port::{Marketplace, StrategyInvoker};

/// Immutable inputs of a run.
#[derive(Debug, Clone)]
pub struct PurchaseSettings {
    pub collection: String,
    pub token_id: String,
    /// `token_id` as the strategy contract checks it.
    pub expected_id: U256,
    pub gas: GasPolicy,
    /// Stop after encoding instead of submitting.
    pub dry_run: bool,
}

/// Drives a single purchase through the run states.
pub struct PurchaseFlow<'a> {
    marketplace: &'a dyn Marketplace,
    invoker: &'a dyn StrategyInvoker,
    settings: PurchaseSettings,
    state: RunState,
}

impl<'a> PurchaseFlow<'a> {
    #[must_use]
    pub fn new(
        marketplace: &'a dyn Marketplace,
        invoker: &'a dyn StrategyInvoker,
        settings: PurchaseSettings,
    ) -> Self {
        Self {
            marketplace,
            invoker,
            settings,
            state: RunState::Idle,
        }
    }

    /// Current run state. Terminal once [`run`](Self::run) has returned.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Execute the run.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the flow is then in [`RunState::Failed`].
    pub async fn run(&mut self) -> Result<PurchaseOutcome> {
        let span = info_span!(
            "purchase",
            run_id = %Uuid::new_v4(),
            collection = %self.settings.collection,
            token_id = %self.settings.token_id,
        );

        let result = self.execute().instrument(span.clone()).await;

        if let Err(ref e) = result {
            span.in_scope(|| error!(error = %e, state = %self.state, "Purchase failed"));
            self.advance(RunState::Failed);
        }
        result
    }

    async fn execute(&mut self) -> Result<PurchaseOutcome> {
        info!(
            marketplace = self.marketplace.marketplace_name(),
            dry_run = self.settings.dry_run,
            "Starting purchase"
        );

        self.advance(RunState::FetchingListing);
        let listing = self
            .marketplace
            .best_listing(&self.settings.collection, &self.settings.token_id)
            .await?;

        self.advance(RunState::FetchingFulfillment);
        let buyer = self.invoker.buyer();
        let strategy = self.invoker.strategy_address();
        let request = FulfillmentRequest::new(&listing, buyer, Some(strategy));
        let data = self.marketplace.fulfillment_data(&request).await?;

        self.advance(RunState::Encoding);
        let call = encode_fulfillment(&data, self.settings.expected_id)?;
        log_final_parameters(&call, self.settings.gas);

        if self.settings.dry_run {
            self.advance(RunState::Encoded);
            info!("Dry run, transaction not submitted");
            return Ok(PurchaseOutcome::DryRun(call));
        }

        self.advance(RunState::Invoking);
        let receipt = self.invoker.invoke(&call, self.settings.gas).await?;

        if !receipt.success {
            return Err(PurchaseError::TransactionFailed {
                reason: format!("transaction {} reverted", receipt.tx_hash),
                receipt: Some(receipt),
            }
            .into());
        }

        self.advance(RunState::Confirmed);
        info!(tx_hash = %receipt.tx_hash, "Purchase confirmed");
        Ok(PurchaseOutcome::Confirmed(receipt))
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal transition {} -> {next}",
            self.state
        );
        debug!(from = %self.state, to = %next, "State transition");
        self.state = next;
    }
}

fn log_final_parameters(call: &EncodedCall, gas: GasPolicy) {
    info!(
        target_contract = %call.target,
        value_wei = %call.value,
        value_eth = %call.value_ether(),
        expected_id = %call.expected_id,
        calldata_len = call.data.len(),
        gas_limit = gas.limit,
        gas_price_wei = gas.price_wei,
        "Final transaction parameters"
    );
    debug!(calldata = %call.data, "Encoded fulfillment calldata");
}
