//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::debug;

use crate::adapter::outbound::opensea::OpenSeaClient;
use crate::adapter::outbound::strategy::StrategyContract;
use crate::application::PurchaseSettings;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::wallet;

/// Build the marketplace client from configuration.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client cannot be built.
pub fn build_marketplace(config: &Config) -> Result<OpenSeaClient> {
    OpenSeaClient::from_config(&config.marketplace)
}

/// Build the strategy contract adapter bound to the paying wallet.
///
/// # Errors
///
/// Returns an error if the signing credential, RPC URL or strategy address
/// is invalid.
pub fn build_strategy(config: &Config) -> Result<StrategyContract> {
    let signer = wallet::signer(&config.wallet)?;
    let rpc_url = config.rpc_url()?;
    let address = config.strategy_address()?;

    debug!(
        buyer = %signer.address(),
        strategy = %address,
        rpc_host = rpc_url.host_str().unwrap_or("-"),
        "Strategy contract configured"
    );

    Ok(StrategyContract::new(
        signer,
        rpc_url,
        address,
        config.receipt_timeout(),
    ))
}

/// Derive the run inputs.
///
/// `dry_run` is the configured value; the CLI may force it on.
///
/// # Errors
///
/// Returns an error if the token id is not a valid `uint256`.
pub fn purchase_settings(config: &Config) -> Result<PurchaseSettings> {
    Ok(PurchaseSettings {
        collection: config.marketplace.collection.clone(),
        token_id: config.marketplace.token_id.clone(),
        expected_id: config.expected_token_id()?,
        gas: config.gas.policy(),
        dry_run: config.dry_run,
    })
}
