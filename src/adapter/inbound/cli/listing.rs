use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::Marketplace;

/// Fetch and show the best listing for the configured token.
pub async fn execute(config: &Config) -> Result<()> {
    let marketplace = bootstrap::build_marketplace(config)?;
    let listing = marketplace
        .best_listing(&config.marketplace.collection, &config.marketplace.token_id)
        .await?;

    output::section("Best Listing");
    output::field("Collection", &listing.collection);
    output::field("Token", &listing.token_id);
    output::field("Price", &listing.price);
    output::field("Protocol", listing.protocol_address);
    output::field("Order hash", listing.order_hash);
    Ok(())
}
