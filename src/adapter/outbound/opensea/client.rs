//! OpenSea REST API client.
//!
//! Two endpoints are used:
//! - **best listing** (`GET /listings/collection/{slug}/nfts/{token}/best`)
//! - **fulfillment data** (`POST /listings/fulfillment_data`)
//!
//! Requests are never retried; a failed call ends the run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde_json::Value;
use tracing::{debug, info};

use super::dto::{FulfillerRef, FulfillmentRequestBody, ListingRef};
use super::settings::OpenSeaConfig;
use crate::adapter::outbound::seaport::fields::{parse_uint, Fields};
use crate::domain::{FulfillmentData, FulfillmentRequest, Listing, ListingPrice};
use crate::error::{ConfigError, PurchaseError, Result};
use crate::port::Marketplace;

/// HTTP client for the OpenSea API v2.
pub struct OpenSeaClient {
    http: HttpClient,
    api_url: String,
    api_key: String,
    chain: String,
}

impl OpenSeaClient {
    /// Create a client from marketplace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENSEA_API_KEY` is not set or the HTTP client
    /// cannot be built.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &OpenSeaConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ConfigError::MissingField {
                field: "OPENSEA_API_KEY",
            })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            chain: config.chain.clone(),
        })
    }

    fn best_listing_url(&self, collection: &str, token_id: &str) -> String {
        format!(
            "{}/listings/collection/{}/nfts/{}/best",
            self.api_url, collection, token_id
        )
    }

    fn fulfillment_url(&self) -> String {
        format!("{}/listings/fulfillment_data", self.api_url)
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request
            .header("accept", "application/json")
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still reports the status.
            let body = response.text().await.unwrap_or_default();
            return Err(PurchaseError::Upstream {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Marketplace for OpenSeaClient {
    async fn best_listing(&self, collection: &str, token_id: &str) -> Result<Listing> {
        let url = self.best_listing_url(collection, token_id);
        info!(collection, token_id, "Fetching best listing");

        let body = self.send(self.http.get(&url)).await?;
        let listing = parse_best_listing(collection, token_id, &body)?;

        info!(
            price = %listing.price,
            protocol = %listing.protocol_address,
            order_hash = %listing.order_hash,
            "Found listing"
        );
        Ok(listing)
    }

    async fn fulfillment_data(&self, request: &FulfillmentRequest) -> Result<FulfillmentData> {
        info!(
            protocol = %request.protocol_address,
            order_hash = %request.order_hash,
            fulfiller = %request.fulfiller,
            "Fetching fulfillment data"
        );
        if let Some(recipient) = request.recipient {
            info!(%recipient, "NFT will be delivered to recipient");
        }

        let body = fulfillment_body(request, &self.chain);
        let raw = self
            .send(self.http.post(self.fulfillment_url()).json(&body))
            .await?;
        let data = parse_fulfillment(&raw)?;

        info!("Fetched fulfillment data successfully");
        debug!(payload = %data.raw(), "Fulfillment data");
        Ok(data)
    }

    fn marketplace_name(&self) -> &'static str {
        "OpenSea"
    }
}

/// Build the fulfillment request body. `recipient` is omitted unless set.
#[must_use]
pub fn fulfillment_body(request: &FulfillmentRequest, chain: &str) -> FulfillmentRequestBody {
    FulfillmentRequestBody {
        listing: ListingRef {
            hash: request.order_hash.to_string(),
            chain: chain.to_string(),
            protocol_address: request.protocol_address.to_string(),
        },
        fulfiller: FulfillerRef {
            address: request.fulfiller.to_string(),
            recipient: request.recipient.map(|r| r.to_string()),
        },
    }
}

/// Interpret a successful best-listing response body.
///
/// # Errors
///
/// [`PurchaseError::ListingNotFound`] when the body is empty, `null`, or has
/// no `price`; [`PurchaseError::MalformedResponse`] when a required field
/// is missing or unparseable.
#[allow(clippy::result_large_err)]
pub fn parse_best_listing(collection: &str, token_id: &str, body: &str) -> Result<Listing> {
    let not_found = || PurchaseError::ListingNotFound {
        collection: collection.to_string(),
        token_id: token_id.to_string(),
    };

    if body.trim().is_empty() {
        return Err(not_found().into());
    }
    let value: Value = serde_json::from_str(body)?;
    if value.get("price").map_or(true, Value::is_null) {
        return Err(not_found().into());
    }

    let listing = Fields::new(&value, "")?;
    let current = listing.object("price")?.object("current")?;
    let amount = parse_uint(current.get("value")?)
        .map_err(|reason| PurchaseError::malformed("price.current.value", reason))?;
    let decimals = u32::try_from(current.uint("decimals")?)
        .map_err(|_| PurchaseError::malformed("price.current.decimals", "does not fit u32"))?;

    let price = ListingPrice {
        value: amount.to_string(),
        decimals,
        currency: current.string("currency")?.to_string(),
    };
    let protocol_address = listing.address("protocol_address")?;
    let order_hash = listing.bytes32("order_hash")?;

    Ok(Listing {
        collection: collection.to_string(),
        token_id: token_id.to_string(),
        price,
        protocol_address,
        order_hash,
    })
}

/// Interpret a successful fulfillment response body.
///
/// # Errors
///
/// [`PurchaseError::NoFulfillmentData`] when the body is empty or `null`.
#[allow(clippy::result_large_err)]
pub fn parse_fulfillment(body: &str) -> Result<FulfillmentData> {
    if body.trim().is_empty() {
        return Err(PurchaseError::NoFulfillmentData.into());
    }
    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Err(PurchaseError::NoFulfillmentData.into());
    }
    Ok(FulfillmentData::new(value))
}
