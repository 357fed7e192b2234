use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use listing_sniper::adapter::outbound::opensea::client::{
    fulfillment_body, parse_best_listing, parse_fulfillment,
};
use listing_sniper::adapter::outbound::opensea::dto::FulfillmentRequestBody;
use listing_sniper::domain::{FulfillmentData, FulfillmentRequest, Listing};
use listing_sniper::error::Result;
use listing_sniper::port::Marketplace;

/// Marketplace fake serving canned response bodies through the real parsers.
///
/// Records every call so tests can assert on what the flow asked for.
#[derive(Clone)]
pub struct RecordingMarketplace {
    listing_body: String,
    fulfillment_body: String,
    listing_calls: Arc<Mutex<Vec<(String, String)>>>,
    fulfillment_calls: Arc<Mutex<Vec<FulfillmentRequest>>>,
}

impl RecordingMarketplace {
    pub fn new(listing_body: impl Into<String>, fulfillment_body: impl Into<String>) -> Self {
        Self {
            listing_body: listing_body.into(),
            fulfillment_body: fulfillment_body.into(),
            listing_calls: Arc::default(),
            fulfillment_calls: Arc::default(),
        }
    }

    pub fn listing_calls(&self) -> Vec<(String, String)> {
        self.listing_calls.lock().expect("lock listing calls").clone()
    }

    pub fn fulfillment_calls(&self) -> Vec<FulfillmentRequest> {
        self.fulfillment_calls
            .lock()
            .expect("lock fulfillment calls")
            .clone()
    }

    /// Request bodies as they would have been posted.
    pub fn fulfillment_bodies(&self) -> Vec<FulfillmentRequestBody> {
        self.fulfillment_calls()
            .iter()
            .map(|request| fulfillment_body(request, "ethereum"))
            .collect()
    }
}

#[async_trait]
impl Marketplace for RecordingMarketplace {
    async fn best_listing(&self, collection: &str, token_id: &str) -> Result<Listing> {
        self.listing_calls
            .lock()
            .expect("lock listing calls")
            .push((collection.to_string(), token_id.to_string()));
        parse_best_listing(collection, token_id, &self.listing_body)
    }

    async fn fulfillment_data(&self, request: &FulfillmentRequest) -> Result<FulfillmentData> {
        self.fulfillment_calls
            .lock()
            .expect("lock fulfillment calls")
            .push(request.clone());
        parse_fulfillment(&self.fulfillment_body)
    }

    fn marketplace_name(&self) -> &'static str {
        "recording"
    }
}
