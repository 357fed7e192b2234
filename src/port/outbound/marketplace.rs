//! Marketplace port for listing lookup and fulfillment data.

use async_trait::async_trait;

use crate::domain::{FulfillmentData, FulfillmentRequest, Listing};
use crate::error::Result;

/// Read side of an NFT marketplace API.
///
/// # Errors
///
/// Implementations map non-success HTTP responses to
/// [`PurchaseError::Upstream`](crate::error::PurchaseError::Upstream).
#[async_trait]
pub trait Marketplace: Send + Sync {
    /// Fetch the best current listing for `token_id` in `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::ListingNotFound`](crate::error::PurchaseError::ListingNotFound)
    /// when the token has no priced listing.
    async fn best_listing(&self, collection: &str, token_id: &str) -> Result<Listing>;

    /// Ask the marketplace for the transaction that fulfills a listing.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::NoFulfillmentData`](crate::error::PurchaseError::NoFulfillmentData)
    /// when the response body is empty.
    async fn fulfillment_data(&self, request: &FulfillmentRequest) -> Result<FulfillmentData>;

    /// Marketplace name for logs.
    fn marketplace_name(&self) -> &'static str;
}
