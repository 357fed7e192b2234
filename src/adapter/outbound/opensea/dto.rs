//! OpenSea API v2 request bodies.
//!
//! Responses are read field by field, see `client::parse_best_listing`.

use serde::Serialize;

/// `POST /listings/fulfillment_data` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FulfillmentRequestBody {
    pub listing: ListingRef,
    pub fulfiller: FulfillerRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRef {
    pub hash: String,
    pub chain: String,
    pub protocol_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FulfillerRef {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}
