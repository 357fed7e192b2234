//! Fulfillment request and the marketplace's raw fulfillment payload.

use alloy_primitives::{Address, B256};
use serde_json::Value;

use super::Listing;

/// Inputs for asking the marketplace how to fulfill a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentRequest {
    pub order_hash: B256,
    pub protocol_address: Address,
    pub fulfiller: Address,
    /// Set only when the asset should go somewhere other than the payer.
    pub recipient: Option<Address>,
}

impl FulfillmentRequest {
    /// Build a request for `listing` paid by `fulfiller`.
    ///
    /// A recipient equal to the fulfiller is dropped.
    #[must_use]
    pub fn new(listing: &Listing, fulfiller: Address, recipient: Option<Address>) -> Self {
        Self {
            order_hash: listing.order_hash,
            protocol_address: listing.protocol_address,
            fulfiller,
            recipient: recipient.filter(|r| *r != fulfiller),
        }
    }
}

/// Marketplace fulfillment payload, kept exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct FulfillmentData(Value);

impl FulfillmentData {
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// The executable transaction object, if the marketplace provided one.
    #[must_use]
    pub fn transaction(&self) -> Option<&Value> {
        self.0
            .get("fulfillment_data")
            .and_then(|data| data.get("transaction"))
            .filter(|tx| tx.is_object())
    }
}
