//! Marketplace- and chain-agnostic purchase entities.

mod call;
mod fulfillment;
mod listing;
mod receipt;
mod state;

pub use call::{EncodedCall, GasPolicy, DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE_GWEI, GWEI};
pub use fulfillment::{FulfillmentData, FulfillmentRequest};
pub use listing::{Listing, ListingPrice};
pub use receipt::TransactionResult;
pub use state::{PurchaseOutcome, RunState};
