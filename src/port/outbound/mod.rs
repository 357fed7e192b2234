//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the marketplace API and the on-chain strategy
//! contract.

pub mod marketplace;
pub mod strategy;
