//! Seaport fulfillment encoding.

pub(crate) mod fields;

pub mod encoder;

pub use encoder::{encode_fulfillment, FULFILL_BASIC_ORDER};
