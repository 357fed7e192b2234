//! Outbound adapters: marketplace HTTP API, calldata encoding and chain access.

pub mod opensea;
pub mod seaport;
pub mod strategy;
