//! OpenSea marketplace adapter.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::OpenSeaClient;
