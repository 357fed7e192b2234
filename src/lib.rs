//! Listing sniper - buy a marketplace-listed NFT through a strategy contract.
//!
//! A run fetches the best OpenSea listing for one token, asks OpenSea for the
//! fulfillment transaction, re-encodes it as a Seaport
//! `fulfillBasicOrder_efficient_6GL6yc` call and submits it through the
//! strategy contract's `buyTargetNFT`.
//!
//! # Modules
//!
//! - [`domain`] - Listings, fulfillment payloads, encoded calls, run state
//! - [`port`] - `Marketplace` and `StrategyInvoker` traits
//! - [`adapter`] - OpenSea client, Seaport encoder, strategy contract, CLI
//! - [`application`] - The sequential purchase flow
//! - [`infrastructure`] - Configuration, logging, wallet and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use listing_sniper::application::PurchaseFlow;
//! use listing_sniper::infrastructure::bootstrap;
//! use listing_sniper::infrastructure::config::settings::Config;
//!
//! # async fn run() -> listing_sniper::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let marketplace = bootstrap::build_marketplace(&config)?;
//! let strategy = bootstrap::build_strategy(&config)?;
//! let settings = bootstrap::purchase_settings(&config)?;
//!
//! let outcome = PurchaseFlow::new(&marketplace, &strategy, settings).run().await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
