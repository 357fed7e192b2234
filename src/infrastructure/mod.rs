//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring adapters from configuration
//! - [`config`] - Configuration loading and validation
//! - [`wallet`] - Signing credential resolution

pub mod bootstrap;
pub mod config;
pub mod wallet;
