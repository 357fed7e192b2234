//! Infrastructure configuration modules.

pub mod chain;
pub mod logging;
pub mod settings;
pub mod wallet;
