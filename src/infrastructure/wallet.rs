//! Signing credential resolution.

use std::str::FromStr;

use alloy_signer_local::PrivateKeySigner;

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::wallet::WalletConfig;

/// Build the local signer for the paying wallet.
///
/// # Errors
///
/// Returns an error if the private key is missing or invalid.
#[allow(clippy::result_large_err)]
pub fn signer(config: &WalletConfig) -> Result<PrivateKeySigner> {
    let private_key = config
        .private_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingField {
            field: "WALLET_PRIVATE_KEY",
        })?;

    PrivateKeySigner::from_str(private_key.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "WALLET_PRIVATE_KEY",
            reason: e.to_string(),
        }
        .into()
    })
}
