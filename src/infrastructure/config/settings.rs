//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `WALLET_PRIVATE_KEY` and `OPENSEA_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use listing_sniper::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use serde::Deserialize;

use super::chain::{ChainConfig, GasConfig, StrategyConfig};
use super::logging::LoggingConfig;
use super::wallet::WalletConfig;
use crate::adapter::outbound::opensea::settings::OpenSeaConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Immutable once loaded; components receive the parts they need by
/// reference. Load from a TOML file using [`Config::load`] or parse directly
/// with [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Stop after encoding the purchase call instead of submitting it.
    #[serde(default)]
    pub dry_run: bool,

    /// Marketplace API and target token.
    #[serde(default)]
    pub marketplace: OpenSeaConfig,

    /// JSON-RPC endpoint and receipt wait bound.
    #[serde(default)]
    pub chain: ChainConfig,

    /// Strategy contract that performs the purchase.
    #[serde(default)]
    pub strategy: StrategyConfig,

    /// Fixed gas limit and price.
    #[serde(default)]
    pub gas: GasConfig,

    /// Wallet configuration for transaction signing.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn read_keystore_password(env: &dyn Fn(&str) -> Option<String>) -> Result<String> {
    if let Some(password) = env("LISTING_SNIPER_KEYSTORE_PASSWORD") {
        return Ok(password);
    }
    if let Some(path) = env("LISTING_SNIPER_KEYSTORE_PASSWORD_FILE") {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: "LISTING_SNIPER_KEYSTORE_PASSWORD_FILE",
            }
            .into());
        }
        return Ok(password);
    }

    Err(ConfigError::MissingField {
        field: "LISTING_SNIPER_KEYSTORE_PASSWORD",
    }
    .into())
}

fn decrypt_keystore_private_key(path: &str, password: &str) -> Result<String> {
    use alloy_signer_local::PrivateKeySigner;

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keystore_path",
            reason: e.to_string(),
        }
    })?;
    Ok(format!("{:x}", signer.to_bytes()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Parse configuration from TOML content, reading secrets from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., unparseable strategy address)
    /// - Keystore decryption fails when using keystore authentication
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, &|key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::parse_toml`].
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env(
        content: &str,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise built-in defaults plus environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    // Secrets never come from the file.
    #[allow(clippy::result_large_err)]
    fn apply_env(&mut self, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        self.marketplace.api_key = non_blank(env("OPENSEA_API_KEY"));

        if let Some(rpc_url) = non_blank(env("RPC_URL")) {
            self.chain.rpc_url = rpc_url;
        }

        self.wallet.private_key = non_blank(env("WALLET_PRIVATE_KEY"));
        if self.wallet.private_key.is_none() {
            if let Some(ref keystore_path) = self.wallet.keystore_path {
                let password = read_keystore_password(env)?;
                self.wallet.private_key =
                    Some(decrypt_keystore_private_key(keystore_path, &password)?);
            }
        }
        Ok(())
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let market = &self.marketplace;
        if market.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        url::Url::parse(&market.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if market.chain.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "chain" }.into());
        }
        if market.collection.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "collection" }.into());
        }
        self.expected_token_id()?;
        if market.http.timeout_ms == 0 || market.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http",
                reason: "timeouts must be greater than 0".to_string(),
            }
            .into());
        }

        if self.chain.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        self.rpc_url()?;
        if self.chain.receipt_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "receipt_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.strategy_address()?;

        if self.gas.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gas_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.gas.price_gwei == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gas_price_gwei",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Parsed strategy contract address.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured address is not a valid address.
    #[allow(clippy::result_large_err)]
    pub fn strategy_address(&self) -> Result<Address> {
        Address::from_str(self.strategy.address.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "strategy_address",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Configured token id as the `uint256` the strategy contract checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the token id is not an unsigned integer.
    #[allow(clippy::result_large_err)]
    pub fn expected_token_id(&self) -> Result<U256> {
        let token_id = self.marketplace.token_id.trim();
        if token_id.is_empty() {
            return Err(ConfigError::MissingField { field: "token_id" }.into());
        }
        U256::from_str(token_id).map_err(|e| {
            ConfigError::InvalidValue {
                field: "token_id",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parsed RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    #[allow(clippy::result_large_err)]
    pub fn rpc_url(&self) -> Result<url::Url> {
        self.chain
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| {
                ConfigError::InvalidValue {
                    field: "rpc_url",
                    reason: e.to_string(),
                }
                .into()
            })
    }

    #[must_use]
    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.chain.receipt_timeout_secs)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
