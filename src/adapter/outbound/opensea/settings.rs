//! OpenSea marketplace configuration.

use serde::Deserialize;

/// OpenSea HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSeaHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for OpenSeaHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

/// Marketplace settings: where to look and which token to buy.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSeaConfig {
    /// API v2 base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Chain name as the marketplace spells it.
    #[serde(default = "default_chain")]
    pub chain: String,
    /// Collection slug.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Token identifier within the collection.
    #[serde(default = "default_token_id")]
    pub token_id: String,
    #[serde(default)]
    pub http: OpenSeaHttpConfig,
    /// API key loaded from `OPENSEA_API_KEY` env var at runtime
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.opensea.io/api/v2".into()
}

fn default_chain() -> String {
    "ethereum".into()
}

fn default_collection() -> String {
    "boredapeyachtclub".into()
}

fn default_token_id() -> String {
    "5077".into()
}

impl Default for OpenSeaConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            chain: default_chain(),
            collection: default_collection(),
            token_id: default_token_id(),
            http: OpenSeaHttpConfig::default(),
            api_key: None,
        }
    }
}
