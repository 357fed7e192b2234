use thiserror::Error;

use crate::domain::TransactionResult;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of a purchase run.
///
/// Every variant is terminal for the run. Use [`PurchaseError::is_retriable`]
/// to tell transient upstream failures apart from fatal ones.
#[derive(Error, Debug)]
pub enum PurchaseError {
    #[error("marketplace API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("no listing found for {collection} #{token_id}")]
    ListingNotFound { collection: String, token_id: String },

    #[error("no fulfillment data returned")]
    NoFulfillmentData,

    #[error("no transaction in fulfillment data, cannot proceed")]
    MissingTransactionData,

    #[error("unsupported fulfillment method: {function}")]
    UnsupportedFulfillmentMethod { function: String },

    #[error("malformed marketplace response field {field}: {reason}")]
    MalformedResponse { field: String, reason: String },

    #[error("transaction failed: {reason}")]
    TransactionFailed {
        reason: String,
        receipt: Option<TransactionResult>,
    },
}

impl PurchaseError {
    /// True for upstream throttling and server errors.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Upstream { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }

    pub(crate) fn malformed(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedResponse {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
