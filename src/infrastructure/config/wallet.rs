//! Paying wallet credential.

use serde::Deserialize;

/// Where the buyer's signing key comes from.
///
/// `WALLET_PRIVATE_KEY` wins. Without it, `keystore_path` names an encrypted
/// JSON keystore that is decrypted at load time with the password from
/// `LISTING_SNIPER_KEYSTORE_PASSWORD` or `LISTING_SNIPER_KEYSTORE_PASSWORD_FILE`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub keystore_path: Option<String>,
    /// Resolved hex key. Never read from the file.
    #[serde(skip)]
    pub private_key: Option<String>,
}
