//! Stripe Connect configuration.

use serde::{Deserialize, Serialize};

/// Stripe Connect OAuth configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    /// Connect platform client ID (`ca_...`).
    #[serde(default)]
    pub client_id: String,
    /// Secret API key (`sk_...`), used for the code exchange.
    #[serde(default)]
    pub secret_key: String,
    /// Redirect URI registered with the Connect platform.
    #[serde(default)]
    pub redirect_uri: String,
    /// Base URL for the Connect OAuth endpoints. Overridable so tests can
    /// point at a stub server.
    #[serde(default = "default_connect_base")]
    pub connect_base_url: String,
}

fn default_connect_base() -> String {
    "https://connect.stripe.com".to_string()
}
