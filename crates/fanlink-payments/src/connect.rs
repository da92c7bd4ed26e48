//! Stripe Connect OAuth — authorize URL builder and code exchange.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use fanlink_core::config::stripe::StripeConfig;
use fanlink_core::error::AppError;
use fanlink_core::result::AppResult;

/// Successful token exchange response from Stripe.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectTokenResponse {
    /// The connected account id (`acct_...`).
    pub stripe_user_id: String,
}

/// Error body Stripe returns on a failed exchange.
#[derive(Debug, Clone, Deserialize)]
struct ConnectErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

/// HTTP client for the Stripe Connect OAuth endpoints.
#[derive(Debug, Clone)]
pub struct StripeConnectClient {
    http: reqwest::Client,
    client_id: String,
    secret_key: String,
    redirect_uri: String,
    base_url: String,
}

impl StripeConnectClient {
    /// Creates a new client from configuration.
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: config.client_id.clone(),
            secret_key: config.secret_key.clone(),
            redirect_uri: config.redirect_uri.clone(),
            base_url: config.connect_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the OAuth authorize URL a creator is redirected to. The
    /// `state` parameter round-trips the creator's user id for the callback.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}/oauth/authorize?response_type=code&client_id={}&scope=read_write&state={}&redirect_uri={}",
            self.base_url,
            urlencode(&self.client_id),
            urlencode(state),
            urlencode(&self.redirect_uri),
        )
    }

    /// Exchanges an OAuth callback code for the connected account id.
    ///
    /// One outbound call, no retries; failures surface as external-service
    /// errors and map to 502 at the HTTP boundary.
    pub async fn exchange_code(&self, code: &str) -> AppResult<ConnectTokenResponse> {
        let url = format!("{}/oauth/token", self.base_url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("client_secret", self.secret_key.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Stripe token exchange failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .json::<ConnectErrorResponse>()
                .await
                .ok()
                .and_then(|b| b.error_description.or(b.error))
                .unwrap_or_else(|| "no error detail".to_string());
            tracing::warn!(%status, %detail, "Stripe rejected Connect code exchange");
            return Err(AppError::external_service(format!(
                "Stripe rejected code exchange: {detail}"
            )));
        }

        response.json::<ConnectTokenResponse>().await.map_err(|e| {
            AppError::external_service(format!("Invalid Stripe token response: {e}"))
        })
    }
}

/// Everything except RFC 3986 unreserved characters gets encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a query component.
fn urlencode(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}
