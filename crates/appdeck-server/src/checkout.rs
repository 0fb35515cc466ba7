use serde::Deserialize;
use thiserror::Error;

/// Thin client for the hosted-checkout API. The core's only obligation is
/// to send `{priceId, appSlug}` out and hand back either a redirect URL
/// or the gateway's error string unmodified.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("{0}")]
    Gateway(String),

    #[error("Gateway returned no session URL")]
    MissingUrl,

    #[error("Checkout request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct SessionResponse {
    url: Option<String>,
}

#[derive(Deserialize)]
struct GatewayErrorResponse {
    error: GatewayErrorBody,
}

#[derive(Deserialize)]
struct GatewayErrorBody {
    message: String,
}

impl CheckoutClient {
    pub fn new(api_base: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Create a hosted-checkout session for one unit of `price_id`.
    ///
    /// On success the visitor is round-tripped back to the viewer with a
    /// `purchased=true` query flag; cancellation lands on `cancelled=true`.
    /// The viewer's purchase check interprets the flag, not this client.
    pub async fn create_session(
        &self,
        price_id: &str,
        app_slug: &str,
        public_base_url: &str,
    ) -> Result<String, CheckoutError> {
        let success_url = format!("{public_base_url}/app/{app_slug}?purchased=true");
        let cancel_url = format!("{public_base_url}/app/{app_slug}?cancelled=true");

        let form = [
            ("mode", "payment"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price]", price_id),
            ("line_items[0][quantity]", "1"),
            ("success_url", success_url.as_str()),
            ("cancel_url", cancel_url.as_str()),
            ("metadata[appSlug]", app_slug),
        ];

        let response = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            // Pass the gateway's error string through unmodified.
            let message = match response.json::<GatewayErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => "Failed to create checkout session".to_string(),
            };
            return Err(CheckoutError::Gateway(message));
        }

        let session: SessionResponse = response.json().await?;
        session.url.ok_or(CheckoutError::MissingUrl)
    }
}
