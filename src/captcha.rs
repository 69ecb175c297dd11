//! reCAPTCHA token verification.

use async_trait::async_trait;
use serde::Deserialize;

pub const RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Decides whether a CAPTCHA token submitted with a form is valid.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> bool;
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: Option<bool>,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Verifies tokens against the Google reCAPTCHA endpoint.
///
/// Every failure (network, status, body) counts as an invalid token.
#[derive(Clone)]
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    secret: String,
    verify_url: String,
}

impl RecaptchaVerifier {
    pub fn new(client: reqwest::Client, secret: impl Into<String>) -> Self {
        Self::with_url(client, secret, RECAPTCHA_VERIFY_URL)
    }

    pub fn with_url(
        client: reqwest::Client,
        secret: impl Into<String>,
        verify_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            secret: secret.into(),
            verify_url: verify_url.into(),
        }
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> bool {
        let response = match self
            .client
            .get(&self.verify_url)
            .query(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("reCAPTCHA request failed: {}", e);
                return false;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            log::warn!("reCAPTCHA returned status {}", response.status());
            return false;
        }

        match response.json::<SiteVerifyResponse>().await {
            Ok(body) => {
                if !body.error_codes.is_empty() {
                    log::debug!("reCAPTCHA error codes: {:?}", body.error_codes);
                }
                body.success.unwrap_or(false)
            }
            Err(e) => {
                log::warn!("Failed to decode reCAPTCHA response: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for RecaptchaVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecaptchaVerifier")
            .field("verify_url", &self.verify_url)
            .finish_non_exhaustive()
    }
}
