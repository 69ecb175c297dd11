//! Resend (<https://resend.com>) mail delivery.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{MailError, Mailer, OutgoingEmail};

pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct AttachmentPayload<'a> {
    filename: &'a str,
    content: String,
    content_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl ResendMailer {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_url(client, api_key, RESEND_API_URL)
    }

    pub fn with_url(
        client: reqwest::Client,
        api_key: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }
}

fn request_body(message: &OutgoingEmail) -> SendEmailRequest<'_> {
    SendEmailRequest {
        from: &message.from,
        to: &message.to,
        subject: &message.subject,
        html: &message.html,
        attachments: message
            .attachments
            .iter()
            .map(|attachment| AttachmentPayload {
                filename: &attachment.filename,
                content: STANDARD.encode(&attachment.content),
                content_type: &attachment.content_type,
            })
            .collect(),
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: OutgoingEmail) -> Result<String, MailError> {
        if message.to.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body(&message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendEmailResponse = response.json().await?;
        log::info!("Email '{}' accepted with id {}", message.subject, body.id);
        Ok(body.id)
    }
}

impl std::fmt::Debug for ResendMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendMailer")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Attachment;

    #[test]
    fn test_request_body_encodes_attachment() {
        let message = OutgoingEmail::new("Schule <mail@example.de>", "eltern@example.de", "Betreff", "<p>x</p>")
            .with_attachment(Attachment::pdf("anmeldung-Anna.pdf", b"%PDF-1.4".to_vec()));

        let json = serde_json::to_value(request_body(&message)).unwrap();
        assert_eq!(json["to"][0], "eltern@example.de");
        assert_eq!(json["attachments"][0]["filename"], "anmeldung-Anna.pdf");
        assert_eq!(json["attachments"][0]["content"], "JVBERi0xLjQ=");
        assert_eq!(json["attachments"][0]["content_type"], "application/pdf");
    }

    #[test]
    fn test_request_body_omits_empty_attachments() {
        let message = OutgoingEmail::new("a@example.de", "b@example.de", "Kontakt", "<p>x</p>");
        let json = serde_json::to_value(request_body(&message)).unwrap();
        assert!(json.get("attachments").is_none());
    }

    #[tokio::test]
    async fn test_send_without_recipients_fails() {
        let mailer = ResendMailer::new(reqwest::Client::new(), "key");
        let mut message = OutgoingEmail::new("a@example.de", "b@example.de", "s", "h");
        message.to.clear();

        let result = mailer.send(message).await;
        assert!(matches!(result, Err(MailError::NoRecipients)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let mailer = ResendMailer::new(reqwest::Client::new(), "re_secret");
        assert!(!format!("{:?}", mailer).contains("re_secret"));
    }
}
