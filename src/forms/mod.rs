//! HTTP endpoints for the enrollment and contact forms.

pub mod handlers;
pub mod models;
pub mod validation;

use std::sync::Arc;

use actix_web::{error, web, HttpResponse};

use crate::captcha::{CaptchaVerifier, RecaptchaVerifier};
use crate::config::AppConfig;
use crate::contract::ContractRenderer;
use crate::mail::{Mailer, ResendMailer};
use crate::ErrorResponse;

/// Shared collaborators for the form handlers.
#[derive(Clone)]
pub struct FormsState {
    pub captcha: Arc<dyn CaptchaVerifier>,
    pub mailer: Arc<dyn Mailer>,
    pub renderer: ContractRenderer,
    pub mail_from: String,
    /// Receives contact messages and enrollment copies.
    pub receiver: String,
}

impl FormsState {
    pub fn new(
        captcha: Arc<dyn CaptchaVerifier>,
        mailer: Arc<dyn Mailer>,
        renderer: ContractRenderer,
        mail_from: impl Into<String>,
        receiver: impl Into<String>,
    ) -> Self {
        Self {
            captcha,
            mailer,
            renderer,
            mail_from: mail_from.into(),
            receiver: receiver.into(),
        }
    }

    /// Production wiring: reCAPTCHA, Resend and the system clock.
    pub fn from_config(config: &AppConfig, http_client: reqwest::Client) -> Self {
        Self::new(
            Arc::new(RecaptchaVerifier::new(
                http_client.clone(),
                config.recaptcha_secret.clone(),
            )),
            Arc::new(ResendMailer::new(http_client, config.resend_api_key.clone())),
            ContractRenderer::new(config.logo_path.clone()),
            config.mail_from.clone(),
            config.receiver.clone(),
        )
    }
}

/// JSON extractor settings that answer malformed bodies with an
/// [`ErrorResponse`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected malformed form body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/").route(web::get().to(handlers::health)))
        .service(web::resource("/anmeldung").route(web::post().to(handlers::submit_enrollment)))
        .service(web::resource("/contact").route(web::post().to(handlers::submit_contact)));
}
