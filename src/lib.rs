use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod captcha;
pub mod config;
pub mod contract;
pub mod forms;
pub mod mail;

pub use crate::config::AppConfig;
pub use crate::forms::FormsState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message shown by the website.
    pub error: String,
    pub kind: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(kind: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            kind: kind.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::forms::handlers::health,
        crate::forms::handlers::submit_enrollment,
        crate::forms::handlers::submit_contact
    ),
    components(
        schemas(
            forms::models::EnrollmentRequest,
            forms::models::ContactRequest,
            forms::models::FormResponse,
            contract::EnrollmentRecord,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Forms", description = "Enrollment and contact form endpoints.")
    )
)]
pub struct ApiDoc;

/// CORS policy for the website origins.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS", "PUT"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers(vec![header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .supports_credentials()
        .max_age(12 * 60 * 60)
}

pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent("musicschool-forms-server/0.3")
        .build()
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    log::info!("Loaded configuration: {:?}", config);

    if !config.logo_path.exists() {
        log::warn!(
            "Logo asset {} not found; enrollment contracts will fail to render",
            config.logo_path.display()
        );
    }

    let http_client = build_http_client()?;
    let forms_state = web::Data::new(FormsState::from_config(&config, http_client));

    let prometheus = PrometheusMetricsBuilder::new("musicschool_forms")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {}", e))?;

    let allowed_origins = config.allowed_origins.clone();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(forms_state.clone())
            .configure(forms::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
