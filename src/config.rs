//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_MAIL_FROM: &str = "Musikschule CML <mail@mail.jeschek.dev>";
pub const DEFAULT_LOGO_PATH: &str = "logo.png";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://musicschool-cml.de",
    "https://www.musicschool-cml.de",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings for the forms service.
#[derive(Clone)]
pub struct AppConfig {
    pub resend_api_key: String,
    /// Address receiving contact messages and enrollment notifications.
    pub receiver: String,
    pub recaptcha_secret: String,
    pub mail_from: String,
    pub logo_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            resend_api_key: required("RESEND_API_KEY")?,
            receiver: required("RESEND_RECEIVER")?,
            recaptcha_secret: required("RECAPTCHA_SECRET")?,
            mail_from: lookup("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            logo_path: lookup("LOGO_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH)),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allowed_origins,
        })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("receiver", &self.receiver)
            .field("mail_from", &self.mail_from)
            .field("logo_path", &self.logo_path)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("allowed_origins", &self.allowed_origins)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("RESEND_API_KEY", "re_test"),
        ("RESEND_RECEIVER", "jana@example.de"),
        ("RECAPTCHA_SECRET", "captcha-secret"),
    ];

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.receiver, "jana@example.de");
        assert_eq!(config.mail_from, DEFAULT_MAIL_FROM);
        assert_eq!(config.logo_path, PathBuf::from("logo.png"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.allowed_origins.len(), 3);
    }

    #[test]
    fn test_missing_required_value() {
        let result = AppConfig::from_lookup(lookup(&REQUIRED[..2]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("RECAPTCHA_SECRET"));
    }

    #[test]
    fn test_blank_required_value_is_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("RESEND_API_KEY", "  ");
        let result = AppConfig::from_lookup(lookup(&vars));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("RESEND_API_KEY"));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "eighty"));
        let result = AppConfig::from_lookup(lookup(&vars));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "PORT", .. })));
    }

    #[test]
    fn test_custom_origins_and_logo() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("ALLOWED_ORIGINS", "https://a.example, https://b.example,"));
        vars.push(("LOGO_PATH", "/srv/static/logo.png"));
        vars.push(("PORT", "3000"));

        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.allowed_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.logo_path, PathBuf::from("/srv/static/logo.png"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("re_test"));
        assert!(!debug.contains("captcha-secret"));
    }
}
