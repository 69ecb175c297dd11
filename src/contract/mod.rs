//! Enrollment contract generation.
//!
//! Turns a submitted [`EnrollmentRecord`] into the single-page contract PDF
//! that is mailed to the applicant:
//! - `tariff` - variant codes to label, fee and lesson length
//! - `legal` - clause text per variant
//! - `layout` - fixed-position page layout
//! - `pdf` - layout to PDF bytes
//! - `renderer` - ties the steps together

pub mod clock;
pub mod layout;
pub mod legal;
pub mod logo;
pub mod pdf;
pub mod record;
pub mod renderer;
pub mod tariff;
pub mod text;

pub use clock::{DateSource, FixedDate, SystemClock};
pub use record::EnrollmentRecord;
pub use renderer::ContractRenderer;

use std::path::PathBuf;
use thiserror::Error;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Errors that can occur while rendering a contract.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("text field must not be empty")]
    EmptyText,
    #[error("failed to load logo asset {}: {source}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode logo image: {0}")]
    LogoEncode(#[source] image::ImageError),
    #[error("failed to serialize PDF document: {0}")]
    Serialization(String),
}

/// A finished contract ready to be attached to an email.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub title: String,
    pub pdf: Vec<u8>,
}
