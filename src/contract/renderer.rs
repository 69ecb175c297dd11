//! Contract document renderer.

use std::path::PathBuf;
use std::sync::Arc;

use super::clock::{DateSource, SystemClock};
use super::layout::layout_contract;
use super::logo::LogoImage;
use super::pdf::write_pdf;
use super::record::EnrollmentRecord;
use super::{ContractError, RenderedDocument};

/// Renders the enrollment contract for one record.
///
/// Holds no per-call state, so a single renderer can be shared across
/// worker threads.
#[derive(Clone)]
pub struct ContractRenderer {
    logo_path: PathBuf,
    clock: Arc<dyn DateSource>,
}

impl ContractRenderer {
    /// Renderer stamping documents with the local wall-clock date.
    pub fn new(logo_path: impl Into<PathBuf>) -> Self {
        Self::with_clock(logo_path, Arc::new(SystemClock))
    }

    pub fn with_clock(logo_path: impl Into<PathBuf>, clock: Arc<dyn DateSource>) -> Self {
        Self {
            logo_path: logo_path.into(),
            clock,
        }
    }

    /// Render the contract page.
    ///
    /// The logo is read from disk on every call; a missing or unreadable
    /// logo fails the render.
    pub fn render(&self, record: &EnrollmentRecord) -> Result<RenderedDocument, ContractError> {
        let logo = LogoImage::load(&self.logo_path)?;
        let layout = layout_contract(
            record,
            self.clock.today(),
            (logo.width_px, logo.height_px),
        )?;
        let pdf = write_pdf(&layout, &logo)?;

        log::debug!(
            "Rendered contract '{}' ({} bytes)",
            layout.title,
            pdf.len()
        );

        Ok(RenderedDocument {
            filename: record.attachment_filename(),
            title: layout.title,
            pdf,
        })
    }
}

impl std::fmt::Debug for ContractRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractRenderer")
            .field("logo_path", &self.logo_path)
            .finish_non_exhaustive()
    }
}
