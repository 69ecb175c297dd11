//! Enrollment data as submitted by the form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Personal and contract data for one enrollment.
///
/// Field names follow the JSON sent by the website form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EnrollmentRecord {
    pub instrument: String,
    #[serde(rename = "lehrer")]
    pub teacher_name: String,
    #[serde(rename = "schueler_name")]
    pub student_name: String,
    #[serde(rename = "strasse")]
    pub street: String,
    #[serde(rename = "plz")]
    pub postal_code: String,
    #[serde(rename = "ort")]
    pub city: String,
    #[serde(rename = "erziehungsberechtigte")]
    pub guardian_name: String,
    /// Local number without country code.
    #[serde(rename = "telefon")]
    pub phone: String,
    pub email: String,
    /// Pre-formatted, printed as given.
    #[serde(rename = "geburtsdatum")]
    pub birth_date: String,
    #[serde(rename = "vertrag")]
    pub contract_variant: String,
    #[serde(rename = "einverstaendnis")]
    pub consent_given: bool,
}

impl EnrollmentRecord {
    /// Attachment filename for the rendered contract.
    pub fn attachment_filename(&self) -> String {
        format!("anmeldung-{}.pdf", self.student_name)
    }
}
