#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use image::{Rgba, RgbaImage};
use musicschool_forms_server::captcha::CaptchaVerifier;
use musicschool_forms_server::contract::{ContractRenderer, EnrollmentRecord, FixedDate};
use musicschool_forms_server::mail::{MailError, Mailer, OutgoingEmail};
use tempfile::TempDir;
use tokio::sync::Mutex;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

/// Write a small PNG logo into a fresh temporary directory.
pub fn logo_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("logo.png");
    RgbaImage::from_fn(96, 48, |x, _| {
        if x < 48 {
            Rgba([30, 60, 120, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
    .save(&path)
    .expect("Failed to write logo fixture");
    (dir, path)
}

pub fn renderer_with_logo(path: &Path) -> ContractRenderer {
    ContractRenderer::with_clock(path, Arc::new(FixedDate(test_date())))
}

pub fn sample_record(variant: &str) -> EnrollmentRecord {
    EnrollmentRecord {
        instrument: "klavier".to_string(),
        teacher_name: "müller".to_string(),
        student_name: "Anna Schmidt".to_string(),
        street: "Hauptstraße 1".to_string(),
        postal_code: "10115".to_string(),
        city: "Berlin".to_string(),
        guardian_name: "Petra Schmidt".to_string(),
        phone: "0301234567".to_string(),
        email: "eltern@example.de".to_string(),
        birth_date: "01.02.2015".to_string(),
        contract_variant: variant.to_string(),
        consent_given: true,
    }
}

/// True if the PDF bytes contain `text` as drawn with the WinAnsi fonts.
pub fn pdf_contains_text(pdf: &[u8], text: &str) -> bool {
    let needle = musicschool_forms_server::contract::text::to_win_ansi(text);
    pdf.windows(needle.len()).any(|window| window == needle.as_slice())
}

/// Captcha verifier with a fixed answer.
pub struct StaticCaptcha(pub bool);

#[async_trait::async_trait]
impl CaptchaVerifier for StaticCaptcha {
    async fn verify(&self, _token: &str) -> bool {
        self.0
    }
}

/// Mailer that records messages instead of sending them.
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_on_call: Option<usize>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    /// Fail the n-th send (0-based) with a provider rejection.
    pub fn failing_on(call: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: OutgoingEmail) -> Result<String, MailError> {
        let mut sent = self.sent.lock().await;
        let call = sent.len();
        sent.push(message);

        if self.fail_on_call == Some(call) {
            return Err(MailError::Rejected {
                status: 422,
                message: "invalid recipient".to_string(),
            });
        }

        Ok(format!("mail-{}", call))
    }
}
