//! Input validation for form submissions.
//!
//! Messages are German because they are shown on the website as-is.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::models::{ContactRequest, EnrollmentRequest};

/// Trait for validating request objects.
pub trait Validator {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} darf nicht leer sein", label))
    }

    pub fn invalid_email(field: &str) -> Self {
        Self::new(field, "E-Mail-Adresse ist ungültig")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn to_message(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@<>]+@[^\s@<>]+\.[^\s@<>]+$").expect("email pattern is valid")
    })
}

pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

pub fn validate_email(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "E-Mail"));
        return;
    }

    if !email_pattern().is_match(trimmed) {
        errors.add(ValidationError::invalid_email(field));
    }
}

impl Validator for EnrollmentRequest {
    fn validate(&self) -> Result<(), String> {
        let record = &self.record;
        let mut errors = ValidationErrors::new();

        // Instrument and teacher are capitalized when the contract is rendered.
        validate_required(&record.instrument, "instrument", "Instrument", &mut errors);
        validate_required(&record.teacher_name, "lehrer", "Lehrer", &mut errors);
        validate_required(&record.student_name, "schueler_name", "Name des Schülers", &mut errors);
        validate_email(&record.email, "email", &mut errors);

        errors.into_result()
    }
}

impl Validator for ContactRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.name, "name", "Name", &mut errors);
        validate_required(&self.message, "message", "Nachricht", &mut errors);
        validate_email(&self.email, "email", &mut errors);

        errors.into_result()
    }
}
