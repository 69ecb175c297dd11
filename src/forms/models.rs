use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::EnrollmentRecord;

/// Body of `POST /anmeldung`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentRequest {
    #[serde(flatten)]
    pub record: EnrollmentRecord,
    #[serde(default)]
    pub token: String,
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    pub email: String,
    pub name: String,
    pub message: String,
    pub token: String,
}

/// Success body for the form endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormResponse {
    pub message: String,
    /// Id of the email handed to the mail provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FormResponse {
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
            id: None,
        }
    }

    pub fn sent(id: impl Into<String>) -> Self {
        Self {
            message: "OK".to_string(),
            id: Some(id.into()),
        }
    }
}
