use serde::{Deserialize, Serialize};

use crate::domain::Target;

pub const CONVERT_ROUTE: &str = "/api/convert";
pub const HEALTH_ROUTE: &str = "/health";

/// Body of `POST /api/convert`.
///
/// `target` stays a plain string on the wire so the server can answer unknown
/// labels with a descriptive error instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub target: String,
}

impl ConvertRequest {
    pub fn new(text: impl Into<String>, target: Target) -> Self {
        Self {
            text: text.into(),
            target: target.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub converted_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
