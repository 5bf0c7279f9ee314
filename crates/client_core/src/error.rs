use thiserror::Error;

/// Failure of the one outstanding conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The service answered with a non-success status, or with a success
    /// status and a body that does not decode.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// The request never completed (connect failure, DNS, reset, ...).
    #[error("{0}")]
    Network(String),
}

impl ConvertError {
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = shared::error::ApiError::from_body(body)
            .map(|parsed| parsed.error)
            .unwrap_or_else(|| format!("서버 오류가 발생했습니다. (상태 코드: {status})"));
        Self::Service { status, message }
    }
}

impl From<reqwest::Error> for ConvertError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => Self::Service {
                status: status.as_u16(),
                message: value.to_string(),
            },
            None => Self::Network(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);
