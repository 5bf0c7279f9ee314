//! Conversion service collaborator and its HTTP implementation.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{ConvertRequest, ConvertResponse, CONVERT_ROUTE};
use tracing::{debug, warn};
use url::Url;

use crate::error::ConvertError;

#[async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, request: ConvertRequest) -> Result<String, ConvertError>;
}

pub struct HttpConversionService {
    http: Client,
    endpoint: Url,
}

impl HttpConversionService {
    pub fn new(server_url: &str) -> Result<Self, url::ParseError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(server_url)?.join(CONVERT_ROUTE)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ConversionService for HttpConversionService {
    async fn convert(&self, request: ConvertRequest) -> Result<String, ConvertError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let error = ConvertError::from_status(status.as_u16(), &body);
            warn!(status = status.as_u16(), %error, "conversion service rejected request");
            return Err(error);
        }

        let body = response.bytes().await?;
        let parsed: ConvertResponse =
            serde_json::from_slice(&body).map_err(|error| ConvertError::Service {
                status: status.as_u16(),
                message: format!("invalid response from conversion service: {error}"),
            })?;
        debug!(
            chars = parsed.converted_text.chars().count(),
            "conversion service answered"
        );
        Ok(parsed.converted_text)
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
