use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{FailureKind, ServiceError};

pub const DEFAULT_CHAT_BASE_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_INGEST_BASE_URL: &str = "http://localhost:5002";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub chat_base_url: String,
    pub ingest_base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound on a chat round trip; keeps the pending state finite.
    pub chat_timeout: Duration,
    pub upload_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            chat_base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            ingest_base_url: DEFAULT_INGEST_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            chat_timeout: Duration::from_secs(30),
            upload_timeout: Duration::from_secs(120),
        }
    }
}

/// Appends `path` to `base`, tolerating a trailing slash on the base.
pub(crate) fn endpoint(base: &str, path: &str) -> Result<Url, ServiceError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))
}

pub(crate) fn build_client(settings: &ServiceSettings) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .build()
        .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Reads a success body as `T`; any non-success status becomes an error
/// carrying the payload's `error` field when one is present.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|payload| payload.error);
        return Err(
            ServiceError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                .with_detail(detail),
        );
    }

    serde_json::from_slice(&body)
        .map_err(|err| ServiceError::new(FailureKind::MalformedResponse, err.to_string()))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ServiceError::new(FailureKind::InvalidRequest, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
