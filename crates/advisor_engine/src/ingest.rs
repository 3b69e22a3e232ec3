use reqwest::multipart::{Form, Part};
use reqwest::Url;

use crate::http::{build_client, endpoint, map_reqwest_error, read_json};
use crate::{DocumentUpload, FailureKind, ParsedDocument, ServiceError, ServiceSettings};

/// Multipart field the ingestion service reads the document from.
pub const UPLOAD_FIELD: &str = "file";

#[async_trait::async_trait]
pub trait IngestService: Send + Sync {
    async fn upload(&self, document: &DocumentUpload) -> Result<ParsedDocument, ServiceError>;
}

/// `POST {base}/upload-pdf` with a single multipart `file` field.
#[derive(Debug, Clone)]
pub struct ReqwestIngestService {
    client: reqwest::Client,
    url: Url,
    settings: ServiceSettings,
}

impl ReqwestIngestService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let url = endpoint(&settings.ingest_base_url, "upload-pdf")?;
        let client = build_client(&settings)?;
        Ok(Self {
            client,
            url,
            settings,
        })
    }
}

fn build_form(document: &DocumentUpload) -> Result<Form, ServiceError> {
    // `Bytes` clones share the buffer; the body is not copied.
    let body = reqwest::Body::from(document.content.clone());
    let part = Part::stream_with_length(body, document.content.len() as u64)
        .file_name(document.file_name.clone())
        .mime_str(&document.media_type)
        .map_err(|err| ServiceError::new(FailureKind::InvalidRequest, err.to_string()))?;
    Ok(Form::new().part(UPLOAD_FIELD, part))
}

#[async_trait::async_trait]
impl IngestService for ReqwestIngestService {
    async fn upload(&self, document: &DocumentUpload) -> Result<ParsedDocument, ServiceError> {
        let form = build_form(document)?;
        let response = self
            .client
            .post(self.url.clone())
            .timeout(self.settings.upload_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }
}
