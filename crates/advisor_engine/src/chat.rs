use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::http::{build_client, endpoint, map_reqwest_error, read_json};
use crate::{ServiceError, ServiceSettings};

#[async_trait::async_trait]
pub trait ChatService: Send + Sync {
    /// Sends one user message and returns the agent's reply text.
    async fn ask(&self, message: &str) -> Result<String, ServiceError>;
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    response: String,
}

/// `POST {base}/chat` with `{"message": ...}`, expecting `{"response": ...}`.
#[derive(Debug, Clone)]
pub struct ReqwestChatService {
    client: reqwest::Client,
    url: Url,
    settings: ServiceSettings,
}

impl ReqwestChatService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let url = endpoint(&settings.chat_base_url, "chat")?;
        let client = build_client(&settings)?;
        Ok(Self {
            client,
            url,
            settings,
        })
    }
}

#[async_trait::async_trait]
impl ChatService for ReqwestChatService {
    async fn ask(&self, message: &str) -> Result<String, ServiceError> {
        let response = self
            .client
            .post(self.url.clone())
            .timeout(self.settings.chat_timeout)
            .json(&ChatRequestBody { message })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: ChatResponseBody = read_json(response).await?;
        Ok(body.response)
    }
}
