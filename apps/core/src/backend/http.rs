use crate::backend::traits::ChatBackend;
use crate::error::AppError;
use crate::models::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, instrument};
use url::Url;

/// Path of the chatbot endpoint relative to the server base URL.
const CHATBOT_PATH: &str = "chatbot";

/// Talks to a remote chatbot server over JSON/HTTP.
///
/// Sends `{ "message": ... }` to `<base_url>/chatbot` and expects
/// `{ "response": ..., "suggestions"?: [...], "error"?: ... }` back.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Creates a backend for the server at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:8080`.
    /// * `timeout` - Upper bound for one whole request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(CHATBOT_PATH)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    #[instrument(skip(self, message))]
    async fn ask(&self, message: String) -> Result<ChatResponse, AppError> {
        let request = ChatRequest { message };

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("Chatbot request to {} failed with status {}: {}", self.endpoint, status, body);
            return Err(AppError::Transport(format!(
                "Chatbot request failed with status {}: {}",
                status, body
            )));
        }

        let body = res.text().await?;
        let response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(err) = response.reported_error() {
            return Err(AppError::Backend(err.to_string()));
        }

        info!(
            suggestions = response.suggestions.as_ref().map_or(0, Vec::len),
            "Chatbot answered"
        );
        Ok(response)
    }
}
