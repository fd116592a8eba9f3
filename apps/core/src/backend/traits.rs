use crate::error::AppError;
use crate::models::ChatResponse;
use async_trait::async_trait;

/// Defines the interface the chat session talks to.
///
/// This trait abstracts where answers come from, allowing the in-process
/// rule engine or a remote chatbot server to be used interchangeably.
#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    /// Sends one user message and returns the backend's answer.
    async fn ask(&self, message: String) -> Result<ChatResponse, AppError>;
}
