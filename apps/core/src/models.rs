use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brain::Reply;

/// Body POSTed to the chatbot endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The text the user typed, already trimmed by the widget.
    pub message: String,
}

/// Body returned by the chatbot endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Text to display verbatim, line breaks included.
    #[serde(default)]
    pub response: String,
    /// Follow-up prompts the user can click to resubmit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// A truthy value here (see [`ChatResponse::is_error`]) means the backend failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl ChatResponse {
    /// Returns the reported error when it is truthy.
    ///
    /// `null`, `false`, `0`, `""` and a missing field all mean success.
    pub fn reported_error(&self) -> Option<&serde_json::Value> {
        self.error.as_ref().filter(|value| is_truthy(value))
    }

    pub fn is_error(&self) -> bool {
        self.reported_error().is_some()
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        Self {
            response: reply.text,
            suggestions: None,
            error: None,
        }
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the widget's message list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequential identifier, starting at 1 for the welcome message.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Suggestions attached to a bot answer, empty otherwise.
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            suggestions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_without_optional_fields() {
        let parsed: ChatResponse = serde_json::from_value(json!({ "response": "hi" })).unwrap();
        assert_eq!(parsed.response, "hi");
        assert!(parsed.suggestions.is_none());
        assert!(parsed.error.is_none());

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value, json!({ "response": "hi" }));
    }

    #[test]
    fn test_error_only_response() {
        let parsed: ChatResponse =
            serde_json::from_value(json!({ "error": "boom" })).unwrap();
        assert_eq!(parsed.response, "");
        assert_eq!(parsed.error, Some(json!("boom")));
    }

    #[test]
    fn test_falsy_error_values_are_success() {
        for error in [json!(null), json!(false), json!(""), json!(0)] {
            let parsed: ChatResponse =
                serde_json::from_value(json!({ "response": "x", "error": error })).unwrap();
            assert!(!parsed.is_error(), "{} should not count as an error", error);
        }
    }

    #[test]
    fn test_truthy_error_values_are_failures() {
        for error in [json!("boom"), json!(true), json!(1), json!({ "code": 5 }), json!([])] {
            let parsed: ChatResponse =
                serde_json::from_value(json!({ "response": "x", "error": error })).unwrap();
            assert!(parsed.is_error(), "{} should count as an error", error);
        }
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            message: "hello".to_string(),
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "message": "hello" }));
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Sender::Bot).unwrap(), json!("bot"));
    }
}
