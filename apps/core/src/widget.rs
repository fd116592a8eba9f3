//! Headless chat session behind the StrokeAssist widget.
//!
//! Keeps the ordered message list, drives the typing indicator and turns any
//! backend failure into one fixed apology so the conversation never gets stuck.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

use crate::backend::ChatBackend;
use crate::config::WidgetConfig;
use crate::models::{ChatMessage, Sender};

/// First bot message of every session
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm StrokeAssist, your healthcare companion for stroke information. How can I help you today?";

/// Shown in place of any backend or transport failure
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

pub struct ChatWidget {
    backend: Arc<dyn ChatBackend>,
    messages: Vec<ChatMessage>,
    typing_delay: Duration,
    typing: watch::Sender<bool>,
}

impl ChatWidget {
    /// Starts a session seeded with the welcome message.
    pub fn new(backend: Arc<dyn ChatBackend>, config: &WidgetConfig) -> Self {
        let (typing, _) = watch::channel(false);
        Self {
            backend,
            messages: vec![ChatMessage::new(1, Sender::Bot, WELCOME_MESSAGE)],
            typing_delay: config.typing_delay(),
            typing,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        *self.typing.borrow()
    }

    /// Receiver that flips to `true` while an answer is pending.
    pub fn typing_indicator(&self) -> watch::Receiver<bool> {
        self.typing.subscribe()
    }

    /// Sends user input and appends the bot's answer.
    ///
    /// Blank input is ignored: nothing is appended and the backend is not
    /// called. Returns the bot message otherwise. If the returned future is
    /// dropped before the backend answers, the typing indicator is still
    /// lowered and the apology is appended in place of the answer.
    #[instrument(skip(self, input))]
    pub async fn submit(&mut self, input: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();

        push_message(&mut self.messages, Sender::User, text.clone(), Vec::new());
        let pending = PendingReply::start(&self.typing, &mut self.messages);

        if !self.typing_delay.is_zero() {
            sleep(self.typing_delay).await;
        }

        let (answer, suggestions) = match self.backend.ask(text).await {
            Ok(response) => {
                info!("Bot answered ({} chars)", response.response.len());
                (response.response, response.suggestions.unwrap_or_default())
            }
            Err(e) => {
                warn!(error = %e, "Chat backend failed, showing apology");
                (APOLOGY_MESSAGE.to_string(), Vec::new())
            }
        };

        pending.finish(answer, suggestions);
        self.messages.last()
    }

    /// Resubmits the `index`-th suggestion of the latest bot message.
    pub async fn choose_suggestion(&mut self, index: usize) -> Option<&ChatMessage> {
        let suggestion = self
            .messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Bot)
            .and_then(|m| m.suggestions.get(index))
            .cloned()?;
        self.submit(&suggestion).await
    }
}

fn push_message(
    messages: &mut Vec<ChatMessage>,
    sender: Sender,
    text: String,
    suggestions: Vec<String>,
) {
    let id = messages.len() as u64 + 1;
    messages.push(ChatMessage::new(id, sender, text).with_suggestions(suggestions));
}

/// Holds the typing indicator up while an answer is outstanding.
///
/// Dropping it without `finish` (the `submit` future was cancelled) appends
/// the apology so the user message never stays unanswered.
struct PendingReply<'a> {
    typing: &'a watch::Sender<bool>,
    messages: &'a mut Vec<ChatMessage>,
    answered: bool,
}

impl<'a> PendingReply<'a> {
    fn start(typing: &'a watch::Sender<bool>, messages: &'a mut Vec<ChatMessage>) -> Self {
        typing.send_replace(true);
        Self {
            typing,
            messages,
            answered: false,
        }
    }

    fn finish(mut self, answer: String, suggestions: Vec<String>) {
        push_message(self.messages, Sender::Bot, answer, suggestions);
        self.answered = true;
    }
}

impl Drop for PendingReply<'_> {
    fn drop(&mut self) {
        if !self.answered {
            warn!("Answer abandoned before the backend replied, showing apology");
            push_message(self.messages, Sender::Bot, APOLOGY_MESSAGE.to_string(), Vec::new());
        }
        self.typing.send_replace(false);
    }
}
