use crate::backend::traits::ChatBackend;
use crate::brain::{Responder, RuleTable};
use crate::error::AppError;
use crate::models::ChatResponse;
use async_trait::async_trait;
use tracing::debug;

/// Answers in-process from a rule table.
#[derive(Clone, Copy)]
pub struct LocalBackend {
    table: &'static RuleTable,
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new(RuleTable::shared())
    }
}

impl LocalBackend {
    pub fn new(table: &'static RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static RuleTable {
        self.table
    }
}

#[async_trait]
impl ChatBackend for LocalBackend {
    async fn ask(&self, message: String) -> Result<ChatResponse, AppError> {
        let (reply, trigger) = Responder::new(self.table).respond_with_trigger(&message);
        debug!(
            topic = %reply.topic,
            trigger = trigger.unwrap_or("-"),
            "Answered locally"
        );
        Ok(reply.into())
    }
}
