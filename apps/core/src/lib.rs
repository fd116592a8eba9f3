// StrokeAssist Core
// Keyword rule engine and headless chat session for the stroke information widget.

pub mod backend;
pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod widget;

pub use brain::{classify_and_respond, Reply, Responder, Rule, RuleTable, Topic};
pub use error::AppError;
pub use widget::ChatWidget;

#[cfg(test)]
mod tests;
