//! # Brain Module
//!
//! Keyword rule engine behind the StrokeAssist widget.
//! Turns raw user text into a topic and a canned answer, no model involved.
//!
//! ## Components
//! - `topic`: Subject areas the knowledge base covers
//! - `knowledge`: Static stroke facts and their trigger substrings
//! - `rules`: Ordered, immutable rule table
//! - `responder`: First-match-wins classifier over a rule table

pub mod knowledge;
pub mod responder;
pub mod rules;
pub mod topic;

pub use responder::{classify_and_respond, Reply, Responder};
pub use rules::{Rule, RuleTable};
pub use topic::Topic;
