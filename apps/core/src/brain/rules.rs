//! Ordered rule table.
//!
//! A `RuleTable` is the whole knowledge base the responder walks: an ordered
//! list of rules plus the fallback answer. It is never mutated once built.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::knowledge::{FALLBACK, STROKE_ENTRIES};
use super::topic::Topic;
use crate::error::AppError;

/// A topic, the substrings that select it and the text it answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub topic: Topic,
    /// Lowercase substrings; any one of them selects the rule
    pub triggers: Vec<String>,
    pub response: String,
}

impl Rule {
    pub fn new<I, S>(topic: Topic, triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic,
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }

    /// First trigger contained in already-lowercased text
    pub(crate) fn first_hit(&self, normalized: &str) -> Option<&str> {
        self.triggers
            .iter()
            .map(String::as_str)
            .find(|trigger| normalized.contains(trigger))
    }
}

/// Immutable, ordered set of rules. Declaration order decides ties.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: String,
}

static STROKE_TABLE: LazyLock<RuleTable> = LazyLock::new(RuleTable::stroke);

impl RuleTable {
    /// Builds a table from caller-supplied rules.
    ///
    /// Rejects empty triggers (they would match everything), triggers with
    /// uppercase characters (input is lowercased before matching, so they
    /// could never fire), duplicate topics and rules claiming `Fallback`.
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.topic == Topic::Fallback {
                return Err(AppError::Validation(
                    "the fallback topic cannot carry triggers".to_string(),
                ));
            }
            if !seen.insert(rule.topic) {
                return Err(AppError::Validation(format!(
                    "topic '{}' declared twice",
                    rule.topic
                )));
            }
            if rule.triggers.is_empty() {
                return Err(AppError::Validation(format!(
                    "topic '{}' has no triggers",
                    rule.topic
                )));
            }
            for trigger in &rule.triggers {
                if trigger.is_empty() {
                    return Err(AppError::Validation(format!(
                        "topic '{}' has an empty trigger",
                        rule.topic
                    )));
                }
                if *trigger != trigger.to_lowercase() {
                    return Err(AppError::Validation(format!(
                        "trigger '{}' of topic '{}' is not lowercase",
                        trigger, rule.topic
                    )));
                }
            }
        }

        Ok(Self {
            rules,
            fallback: fallback.into(),
        })
    }

    /// The stroke knowledge base in its canonical order
    pub fn stroke() -> Self {
        let rules = STROKE_ENTRIES
            .iter()
            .map(|entry| {
                Rule::new(
                    entry.topic,
                    entry.triggers.iter().copied(),
                    entry.answer.render(),
                )
            })
            .collect();

        Self {
            rules,
            fallback: FALLBACK.to_string(),
        }
    }

    /// Process-wide stroke table, built on first use
    pub fn shared() -> &'static RuleTable {
        &STROKE_TABLE
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Topics in match order, without the fallback
    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.rules.iter().map(|rule| rule.topic)
    }

    /// Response for a topic, if the table knows it
    pub fn response_for(&self, topic: Topic) -> Option<&str> {
        if topic == Topic::Fallback {
            return Some(&self.fallback);
        }
        self.rules
            .iter()
            .find(|rule| rule.topic == topic)
            .map(|rule| rule.response.as_str())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::stroke()
    }
}
