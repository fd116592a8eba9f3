//! Intent Classification and Response Lookup.
//!
//! Lowercases the user text, walks the rule table in declared order and
//! answers with the first rule whose triggers appear anywhere in the text.
//! Matching is plain substring containment: "care" fires inside "careful"
//! and "hi" inside "high". That is accepted behaviour.

use serde::{Deserialize, Serialize};

use super::rules::{Rule, RuleTable};
use super::topic::Topic;

/// Result of classifying one piece of user text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Topic that answered
    pub topic: Topic,
    /// Text to show the user, line breaks included
    pub text: String,
}

/// Classifier bound to a rule table
#[derive(Debug, Clone, Copy)]
pub struct Responder<'a> {
    table: &'a RuleTable,
}

impl Default for Responder<'static> {
    fn default() -> Self {
        Self::new(RuleTable::shared())
    }
}

impl<'a> Responder<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a RuleTable {
        self.table
    }

    fn first_match(&self, text: &str) -> Option<(&'a Rule, &'a str)> {
        let normalized = text.to_lowercase();
        self.table
            .rules()
            .iter()
            .find_map(|rule| rule.first_hit(&normalized).map(|trigger| (rule, trigger)))
    }

    /// Topic the text routes to, `Topic::Fallback` when nothing matches
    pub fn classify(&self, text: &str) -> Topic {
        self.first_match(text)
            .map(|(rule, _)| rule.topic)
            .unwrap_or(Topic::Fallback)
    }

    /// Trigger that selected the winning rule
    pub fn matched_trigger(&self, text: &str) -> Option<&'a str> {
        self.first_match(text).map(|(_, trigger)| trigger)
    }

    /// Classify the text and return the canned answer. Never fails.
    pub fn classify_and_respond(&self, text: &str) -> Reply {
        self.respond_with_trigger(text).0
    }

    /// Same as [`Responder::classify_and_respond`], also returning the
    /// trigger that fired. One pass over the table.
    pub fn respond_with_trigger(&self, text: &str) -> (Reply, Option<&'a str>) {
        match self.first_match(text) {
            Some((rule, trigger)) => (
                Reply {
                    topic: rule.topic,
                    text: rule.response.clone(),
                },
                Some(trigger),
            ),
            None => (
                Reply {
                    topic: Topic::Fallback,
                    text: self.table.fallback().to_string(),
                },
                None,
            ),
        }
    }
}

/// Answers `text` from the shared stroke knowledge base
pub fn classify_and_respond(text: &str) -> Reply {
    Responder::default().classify_and_respond(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptoms() {
        let reply = classify_and_respond("What are the symptoms?");
        assert_eq!(reply.topic, Topic::Symptoms);
        assert!(reply.text.starts_with("The warning signs of a stroke include:"));
    }

    #[test]
    fn test_fallback_on_empty() {
        let reply = classify_and_respond("");
        assert_eq!(reply.topic, Topic::Fallback);
    }

    #[test]
    fn test_first_match_ignores_position_in_input() {
        // "prevent" comes first in the text, but FAST is declared first
        let reply = classify_and_respond("prevent it, fast");
        assert_eq!(reply.topic, Topic::Fast);
    }

    #[test]
    fn test_matched_trigger() {
        let responder = Responder::default();
        assert_eq!(responder.matched_trigger("I'm very careful"), Some("care"));
        assert_eq!(responder.matched_trigger("purple elephant"), None);
    }

    #[test]
    fn test_respond_with_trigger() {
        let responder = Responder::default();

        let (reply, trigger) = responder.respond_with_trigger("What is high blood pressure?");
        assert_eq!(reply.topic, Topic::Greeting);
        assert_eq!(trigger, Some("hi"));
        assert_eq!(reply, responder.classify_and_respond("What is high blood pressure?"));

        let (reply, trigger) = responder.respond_with_trigger("purple elephant");
        assert_eq!(reply.topic, Topic::Fallback);
        assert_eq!(trigger, None);
    }

    #[test]
    fn test_custom_table() {
        let table = RuleTable::new(
            vec![
                Rule::new(Topic::Diet, ["salt"], "less salt"),
                Rule::new(Topic::Exercise, ["walk"], "walk daily"),
            ],
            "ask about salt or walking",
        )
        .unwrap();
        let responder = Responder::new(&table);

        assert_eq!(responder.classify_and_respond("SALT?").text, "less salt");
        assert_eq!(responder.classify_and_respond("a walk").text, "walk daily");
        assert_eq!(
            responder.classify_and_respond("symptoms").text,
            "ask about salt or walking"
        );
    }
}
