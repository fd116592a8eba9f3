//! Topics the stroke knowledge base can answer about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject area a rule routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    /// Warning signs of a stroke
    Symptoms,
    /// The FAST acronym
    Fast,
    /// Ischemic, hemorrhagic, TIA
    Types,
    RiskFactors,
    Prevention,
    Treatment,
    Recovery,
    /// Tips for people looking after a survivor
    Caregiving,
    Greeting,
    Thanks,
    Farewell,
    BloodPressure,
    Diet,
    Exercise,
    /// Nothing matched
    Fallback,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    /// Returns the wire label for the topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Symptoms => "symptoms",
            Topic::Fast => "fast",
            Topic::Types => "types",
            Topic::RiskFactors => "riskFactors",
            Topic::Prevention => "prevention",
            Topic::Treatment => "treatment",
            Topic::Recovery => "recovery",
            Topic::Caregiving => "caregiving",
            Topic::Greeting => "greeting",
            Topic::Thanks => "thanks",
            Topic::Farewell => "farewell",
            Topic::BloodPressure => "bloodPressure",
            Topic::Diet => "diet",
            Topic::Exercise => "exercise",
            Topic::Fallback => "fallback",
        }
    }
}
