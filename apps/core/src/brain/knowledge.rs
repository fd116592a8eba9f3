//! Stroke Knowledge Base.
//!
//! Static facts and canned paragraphs the widget answers with, plus the
//! trigger substrings that route user text to each of them.

use super::topic::Topic;

/// Separator placed between the preamble and each fact of a list answer
pub const FACT_SEPARATOR: &str = "\n\n";

/// Warning signs of a stroke
const SYMPTOMS: &[&str] = &[
    "Sudden numbness or weakness in the face, arm, or leg, especially on one side of the body",
    "Sudden confusion, trouble speaking, or difficulty understanding speech",
    "Sudden trouble seeing in one or both eyes",
    "Sudden trouble walking, dizziness, loss of balance, or lack of coordination",
    "Sudden severe headache with no known cause",
];

/// FAST warning signs, in letter order
const FAST: &[&str] = &[
    "F - Face Drooping: Does one side of the face droop or is it numb?",
    "A - Arm Weakness: Is one arm weak or numb?",
    "S - Speech Difficulty: Is speech slurred, are they unable to speak, or are they hard to understand?",
    "T - Time to Call Emergency Services: If someone shows any of these symptoms, even if they go away, call emergency services and get them to the hospital immediately",
];

const TYPES: &[&str] = &[
    "Ischemic Stroke: Caused by a blockage in a blood vessel supplying the brain",
    "Hemorrhagic Stroke: Caused by bleeding in or around the brain",
    "Transient Ischemic Attack (TIA): Sometimes called a 'mini-stroke', these are temporary blockages",
];

const RISK_FACTORS: &[&str] = &[
    "High blood pressure",
    "Smoking",
    "Diabetes",
    "High cholesterol",
    "Physical inactivity and obesity",
    "Heart disease",
    "Age (risk increases with age)",
    "Family history of stroke",
    "Previous stroke or TIA",
];

const PREVENTION: &[&str] = &[
    "Manage high blood pressure",
    "Control cholesterol and blood sugar",
    "Quit smoking",
    "Maintain a healthy weight",
    "Exercise regularly (at least 30 minutes daily)",
    "Eat a diet rich in fruits, vegetables, whole grains and low in saturated fat",
    "Limit alcohol consumption",
    "Take medication as prescribed by your doctor",
];

const TREATMENT: &[&str] = &[
    "Emergency procedures: Clot-busting drugs (for ischemic stroke) or surgery (for hemorrhagic stroke)",
    "Medication: Blood thinners, anti-hypertensives, cholesterol-lowering drugs",
    "Rehabilitation: Physical therapy, occupational therapy, speech therapy",
    "Lifestyle changes: Diet, exercise, smoking cessation",
];

const RECOVERY: &[&str] = &[
    "Recovery time varies widely depending on stroke severity and location",
    "Most recovery happens in the first 3-6 months, but can continue for years",
    "Rehabilitation is crucial for maximum recovery",
    "Support from family and healthcare providers plays a key role",
    "Depression is common after stroke and should be addressed",
    "Setting realistic goals and celebrating small victories is important",
];

const CAREGIVING: &[&str] = &[
    "Educate yourself about stroke and recovery",
    "Create a safe home environment",
    "Help with medication management",
    "Encourage independence when possible",
    "Assist with rehabilitation exercises",
    "Watch for signs of depression or frustration",
    "Take care of your own health and seek support when needed",
];

const GREETING: &str = "Hello! I'm here to provide information about stroke prevention, symptoms, treatment, and recovery. How can I help you today?";

const THANKS: &str =
    "You're welcome! I'm here to help. Is there anything else you'd like to know about stroke?";

const FAREWELL: &str = "Take care! Remember to prioritize your health and don't hesitate to reach out if you have more questions about stroke.";

const BLOOD_PRESSURE: &str = "High blood pressure is the most significant controllable risk factor for stroke. Regular monitoring and management through medication, diet, exercise, and stress reduction are essential. Aim to keep your blood pressure below 120/80 mmHg.";

const DIET: &str = "A heart-healthy diet can reduce stroke risk. Focus on:\n\n- Fruits and vegetables\n- Whole grains\n- Lean proteins\n- Low-fat dairy\n- Limited salt (sodium)\n- Limited saturated and trans fats\n\nThe Mediterranean and DASH diets are particularly beneficial for stroke prevention.";

const EXERCISE: &str = "Regular physical activity reduces stroke risk by:\n\n- Lowering blood pressure\n- Improving cholesterol levels\n- Managing weight\n- Controlling diabetes\n\nAim for at least 150 minutes of moderate-intensity exercise per week (about 30 minutes daily, 5 days a week).";

/// Answer returned when no trigger matches
pub const FALLBACK: &str = "I'm here to provide information about stroke. You can ask me about symptoms, risk factors, prevention, treatment, recovery, or caregiving. How can I assist you with stroke-related information?";

/// Canned answer attached to a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// A preamble followed by a list of facts
    Facts {
        preamble: &'static str,
        facts: &'static [&'static str],
    },
    /// A fixed paragraph
    Paragraph(&'static str),
}

impl Answer {
    /// Renders the answer into the text shown to the user
    pub fn render(&self) -> String {
        match self {
            Answer::Facts { preamble, facts } => {
                format!("{}{}{}", preamble, FACT_SEPARATOR, facts.join(FACT_SEPARATOR))
            }
            Answer::Paragraph(text) => (*text).to_string(),
        }
    }
}

/// One entry of the stroke knowledge base
pub struct Entry {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub answer: Answer,
}

/// Stroke knowledge base in match order. Earlier entries win.
pub const STROKE_ENTRIES: &[Entry] = &[
    Entry {
        topic: Topic::Symptoms,
        triggers: &["symptom", "warning sign", "sign", "how do i know", "how to tell"],
        answer: Answer::Facts {
            preamble: "The warning signs of a stroke include:",
            facts: SYMPTOMS,
        },
    },
    Entry {
        topic: Topic::Fast,
        triggers: &["fast"],
        answer: Answer::Facts {
            preamble: "The FAST method is a quick way to identify stroke symptoms:",
            facts: FAST,
        },
    },
    Entry {
        topic: Topic::Types,
        triggers: &["type", "kind"],
        answer: Answer::Facts {
            preamble: "There are three main types of stroke:",
            facts: TYPES,
        },
    },
    Entry {
        topic: Topic::RiskFactors,
        triggers: &["risk", "cause"],
        answer: Answer::Facts {
            preamble: "Common risk factors for stroke include:",
            facts: RISK_FACTORS,
        },
    },
    Entry {
        topic: Topic::Prevention,
        // "reduce risk" never fires: RiskFactors' "risk" matches first
        triggers: &["prevent", "avoid", "reduce risk"],
        answer: Answer::Facts {
            preamble: "Here are ways to prevent stroke or reduce your risk:",
            facts: PREVENTION,
        },
    },
    Entry {
        topic: Topic::Treatment,
        triggers: &["treat", "medicine", "drug", "surgery", "therapy"],
        answer: Answer::Facts {
            preamble: "Stroke treatment options include:",
            facts: TREATMENT,
        },
    },
    Entry {
        topic: Topic::Recovery,
        triggers: &["recover", "healing", "getting better"],
        answer: Answer::Facts {
            preamble: "Important information about stroke recovery:",
            facts: RECOVERY,
        },
    },
    Entry {
        topic: Topic::Caregiving,
        triggers: &["care", "help someone", "family member"],
        answer: Answer::Facts {
            preamble: "Tips for caregivers supporting stroke survivors:",
            facts: CAREGIVING,
        },
    },
    Entry {
        topic: Topic::Greeting,
        triggers: &["hello", "hi", "hey"],
        answer: Answer::Paragraph(GREETING),
    },
    Entry {
        topic: Topic::Thanks,
        triggers: &["thank"],
        answer: Answer::Paragraph(THANKS),
    },
    Entry {
        topic: Topic::Farewell,
        triggers: &["bye", "goodbye"],
        answer: Answer::Paragraph(FAREWELL),
    },
    Entry {
        topic: Topic::BloodPressure,
        triggers: &["blood pressure", "hypertension"],
        answer: Answer::Paragraph(BLOOD_PRESSURE),
    },
    Entry {
        topic: Topic::Diet,
        triggers: &["diet", "food", "eat"],
        answer: Answer::Paragraph(DIET),
    },
    Entry {
        topic: Topic::Exercise,
        triggers: &["exercise", "physical activity", "workout"],
        answer: Answer::Paragraph(EXERCISE),
    },
];
