//! The fixed interrogation sequence

use std::fmt;

/// Unique identifier for a screening question
///
/// A closed enumeration declared in interrogation order. The ordering only
/// drives the question flow; it carries no recommendation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionId {
    /// Age in years
    Age,

    /// Currently smokes cigarettes
    Smoking,

    /// Prior blood clot, stroke, or heart attack
    ClottingHistory,

    /// Diagnosed high blood pressure
    Hypertension,

    /// Migraines with aura
    MigraineWithAura,

    /// BMI around 30 or higher
    BmiHigh,

    /// Currently breastfeeding
    Breastfeeding,

    /// Prior breast cancer diagnosis
    BreastCancerHistory,

    /// Can reliably take a pill at the same time every day
    DailyPillStrict,

    /// Non-hormonal method is a high priority
    PreferNoHormones,

    /// Hoping to become pregnant in the next 1-2 years
    PregnantSoon,
}

impl QuestionId {
    /// All question ids, in interrogation order
    pub const ALL: [QuestionId; 11] = [
        QuestionId::Age,
        QuestionId::Smoking,
        QuestionId::ClottingHistory,
        QuestionId::Hypertension,
        QuestionId::MigraineWithAura,
        QuestionId::BmiHigh,
        QuestionId::Breastfeeding,
        QuestionId::BreastCancerHistory,
        QuestionId::DailyPillStrict,
        QuestionId::PreferNoHormones,
        QuestionId::PregnantSoon,
    ];

    /// Get the wire id as a string
    ///
    /// These are the keys used by externally supplied answer snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::Smoking => "smoking",
            QuestionId::ClottingHistory => "clottingHistory",
            QuestionId::Hypertension => "hypertension",
            QuestionId::MigraineWithAura => "migraineWithAura",
            QuestionId::BmiHigh => "bmiHigh",
            QuestionId::Breastfeeding => "breastfeeding",
            QuestionId::BreastCancerHistory => "breastCancerHistory",
            QuestionId::DailyPillStrict => "dailyPillStrict",
            QuestionId::PreferNoHormones => "preferNoHormones",
            QuestionId::PregnantSoon => "pregnantSoon",
        }
    }

    /// Parse a question id from its wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "age" => Some(QuestionId::Age),
            "smoking" => Some(QuestionId::Smoking),
            "clottingHistory" => Some(QuestionId::ClottingHistory),
            "hypertension" => Some(QuestionId::Hypertension),
            "migraineWithAura" => Some(QuestionId::MigraineWithAura),
            "bmiHigh" => Some(QuestionId::BmiHigh),
            "breastfeeding" => Some(QuestionId::Breastfeeding),
            "breastCancerHistory" => Some(QuestionId::BreastCancerHistory),
            "dailyPillStrict" => Some(QuestionId::DailyPillStrict),
            "preferNoHormones" => Some(QuestionId::PreferNoHormones),
            "pregnantSoon" => Some(QuestionId::PregnantSoon),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid question id: {}", s))
    }
}

/// What kind of input a question accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Yes/no toggle
    YesNo,

    /// Bounded whole number
    Number {
        /// Minimum accepted value (inclusive)
        min: u32,
        /// Maximum accepted value (inclusive)
        max: u32,
        /// Increment step
        step: u32,
        /// Value offered when the user gives no input
        default: u32,
    },
}

/// One entry in the interrogation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Identifier referenced by answers and rules
    pub id: QuestionId,

    /// Prompt shown to the user
    pub prompt: &'static str,

    /// Input kind
    pub kind: QuestionKind,
}

/// The fixed, ordered questionnaire
pub fn questionnaire() -> &'static [Question] {
    &QUESTIONS
}

static QUESTIONS: [Question; 11] = [
    Question {
        id: QuestionId::Age,
        prompt: "How old are you?",
        kind: QuestionKind::Number {
            min: 13,
            max: 110,
            step: 1,
            default: 28,
        },
    },
    Question {
        id: QuestionId::Smoking,
        prompt: "Do you smoke cigarettes?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::ClottingHistory,
        prompt: "Have you ever had a blood clot, stroke, or heart attack?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::Hypertension,
        prompt: "Have you ever been told you have high blood pressure (hypertension)?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::MigraineWithAura,
        prompt: "Do you get migraines with aura (flashing lights, zig-zag lines, or vision changes before the headache)?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::BmiHigh,
        prompt: "Is your BMI around 30 or higher?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::Breastfeeding,
        prompt: "Are you currently breastfeeding?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::BreastCancerHistory,
        prompt: "Have you ever been diagnosed with breast cancer?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::DailyPillStrict,
        prompt: "Can you reliably take a pill at around the same time every day?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::PreferNoHormones,
        prompt: "Is using a non-hormonal birth control method a high priority for you?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: QuestionId::PregnantSoon,
        prompt: "Are you hoping to become pregnant in the next 1-2 years?",
        kind: QuestionKind::YesNo,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_roundtrip() {
        for id in QuestionId::ALL {
            assert_eq!(QuestionId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_question_id_invalid() {
        assert!(QuestionId::parse("height").is_none());
        assert!(QuestionId::parse("Age").is_none());
        assert!(QuestionId::parse("").is_none());
    }

    #[test]
    fn test_questionnaire_covers_every_id_once() {
        let ids: Vec<QuestionId> = questionnaire().iter().map(|q| q.id).collect();
        assert_eq!(ids, QuestionId::ALL);
    }

    #[test]
    fn test_age_is_the_only_number_question() {
        for question in questionnaire() {
            match question.kind {
                QuestionKind::Number { min, max, default, .. } => {
                    assert_eq!(question.id, QuestionId::Age);
                    assert!(min <= default && default <= max);
                }
                QuestionKind::YesNo => assert_ne!(question.id, QuestionId::Age),
            }
        }
    }
}
