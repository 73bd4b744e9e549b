//! Screening rule configuration

use methodfit_domain::{Answers, QuestionId};

/// A single estrogen red flag
///
/// Each flag is an independent predicate over the answer snapshot; the
/// estrogen contraindication is the OR of every flag in the active
/// [`RuleSet`]. Any one flag is sufficient. Adding a flag means adding a
/// variant and its predicate here; the pipeline never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedFlag {
    /// Prior blood clot, stroke, or heart attack
    ClottingHistory,

    /// Migraines with aura
    MigraineWithAura,

    /// Diagnosed hypertension
    Hypertension,

    /// BMI around 30 or higher
    HighBmi,

    /// Prior breast cancer diagnosis
    BreastCancerHistory,

    /// Smoker aged 35 or older
    ///
    /// The joint condition is false when age is unknown.
    SmokerOver35,

    /// Recently postpartum (read from the breastfeeding question)
    RecentPostpartum,
}

impl RedFlag {
    /// Get the flag name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RedFlag::ClottingHistory => "clotting-history",
            RedFlag::MigraineWithAura => "migraine-with-aura",
            RedFlag::Hypertension => "hypertension",
            RedFlag::HighBmi => "high-bmi",
            RedFlag::BreastCancerHistory => "breast-cancer-history",
            RedFlag::SmokerOver35 => "smoker-over-35",
            RedFlag::RecentPostpartum => "recent-postpartum",
        }
    }

    /// Whether the flag is raised by the given snapshot
    pub fn applies(&self, answers: &Answers) -> bool {
        match self {
            RedFlag::ClottingHistory => answers.is_yes(QuestionId::ClottingHistory),
            RedFlag::MigraineWithAura => answers.is_yes(QuestionId::MigraineWithAura),
            RedFlag::Hypertension => answers.is_yes(QuestionId::Hypertension),
            RedFlag::HighBmi => answers.is_yes(QuestionId::BmiHigh),
            RedFlag::BreastCancerHistory => answers.is_yes(QuestionId::BreastCancerHistory),
            RedFlag::SmokerOver35 => {
                matches!(answers.number(QuestionId::Age), Some(age) if age >= 35)
                    && answers.is_yes(QuestionId::Smoking)
            }
            RedFlag::RecentPostpartum => answers.is_yes(QuestionId::Breastfeeding),
        }
    }
}

/// The rule table driving one evaluation
///
/// Two variants of this table have been used in practice; they differ in the
/// red-flag set and in which high-risk history drives the remove-all-hormonal
/// stage. A deployment picks exactly one variant; the variants are never
/// merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Red flags feeding the estrogen contraindication
    pub red_flags: Vec<RedFlag>,

    /// Question whose "yes" removes every hormonal method
    pub hormonal_exclusion_trigger: QuestionId,

    /// Question whose "yes" removes estrogen-containing methods
    pub estrogen_exclusion_trigger: QuestionId,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl RuleSet {
    /// The canonical rule table
    ///
    /// Breast-cancer history is both a red flag and the trigger for the
    /// remove-all-hormonal stage; breastfeeding triggers the narrower
    /// estrogen-only removal.
    pub fn canonical() -> Self {
        Self {
            red_flags: vec![
                RedFlag::ClottingHistory,
                RedFlag::MigraineWithAura,
                RedFlag::Hypertension,
                RedFlag::HighBmi,
                RedFlag::BreastCancerHistory,
                RedFlag::SmokerOver35,
            ],
            hormonal_exclusion_trigger: QuestionId::BreastCancerHistory,
            estrogen_exclusion_trigger: QuestionId::Breastfeeding,
        }
    }

    /// The alternate rule table observed in the field
    ///
    /// Swaps the breast-cancer red flag for recent-postpartum; the exclusion
    /// triggers are unchanged.
    pub fn postpartum_variant() -> Self {
        Self {
            red_flags: vec![
                RedFlag::ClottingHistory,
                RedFlag::MigraineWithAura,
                RedFlag::Hypertension,
                RedFlag::HighBmi,
                RedFlag::RecentPostpartum,
                RedFlag::SmokerOver35,
            ],
            hormonal_exclusion_trigger: QuestionId::BreastCancerHistory,
            estrogen_exclusion_trigger: QuestionId::Breastfeeding,
        }
    }

    /// Evaluate the estrogen contraindication: OR over the red-flag table
    pub fn estrogen_contraindicated(&self, answers: &Answers) -> bool {
        self.red_flags.iter().any(|flag| flag.applies(answers))
    }

    /// The red flags raised by the given snapshot
    pub fn raised_flags(&self, answers: &Answers) -> Vec<RedFlag> {
        self.red_flags
            .iter()
            .copied()
            .filter(|flag| flag.applies(answers))
            .collect()
    }
}
