//! Answer snapshot accumulated by the question flow

use crate::question::QuestionId;
use std::collections::BTreeMap;
use std::fmt;

/// A yes/no response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    /// Affirmative
    Yes,

    /// Negative
    No,
}

impl YesNo {
    /// Get the wire value as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    /// Parse a yes/no value from its wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded answer value
///
/// Yes/no questions carry a [`YesNo`]; numeric questions carry a whole
/// number. A value of the wrong kind for a question is tolerated and reads
/// as unknown, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue {
    /// Response to a yes/no question
    YesNo(YesNo),

    /// Response to a numeric question
    Number(u32),
}

/// Snapshot of the user's responses so far
///
/// Built incrementally, one question at a time, by the external question
/// flow. Keys that have not been answered are absent, and every accessor
/// treats an absent key as unknown: a boolean read defaults to `false`, a
/// numeric read to `None`. The snapshot is consumed by reference and never
/// mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl Answers {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer to the same question
    pub fn record(&mut self, id: QuestionId, value: AnswerValue) {
        self.values.insert(id, value);
    }

    /// Get the raw recorded value, if any
    pub fn get(&self, id: QuestionId) -> Option<AnswerValue> {
        self.values.get(&id).copied()
    }

    /// Whether the question has been answered at all
    pub fn answered(&self, id: QuestionId) -> bool {
        self.values.contains_key(&id)
    }

    /// True only for an explicit "yes"
    ///
    /// Absent answers and values of the wrong kind read as `false`; an
    /// unanswered question must never behave like an affirmative.
    pub fn is_yes(&self, id: QuestionId) -> bool {
        matches!(self.get(id), Some(AnswerValue::YesNo(YesNo::Yes)))
    }

    /// True only for an explicit "no"
    ///
    /// Not the negation of [`Answers::is_yes`]: an absent answer is neither.
    pub fn is_no(&self, id: QuestionId) -> bool {
        matches!(self.get(id), Some(AnswerValue::YesNo(YesNo::No)))
    }

    /// The numeric answer, if one was recorded
    pub fn number(&self, id: QuestionId) -> Option<u32> {
        match self.get(id) {
            Some(AnswerValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Number of questions answered so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no questions have been answered yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over recorded answers in question order
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.values.iter().map(|(id, value)| (*id, *value))
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_reads_as_unknown() {
        let answers = Answers::new();
        assert!(answers.is_empty());
        assert!(!answers.is_yes(QuestionId::Smoking));
        assert!(!answers.is_no(QuestionId::Smoking));
        assert_eq!(answers.number(QuestionId::Age), None);
    }

    #[test]
    fn test_record_and_read() {
        let mut answers = Answers::new();
        answers.record(QuestionId::Smoking, AnswerValue::YesNo(YesNo::Yes));
        answers.record(QuestionId::Age, AnswerValue::Number(34));

        assert!(answers.is_yes(QuestionId::Smoking));
        assert!(!answers.is_no(QuestionId::Smoking));
        assert_eq!(answers.number(QuestionId::Age), Some(34));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_record_replaces_earlier_answer() {
        let mut answers = Answers::new();
        answers.record(QuestionId::Smoking, AnswerValue::YesNo(YesNo::Yes));
        answers.record(QuestionId::Smoking, AnswerValue::YesNo(YesNo::No));

        assert!(answers.is_no(QuestionId::Smoking));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_wrong_kind_reads_as_unknown() {
        let mut answers = Answers::new();
        answers.record(QuestionId::Smoking, AnswerValue::Number(1));
        answers.record(QuestionId::Age, AnswerValue::YesNo(YesNo::Yes));

        assert!(!answers.is_yes(QuestionId::Smoking));
        assert!(!answers.is_no(QuestionId::Smoking));
        assert_eq!(answers.number(QuestionId::Age), None);
    }

    #[test]
    fn test_yes_no_roundtrip() {
        assert_eq!(YesNo::parse("yes"), Some(YesNo::Yes));
        assert_eq!(YesNo::parse("no"), Some(YesNo::No));
        assert_eq!(YesNo::parse("Yes"), None);
        assert_eq!(YesNo::parse(""), None);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut first = Answers::new();
        first.record(QuestionId::Smoking, AnswerValue::YesNo(YesNo::Yes));
        first.record(QuestionId::Age, AnswerValue::Number(40));

        let mut second = Answers::new();
        second.record(QuestionId::Age, AnswerValue::Number(40));
        second.record(QuestionId::Smoking, AnswerValue::YesNo(YesNo::Yes));

        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = AnswerValue> {
        prop_oneof![
            Just(AnswerValue::YesNo(YesNo::Yes)),
            Just(AnswerValue::YesNo(YesNo::No)),
            (0u32..200).prop_map(AnswerValue::Number),
        ]
    }

    fn arb_entries() -> impl Strategy<Value = Vec<(QuestionId, AnswerValue)>> {
        proptest::collection::vec(
            ((0usize..QuestionId::ALL.len()), arb_value())
                .prop_map(|(index, value)| (QuestionId::ALL[index], value)),
            0..20,
        )
    }

    proptest! {
        /// Property: yes and no reads are mutually exclusive for any snapshot
        #[test]
        fn test_yes_no_exclusive(entries in arb_entries()) {
            let mut answers = Answers::new();
            for (id, value) in entries {
                answers.record(id, value);
            }
            for id in QuestionId::ALL {
                prop_assert!(!(answers.is_yes(id) && answers.is_no(id)));
            }
        }

        /// Property: reads reflect the last recorded value for each question
        #[test]
        fn test_last_write_wins(entries in arb_entries()) {
            let mut answers = Answers::new();
            let mut expected: std::collections::BTreeMap<QuestionId, AnswerValue> =
                std::collections::BTreeMap::new();
            for (id, value) in entries {
                answers.record(id, value);
                expected.insert(id, value);
            }
            for (id, value) in expected {
                prop_assert_eq!(answers.get(id), Some(value));
            }
        }
    }
}
