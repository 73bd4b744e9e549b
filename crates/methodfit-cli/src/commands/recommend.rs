//! Recommend command implementation.
//!
//! Evaluates a prepared answer snapshot without the interactive flow. The
//! snapshot uses the external wire shape: a JSON object keyed by question id
//! with `"yes"`, `"no"`, or a number as each value.

use crate::cli::RecommendArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use methodfit_domain::{AnswerValue, Answers, QuestionId, YesNo};
use methodfit_engine::Recommender;
use std::fs;
use std::io::Read;

/// Execute the recommend command.
pub fn execute_recommend(
    args: RecommendArgs,
    recommender: &Recommender,
    formatter: &Formatter,
) -> Result<()> {
    if args.file.is_none() && !args.stdin && args.answer.is_empty() {
        return Err(CliError::InvalidInput(
            "Provide a snapshot via --file, --stdin, or --answer".to_string(),
        ));
    }

    let mut answers = Answers::new();

    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)?;
        for warning in apply_snapshot(&mut answers, &contents)? {
            eprintln!("{}", formatter.warning(&warning));
        }
    }

    if args.stdin {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        for warning in apply_snapshot(&mut answers, &contents)? {
            eprintln!("{}", formatter.warning(&warning));
        }
    }

    // Individual --answer flags override the snapshot.
    for pair in &args.answer {
        let (id, value) = parse_pair(pair)?;
        answers.record(id, value);
    }

    let recommendation = recommender.recommend(&answers);
    println!("{}", formatter.format_recommendation(&recommendation)?);
    Ok(())
}

/// Merge a JSON snapshot into the accumulator.
///
/// Unknown keys are rejected: the question-id enumeration is closed, and a
/// typoed key that silently dropped an exclusion answer would misreport
/// eligibility. Malformed values for known keys are tolerated (the answer
/// stays unknown) and reported back as warnings.
fn apply_snapshot(answers: &mut Answers, json: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value
        .as_object()
        .ok_or_else(|| CliError::InvalidInput("Snapshot must be a JSON object".to_string()))?;

    let mut warnings = Vec::new();
    for (key, raw) in object {
        let id = QuestionId::parse(key).ok_or_else(|| CliError::UnknownQuestion(key.clone()))?;

        match raw {
            serde_json::Value::String(s) => match YesNo::parse(s) {
                Some(yes_no) => answers.record(id, AnswerValue::YesNo(yes_no)),
                None => warnings.push(format!(
                    "Ignoring answer for '{}': expected \"yes\", \"no\", or a number, got \"{}\"",
                    key, s
                )),
            },
            serde_json::Value::Number(n) => match n.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(number) => answers.record(id, AnswerValue::Number(number)),
                None => warnings.push(format!(
                    "Ignoring answer for '{}': {} is not a whole non-negative number",
                    key, n
                )),
            },
            other => warnings.push(format!(
                "Ignoring answer for '{}': unsupported value {}",
                key, other
            )),
        }
    }
    Ok(warnings)
}

/// Parse one `id=value` pair from the command line.
fn parse_pair(pair: &str) -> Result<(QuestionId, AnswerValue)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| CliError::InvalidInput(format!("Expected ID=VALUE, got '{}'", pair)))?;

    let id = QuestionId::parse(key).ok_or_else(|| CliError::UnknownQuestion(key.to_string()))?;

    if let Some(yes_no) = YesNo::parse(value) {
        return Ok((id, AnswerValue::YesNo(yes_no)));
    }
    match value.parse::<u32>() {
        Ok(number) => Ok((id, AnswerValue::Number(number))),
        Err(_) => Err(CliError::InvalidInput(format!(
            "Expected yes, no, or a number for '{}', got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_parsing() {
        let mut answers = Answers::new();
        let warnings = apply_snapshot(
            &mut answers,
            r#"{"age": 40, "smoking": "yes", "dailyPillStrict": "no"}"#,
        )
        .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(answers.number(QuestionId::Age), Some(40));
        assert!(answers.is_yes(QuestionId::Smoking));
        assert!(answers.is_no(QuestionId::DailyPillStrict));
    }

    #[test]
    fn test_snapshot_rejects_unknown_keys() {
        let mut answers = Answers::new();
        let result = apply_snapshot(&mut answers, r#"{"clotting_history": "yes"}"#);
        match result {
            Err(CliError::UnknownQuestion(key)) => assert_eq!(key, "clotting_history"),
            other => panic!("Expected UnknownQuestion, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_snapshot_tolerates_malformed_values() {
        let mut answers = Answers::new();
        let warnings = apply_snapshot(
            &mut answers,
            r#"{"smoking": "maybe", "age": 28.5, "bmiHigh": true, "pregnantSoon": "yes"}"#,
        )
        .unwrap();

        // Malformed values stay unknown; the valid answer still lands.
        assert_eq!(warnings.len(), 3);
        assert!(!answers.is_yes(QuestionId::Smoking));
        assert_eq!(answers.number(QuestionId::Age), None);
        assert!(!answers.is_yes(QuestionId::BmiHigh));
        assert!(answers.is_yes(QuestionId::PregnantSoon));
    }

    #[test]
    fn test_snapshot_must_be_an_object() {
        let mut answers = Answers::new();
        assert!(apply_snapshot(&mut answers, r#"["yes"]"#).is_err());
    }

    #[test]
    fn test_pair_parsing() {
        assert_eq!(
            parse_pair("smoking=yes").unwrap(),
            (QuestionId::Smoking, AnswerValue::YesNo(YesNo::Yes))
        );
        assert_eq!(
            parse_pair("age=40").unwrap(),
            (QuestionId::Age, AnswerValue::Number(40))
        );
        assert!(parse_pair("smoking").is_err());
        assert!(parse_pair("smoking=maybe").is_err());
        assert!(parse_pair("unknown=yes").is_err());
    }
}
