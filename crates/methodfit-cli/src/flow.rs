//! Interactive question flow.
//!
//! Walks the fixed questionnaire in order, threading an explicit answer
//! accumulator; no state lives outside the loop. Any question can be
//! skipped, since the engine accepts partial snapshots.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use methodfit_domain::{questionnaire, AnswerValue, Answers, Question, QuestionKind, YesNo};
use methodfit_engine::Recommender;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What the user did with one prompt.
enum Reply {
    /// An answer to record
    Answer(AnswerValue),
    /// Leave this question unanswered
    Skip,
    /// Abandon the questionnaire
    Quit,
}

/// Run the interactive questionnaire and print the evaluation.
pub fn run_quiz(recommender: &Recommender, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Answer a few quick questions to see which options might fit you.")
    );
    println!(
        "{}",
        formatter.info("Reply yes/no (or a number), 'skip' to pass, 'quit' to leave.")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let questions = questionnaire();
    let total = questions.len();
    let mut answers = Answers::new();

    for (index, question) in questions.iter().enumerate() {
        println!("[{}/{}] {}", index + 1, total, question.prompt);

        match prompt_one(&mut editor, question, formatter)? {
            Reply::Answer(value) => answers.record(question.id, value),
            Reply::Skip => {}
            Reply::Quit => {
                println!("{}", formatter.info("Questionnaire abandoned."));
                return Ok(());
            }
        }
    }

    println!();
    let recommendation = recommender.recommend(&answers);
    println!("{}", formatter.format_recommendation(&recommendation)?);
    Ok(())
}

/// Prompt until the current question gets a usable reply.
fn prompt_one(
    editor: &mut DefaultEditor,
    question: &Question,
    formatter: &Formatter,
) -> Result<Reply> {
    let prompt = match question.kind {
        QuestionKind::YesNo => "(yes/no)> ".to_string(),
        QuestionKind::Number { default, .. } => format!("(number, enter for {})> ", default),
    };

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                match parse_reply(line, question) {
                    Ok(reply) => {
                        if !line.is_empty() {
                            editor.add_history_entry(line).ok();
                        }
                        return Ok(reply);
                    }
                    Err(message) => eprintln!("{}", formatter.error(&message)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", formatter.info("Use 'quit' to leave"));
            }
            Err(ReadlineError::Eof) => return Ok(Reply::Quit),
            Err(err) => {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    err.to_string(),
                )));
            }
        }
    }
}

/// Interpret one input line for the given question.
fn parse_reply(line: &str, question: &Question) -> std::result::Result<Reply, String> {
    match line.to_lowercase().as_str() {
        "quit" | "exit" | "q" => return Ok(Reply::Quit),
        "skip" | "s" => return Ok(Reply::Skip),
        _ => {}
    }

    match question.kind {
        QuestionKind::YesNo => match line.to_lowercase().as_str() {
            "y" | "yes" => Ok(Reply::Answer(AnswerValue::YesNo(YesNo::Yes))),
            "n" | "no" => Ok(Reply::Answer(AnswerValue::YesNo(YesNo::No))),
            _ => Err("Please answer yes, no, or skip.".to_string()),
        },
        QuestionKind::Number { min, max, default, .. } => {
            if line.is_empty() {
                return Ok(Reply::Answer(AnswerValue::Number(default)));
            }
            match line.parse::<u32>() {
                Ok(value) => Ok(Reply::Answer(AnswerValue::Number(value.clamp(min, max)))),
                Err(_) => Err(format!("Please enter a number between {} and {}.", min, max)),
            }
        }
    }
}
