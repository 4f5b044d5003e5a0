use anyhow::Context;
use cram_api::ApiClient;
use cram_core::enums::{Difficulty, QuestionKind};
use cram_flows::{FlowError, QuizConfig, QuizFlow};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::quiz::QuizTakeArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::prompt::prompt_line;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct QuizTakeResponse {
    note_id: String,
    score: f64,
    correct: usize,
    total: usize,
    questions: Vec<QuestionOutcome>,
}

#[derive(Serialize)]
struct QuestionOutcome {
    question_id: String,
    question: String,
    your_answer: Option<String>,
    correct_answer: Option<String>,
    correct: Option<bool>,
    explanation: Option<String>,
}

pub async fn handle(
    args: &QuizTakeArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let config = QuizConfig {
        kind: parse_enum::<QuestionKind>(&args.kind, "kind")?,
        difficulty: parse_enum::<Difficulty>(&args.difficulty, "difficulty")?,
        count: args.count,
    };

    let mut flow = QuizFlow::new(&args.note_id);

    let spinner = Progress::spinner("generating questions");
    let generated = flow.generate(client, &config).await;
    spinner.finish_clear();
    generated?;

    let total = flow.questions().len();
    loop {
        let Some(question) = flow.current_question() else {
            break;
        };
        let number = flow.current_index() + 1;
        let text = question.question.clone();
        let options = question.options.clone();

        println!();
        println!("[{number}/{total}] {text}");
        if let Some(options) = &options {
            for (letter, option) in lettered(options) {
                println!("  {letter}) {option}");
            }
        }

        let Some(line) = prompt_line("answer> ")? else {
            anyhow::bail!("quiz aborted at question {number} of {total}");
        };
        let answer = resolve_answer(options.as_deref(), &line);
        match flow.answer_current(&answer) {
            Ok(_) => {}
            Err(FlowError::EmptyAnswer) => println!("An answer is required."),
            Err(error) => return Err(error.into()),
        }
    }

    let spinner = Progress::spinner("grading answers");
    let submitted = flow.submit(client).await;
    spinner.finish_clear();
    submitted?;

    let report = flow.report().context("graded quiz must carry a report")?;
    let questions = flow
        .review()
        .into_iter()
        .enumerate()
        .map(|(index, (question, graded))| QuestionOutcome {
            question_id: question.id.clone(),
            question: question.question.clone(),
            your_answer: graded
                .and_then(|graded| graded.user_answer.clone())
                .or_else(|| flow.answers().get(index).map(|answer| answer.answer.clone())),
            correct_answer: graded
                .and_then(|graded| graded.correct_answer.clone())
                .or_else(|| question.correct_answer.clone()),
            correct: graded.map(|graded| graded.is_correct),
            explanation: graded.and_then(|graded| graded.explanation.clone()),
        })
        .collect();

    output(
        &QuizTakeResponse {
            note_id: flow.note_id().to_string(),
            score: report.score,
            correct: report.correct_count(),
            total,
            questions,
        },
        flags.format,
    )
}

fn lettered(options: &[String]) -> impl Iterator<Item = (char, &String)> {
    options.iter().enumerate().map(|(index, option)| {
        let letter = char::from(b'A' + u8::try_from(index % 26).unwrap_or(0));
        (letter, option)
    })
}

/// Map a single option letter to its option text; anything else is free text.
fn resolve_answer(options: Option<&[String]>, input: &str) -> String {
    let trimmed = input.trim();
    if let Some(options) = options
        && trimmed.chars().count() == 1
        && let Some(letter) = trimmed.chars().next()
    {
        let index = (letter.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
        if let Some(option) = options.get(index) {
            return option.clone();
        }
    }
    trimmed.to_string()
}
