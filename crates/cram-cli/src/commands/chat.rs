use cram_api::ApiClient;
use cram_core::entities::ConversationMessage;
use cram_core::enums::Role;
use cram_flows::{ChatSession, SUGGESTED_QUESTIONS};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::commands::shared::prompt::prompt_line;
use crate::output::output;

#[derive(Serialize)]
struct ChatAskResponse {
    note_id: String,
    question: String,
    answer: String,
}

/// Handle `cram chat`: a stdin REPL, or a single question with `--ask`.
pub async fn handle(
    args: &ChatArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let note = client.note(&args.note_id).await?;
    let mut session = ChatSession::open(client, &note).await;

    if let Some(question) = &args.ask {
        let answer = session.send(client, question).await?;
        return output(
            &ChatAskResponse {
                note_id: note.id,
                question: question.clone(),
                answer,
            },
            flags.format,
        );
    }

    println!(
        "Chatting about \"{}\". Type /quit to leave.",
        note.display_title()
    );
    println!("Try one of:");
    for suggestion in SUGGESTED_QUESTIONS {
        println!("  - {suggestion}");
    }
    println!();
    for message in session.messages() {
        print_message(message);
    }

    loop {
        let Some(line) = prompt_line("you> ")? else {
            break;
        };
        let text = line.trim();
        if text == "/quit" {
            break;
        }
        if text.is_empty() {
            continue;
        }

        match session.send(client, text).await {
            Ok(answer) => println!("cram> {answer}"),
            Err(error) => {
                // The transcript already carries the apology message.
                if let Some(last) = session.messages().last() {
                    println!("cram> {}", last.content);
                }
                tracing::warn!(%error, "question failed");
            }
        }
    }

    Ok(())
}

fn print_message(message: &ConversationMessage) {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "cram",
    };
    println!("{speaker}> {}", message.content);
}
