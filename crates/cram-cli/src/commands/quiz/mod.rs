mod review;
mod take;

use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;

/// Handle `cram quiz <subcommand>`.
pub async fn handle(
    action: &QuizCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuizCommands::Take(args) => take::handle(args, client, flags).await,
        QuizCommands::Review { question_id } => review::handle(question_id, client, flags).await,
    }
}
