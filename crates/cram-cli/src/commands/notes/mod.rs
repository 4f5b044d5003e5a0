mod delete;
mod get;
mod list;
mod upload;

use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotesCommands;

/// Handle `cram notes <subcommand>`.
pub async fn handle(
    action: &NotesCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotesCommands::List => list::handle(client, flags).await,
        NotesCommands::Get { id } => get::handle(id, client, flags).await,
        NotesCommands::Upload(args) => upload::handle(args, client, flags).await,
        NotesCommands::Delete { id } => delete::handle(id, client, flags).await,
    }
}
