use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    client: &mut ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, client, flags).await,
        Commands::Notes { action } => commands::notes::handle(&action, client, flags).await,
        Commands::Chat(args) => commands::chat::handle(&args, client, flags).await,
        Commands::Quiz { action } => commands::quiz::handle(&action, client, flags).await,
    }
}
