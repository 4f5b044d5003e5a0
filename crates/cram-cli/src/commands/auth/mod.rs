mod login;
mod logout;
mod register;
mod status;

use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `cram auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    client: &mut ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, client, flags).await,
        AuthCommands::Register(args) => register::handle(args, client, flags).await,
        AuthCommands::Logout => logout::handle(client, flags).await,
        AuthCommands::Status => status::handle(client, flags).await,
    }
}
