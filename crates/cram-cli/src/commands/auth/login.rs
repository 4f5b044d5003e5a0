use cram_api::ApiClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::prompt::prompt_required;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: String,
    name: Option<String>,
    token_source: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    client: &mut ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let email = match &args.email {
        Some(email) => email.clone(),
        None => prompt_required("email")?,
    };
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_required("password")?,
    };

    let user = client.login(&email, &password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id,
            email: user.email,
            name: user.name,
            token_source: client
                .session()
                .source()
                .map(|source| source.as_str().to_string()),
        },
        flags.format,
    )
}
