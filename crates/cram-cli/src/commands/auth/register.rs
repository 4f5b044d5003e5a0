use cram_api::ApiClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::commands::shared::prompt::prompt_required;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    authenticated: bool,
    user_id: String,
    email: String,
    name: Option<String>,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    client: &mut ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_required("name")?,
    };
    let email = match &args.email {
        Some(email) => email.clone(),
        None => prompt_required("email")?,
    };
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_required("password")?,
    };

    let user = client.register(&name, &email, &password).await?;

    output(
        &AuthRegisterResponse {
            authenticated: true,
            user_id: user.id,
            email: user.email,
            name: user.name,
        },
        flags.format,
    )
}
