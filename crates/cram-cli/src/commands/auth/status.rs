use cram_api::ApiClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    token_source: Option<String>,
    note: Option<String>,
}

pub async fn handle(client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = client.session();
    let status = if session.is_authenticated() {
        AuthStatusResponse {
            authenticated: true,
            token_source: session.source().map(|source| source.as_str().to_string()),
            note: None,
        }
    } else {
        AuthStatusResponse {
            authenticated: false,
            token_source: None,
            note: Some("no stored token found — run `cram auth login`".into()),
        }
    };

    output(&status, flags.format)
}
