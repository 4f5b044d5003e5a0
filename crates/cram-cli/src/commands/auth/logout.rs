use cram_api::ApiClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub async fn handle(client: &mut ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    client.logout()?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
