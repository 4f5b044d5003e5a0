use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(id: &str, client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let note = client.note(id).await?;
    output(&note, flags.format)
}
