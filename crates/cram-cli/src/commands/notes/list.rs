use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notes = client.notes().await?;
    output(&notes, flags.format)
}
