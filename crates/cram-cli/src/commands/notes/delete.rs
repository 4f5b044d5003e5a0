use cram_api::ApiClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct NoteDeleteResponse {
    deleted: bool,
    id: String,
}

pub async fn handle(id: &str, client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    client.delete_note(id).await?;
    output(
        &NoteDeleteResponse {
            deleted: true,
            id: id.to_string(),
        },
        flags.format,
    )
}
