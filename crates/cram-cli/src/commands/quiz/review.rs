use cram_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(
    question_id: &str,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let graded = client.graded_question(question_id).await?;
    output(&graded, flags.format)
}
