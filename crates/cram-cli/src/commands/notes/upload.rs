use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use cram_api::ApiClient;
use cram_core::entities::Note;
use cram_core::errors::ValidationError;
use cram_core::validate::mime_for_extension;
use cram_flows::UploadFlow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::notes::NotesUploadArgs;
use crate::output::output;
use crate::progress::Progress;

const TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Serialize)]
struct NoteUploadResponse {
    note: Note,
    total_notes: Option<usize>,
}

pub async fn handle(
    args: &NotesUploadArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = Path::new(&args.file);
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid file path '{}'", args.file))?;
    let mime = mime_for_extension(filename).ok_or_else(|| ValidationError::UnknownExtension {
        filename: filename.to_string(),
    })?;
    let size = std::fs::metadata(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?
        .len();

    // Validate before touching file contents or the network.
    let mut flow = UploadFlow::new();
    flow.begin(size, mime)?;

    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))?;
    let note = drive_upload(&mut flow, client, filename, mime, bytes).await?;

    let total_notes = match client.notes().await {
        Ok(notes) => Some(notes.len()),
        Err(error) => {
            tracing::warn!(%error, "note list refresh after upload failed");
            None
        }
    };

    output(&NoteUploadResponse { note, total_notes }, flags.format)
}

/// Run the upload while a fixed-interval ticker advances the simulated
/// percentage bar; the bar only hits 100 once the request succeeds.
async fn drive_upload(
    flow: &mut UploadFlow,
    client: &ApiClient,
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> anyhow::Result<Note> {
    let bar = Progress::percent_bar(filename);
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    let upload = client.upload_note(filename, mime, bytes);
    tokio::pin!(upload);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                bar.set_position(u64::from(flow.tick()));
            }
            result = &mut upload => {
                match result {
                    Ok(note) => {
                        flow.complete()?;
                        bar.set_position(u64::from(flow.percent()));
                        bar.finish_ok("processed");
                        return Ok(note);
                    }
                    Err(error) => {
                        flow.fail()?;
                        bar.finish_err("failed");
                        return Err(error.into());
                    }
                }
            }
        }
    }
}
