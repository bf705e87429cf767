//! Media library commands.
//!
//! Uploads are read from the local filesystem and stored inline as
//! base64 data URIs, subject to the 5 MiB intake limit.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use portico_cms::models::MediaUpload;
use portico_core::MediaId;
use tracing::info;

use super::{CliError, open_content, open_content_gated};

#[derive(Subcommand)]
pub enum MediaAction {
    /// List media items as JSON (without payloads)
    List,
    /// Upload a file into the media library
    Add {
        /// Path to the file to upload
        path: PathBuf,

        /// Stored name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// MIME type (defaults to a guess from the file extension)
        #[arg(short, long)]
        content_type: Option<String>,
    },
    /// Remove a media item
    Remove {
        /// Media id
        id: i64,
    },
}

pub fn run(action: MediaAction) -> Result<(), CliError> {
    match action {
        MediaAction::List => list(),
        MediaAction::Add {
            path,
            name,
            content_type,
        } => add(&path, name, content_type),
        MediaAction::Remove { id } => remove(MediaId::new(id)),
    }
}

fn list() -> Result<(), CliError> {
    let store = open_content()?;
    for item in store.media() {
        info!(
            "{}  {}  {}  {} bytes  uploaded {}",
            item.id, item.name, item.content_type, item.size, item.uploaded_at
        );
    }
    if store.media().is_empty() {
        info!("No media items");
    }
    Ok(())
}

fn add(path: &Path, name: Option<String>, content_type: Option<String>) -> Result<(), CliError> {
    let bytes = std::fs::read(path)?;
    let name = name.unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned())
    });
    let content_type = content_type.unwrap_or_else(|| guess_content_type(path).to_owned());

    let mut store = open_content_gated()?;
    let id = store.add_media(MediaUpload {
        name,
        content_type,
        bytes,
    })?;
    info!("Added media {id}");
    Ok(())
}

fn remove(id: MediaId) -> Result<(), CliError> {
    let mut store = open_content_gated()?;
    store.remove_media(id)?;
    info!("Removed media {id}");
    Ok(())
}

/// Guess a MIME type from the file extension.
fn guess_content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
