//! Export of the current result and the social share link.
//!
//! Exporting sits behind `ViewExporter` so a richer renderer can replace the
//! plain-text snapshot without touching the session.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::view::{render_assignment, Session};

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";
const SNAPSHOT_FILE_NAME: &str = "anime-character.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to share yet, assign a character first")]
    NothingToExport,

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Saves the rendered result somewhere the user can pick it up.
pub trait ViewExporter {
    fn export(&self, rendered: &str) -> Result<PathBuf, ExportError>;
}

/// Writes the rendered card to `anime-character.txt` in a directory.
pub struct TextSnapshotExporter {
    dir: PathBuf,
}

impl TextSnapshotExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ViewExporter for TextSnapshotExporter {
    fn export(&self, rendered: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(SNAPSHOT_FILE_NAME);
        fs::write(&path, rendered)?;
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareOutcome {
    pub snapshot: PathBuf,
    pub share_url: String,
}

/// Pre-filled compose link for the assigned character.
pub fn share_url(character_name: &str) -> String {
    let text = format!("Check out my anime character: {character_name}!\n\n#Anime #LeetCode");
    match Url::parse_with_params(TWEET_INTENT_URL, &[("text", text)]) {
        Ok(url) => url.into(),
        // the intent URL is a constant, so this arm is unreachable in practice
        Err(_) => TWEET_INTENT_URL.to_string(),
    }
}

/// Exports the displayed result and builds its share link. Only valid after a
/// successful submit.
pub fn share_current(
    session: &Session<'_>,
    exporter: &dyn ViewExporter,
) -> Result<ShareOutcome, ExportError> {
    let assignment = session.assignment().ok_or(ExportError::NothingToExport)?;
    let snapshot = exporter.export(&render_assignment(assignment))?;

    Ok(ShareOutcome {
        snapshot,
        share_url: share_url(&assignment.result.name),
    })
}
