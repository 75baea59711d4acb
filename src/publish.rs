//! Handing the artifact to the remote sheet and cleaning up after.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::error::{ExportError, Result};

/// Fixed name of the local artifact file within the scratch directory.
pub const ARTIFACT_FILE_NAME: &str = "history.csv";

/// The remote spreadsheet collaborator: replaces the sheet's entire contents
/// with the given CSV text. Implementations own transport and auth; the
/// pipeline only cares that the overwrite either happened or didn't.
pub trait SheetUploader {
    fn replace(
        &self,
        sheet_id: &str,
        csv: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Write the artifact to its fixed-name file, hand the contents to the
/// uploader, then delete the file.
///
/// The delete happens whether or not the upload succeeded; a failed upload
/// must not leave the artifact behind for the next run to trip over.
pub fn publish(artifact: &str, config: &Config, uploader: &dyn SheetUploader) -> Result<()> {
    let path = config.scratch_dir.join(ARTIFACT_FILE_NAME);
    fs::write(&path, artifact)?;

    log::info!("updating history sheet {}", config.sheet_id);
    let content = fs::read_to_string(&path);
    let outcome = match content {
        Ok(content) => uploader
            .replace(&config.sheet_id, &content)
            .map_err(|source| ExportError::PublishFailed { source }),
        Err(e) => Err(ExportError::Io(e)),
    };

    if let Err(e) = fs::remove_file(&path) {
        log::warn!("could not remove artifact {}: {}", path.display(), e);
    }
    outcome
}

#[derive(Deserialize)]
struct Credentials {
    /// Bearer token for the Sheets/Drive API. Obtaining and refreshing it is
    /// the job of whatever wrote the credentials file, not this tool.
    token: String,
}

/// Uploader backed by the Google Drive media-upload endpoint, which converts
/// the CSV in place and overwrites the whole spreadsheet.
#[derive(Debug)]
pub struct SheetsClient {
    client: reqwest::blocking::Client,
    token: String,
}

impl SheetsClient {
    pub fn from_credentials(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ExportError::config(format!("failed to read credentials {}: {}", path.display(), e))
        })?;
        let credentials: Credentials = serde_json::from_str(&raw).map_err(|e| {
            ExportError::config(format!("failed to parse credentials {}: {}", path.display(), e))
        })?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            token: credentials.token,
        })
    }
}

impl SheetUploader for SheetsClient {
    fn replace(
        &self,
        sheet_id: &str,
        csv: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "https://www.googleapis.com/upload/drive/v3/files/{sheet_id}?uploadType=media"
        );
        self.client
            .patch(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "text/csv")
            .body(csv.to_string())
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
