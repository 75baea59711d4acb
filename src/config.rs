use std::env;
use std::path::PathBuf;

use crate::error::{ExportError, Result};

/// Configuration required to run one export pass.
/// Built once at process entry and passed by reference into the pipeline;
/// this decouples the logic from how the values were obtained (CLI/env).
#[derive(Clone)]
pub struct Config {
    /// The Chrome history database to export.
    pub history_db: PathBuf,
    /// Identifier of the target spreadsheet.
    pub sheet_id: String,
    /// Path to the credentials artifact for the upload client.
    pub credentials: PathBuf,
    /// Parent directory for the snapshot dir and the artifact file.
    pub scratch_dir: PathBuf,
}

impl Config {
    /// Resolve the process-wide configuration from the environment.
    ///
    /// `SHEET` names the target spreadsheet, `CREDENTIALS` points at the
    /// credentials artifact. Both must be set before the scheduler starts.
    pub fn from_env(history_db: PathBuf) -> Result<Self> {
        let sheet_id = env::var("SHEET")
            .map_err(|_| ExportError::config("SHEET environment variable is not set"))?;
        let credentials = env::var("CREDENTIALS")
            .map_err(|_| ExportError::config("CREDENTIALS environment variable is not set"))?;
        Ok(Self {
            history_db,
            sheet_id,
            credentials: PathBuf::from(credentials),
            scratch_dir: env::temp_dir(),
        })
    }
}

/// The platforms Chrome ships a well-known history location for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Unsupported,
}

impl Platform {
    pub fn current() -> Self {
        match env::consts::OS {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Unsupported,
        }
    }
}

/// Map a platform to the default Chrome profile's history database path.
/// `None` means the platform has no known location and the caller must ask
/// the user for an explicit path.
pub fn default_history_path(platform: Platform) -> Option<PathBuf> {
    match platform {
        Platform::MacOs => dirs::home_dir()
            .map(|d| d.join("Library/Application Support/Google/Chrome/Default/History")),
        Platform::Linux => dirs::config_dir().map(|d| d.join("google-chrome/Default/History")),
        Platform::Windows => {
            dirs::data_local_dir().map(|d| d.join("Google/Chrome/User Data/Default/History"))
        }
        Platform::Unsupported => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_has_no_default() {
        assert_eq!(default_history_path(Platform::Unsupported), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_default_points_into_config_dir() {
        let path = default_history_path(Platform::Linux).unwrap();
        assert!(path.ends_with("google-chrome/Default/History"));
    }
}
