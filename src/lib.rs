//! # chrome-history-export
//!
//! A small daemon-style CLI that uploads your [Google Chrome](https://www.google.com/chrome/)
//! browsing history to a Google Sheet.
//!
//! ## What it does
//!
//! Chrome keeps its history in a SQLite database (`History`) that the running
//! browser holds open and writes to. On every pass this tool copies that file
//! into a private temporary directory, reads the `urls` table from the copy,
//! sanitizes each title for safe embedding in a comma-delimited artifact, and
//! replaces the entire contents of the target sheet with the result.
//!
//! The original database is only ever read, never locked or modified beyond
//! the duration of a plain file copy.
//!
//! ## Scheduling
//!
//! The binary runs one export immediately (failures there are fatal), then
//! repeats on a fixed hourly interval for as long as the process lives. Each
//! pass is a complete, independent export; nothing is carried over between
//! runs, so a failed pass is simply retried by the next tick.
//!
//! ## Usage
//!
//! ```sh
//! # Export the default Chrome profile's history
//! SHEET=<spreadsheet-id> CREDENTIALS=creds.json chrome-history-export
//!
//! # Point at a specific history file
//! SHEET=<spreadsheet-id> CREDENTIALS=creds.json chrome-history-export /path/to/History
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod pipeline;
pub mod publish;
pub mod render;
pub mod sanitize;
pub mod snapshot;

pub use config::Config;
pub use error::{ExportError, Result};
