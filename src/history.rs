//! Reading the `urls` table out of a history snapshot.
//!
//! Chrome's schema (the part this tool relies on):
//! ```sql
//! CREATE TABLE urls (
//!     id    INTEGER PRIMARY KEY,
//!     url   LONGVARCHAR,
//!     title LONGVARCHAR,
//!     ...
//! );
//! ```
//! Rows come back in whatever order SQLite scans them; the artifact makes no
//! ordering promise, so the query carries no ORDER BY.

use std::path::Path;

use rusqlite::{Connection, ErrorCode, OpenFlags};
use url::Url;

use crate::error::{ExportError, Result};

/// One visited page: the address and the page title Chrome recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub address: Url,
    /// May be empty; such records are excluded from the artifact.
    pub title: String,
}

/// Read all (address, title) pairs from the snapshot at `path`.
///
/// The snapshot is opened read-only. A file that is not a SQLite database
/// surfaces as [`ExportError::CorruptSnapshot`]; a database without the
/// expected table or columns surfaces as [`ExportError::QueryFailed`].
pub fn read_history(path: &Path) -> Result<Vec<HistoryRecord>> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| classify(path, e))?;

    let mut stmt = conn
        .prepare("SELECT url, title FROM urls")
        .map_err(|e| classify(path, e))?;
    let mut rows = stmt.query([]).map_err(|e| classify(path, e))?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|e| classify(path, e))? {
        let raw_address: String = row.get(0).map_err(|e| classify(path, e))?;
        let title: String = row.get(1).map_err(|e| classify(path, e))?;
        match Url::parse(&raw_address) {
            Ok(address) => records.push(HistoryRecord { address, title }),
            // The urls table only holds resolvable addresses; anything else
            // cannot be reduced to scheme + host, so it is left out.
            Err(e) => log::warn!("skipping malformed address {:?}: {}", raw_address, e),
        }
    }
    Ok(records)
}

fn classify(path: &Path, e: rusqlite::Error) -> ExportError {
    let not_a_database = matches!(
        &e,
        rusqlite::Error::SqliteFailure(failure, _)
            if matches!(failure.code, ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt)
    );
    if not_a_database {
        ExportError::CorruptSnapshot {
            path: path.to_path_buf(),
            source: e,
        }
    } else {
        ExportError::QueryFailed { source: e }
    }
}
