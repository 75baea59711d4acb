//! One complete export pass.

use crate::config::Config;
use crate::error::Result;
use crate::history;
use crate::publish::{self, SheetUploader};
use crate::render;
use crate::snapshot::Snapshot;

/// Run one snapshot → extract → render → publish pass.
///
/// The pass is a linear, blocking sequence: the snapshot is complete before
/// the database is opened, and the artifact is complete before the upload
/// starts. Nothing is retained between invocations, so the same call can be
/// driven by any timer and re-running it against an unchanged source produces
/// a byte-identical artifact.
///
/// On every exit path, success or failure, the snapshot directory is removed
/// (RAII) and the artifact file is gone (the publisher deletes it even when
/// the upload fails).
pub fn run(config: &Config, uploader: &dyn SheetUploader) -> Result<()> {
    let snapshot = Snapshot::create_in(&config.scratch_dir, &config.history_db)?;
    let records = history::read_history(snapshot.path())?;
    log::info!("read {} history rows", records.len());

    let artifact = render::render_artifact(&records);
    publish::publish(&artifact, config, uploader)
}
