//! Snapshot file read/write helpers.
//!
//! # Responsibility
//! - Decode the snapshot file into records.
//! - Write text through a same-directory temp file and rename it into place.
//!
//! # Invariants
//! - A missing file is reported as `Ok(None)`, not as an error.
//! - Temp files live next to the target so the final rename stays atomic.

use super::{SnapshotError, SnapshotResult};
use crate::model::student::Student;
use log::{error, info};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Reads and decodes the snapshot at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Records are decoded but
/// not validated; that is the store's job.
pub fn read_snapshot(path: &Path) -> SnapshotResult<Option<Vec<Student>>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let students = serde_json::from_str(&text).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(students))
}

/// Serializes `students` as pretty JSON and atomically replaces `path`.
///
/// # Side effects
/// - Emits `snapshot_write` logging events with duration and status.
pub fn write_snapshot(path: &Path, students: &[Student]) -> SnapshotResult<()> {
    let started_at = Instant::now();
    info!(
        "event=snapshot_write module=snapshot status=start records={}",
        students.len()
    );

    let result = serde_json::to_string_pretty(students)
        .map_err(|source| SnapshotError::Json {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|mut text| {
            text.push('\n');
            write_text_atomically(path, &text)
        });

    match &result {
        Ok(()) => info!(
            "event=snapshot_write module=snapshot status=ok records={} duration_ms={}",
            students.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=snapshot_write module=snapshot status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Writes `text` to a temp file beside `path`, syncs it, then renames it
/// over `path`.
///
/// Creates the parent directory when missing.
pub fn write_text_atomically(path: &Path, text: &str) -> SnapshotResult<()> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let io_error = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(&parent).map_err(io_error)?;
    let mut tmp = NamedTempFile::new_in(&parent).map_err(io_error)?;
    tmp.write_all(text.as_bytes()).map_err(io_error)?;
    tmp.flush().map_err(io_error)?;
    tmp.as_file().sync_all().map_err(io_error)?;
    tmp.persist(path).map_err(|err| SnapshotError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
