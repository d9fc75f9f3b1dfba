//! Persisted snapshot file access.
//!
//! # Responsibility
//! - Read the JSON snapshot of the roster from disk.
//! - Replace snapshot (and export) files atomically.
//!
//! # Invariants
//! - A write either fully replaces the target file or leaves it untouched.
//! - Only the store writes the snapshot file.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;

pub use file::{read_snapshot, write_snapshot, write_text_atomically};

/// Default snapshot file name used by collaborators.
pub const DEFAULT_SNAPSHOT_FILE: &str = "students_db.json";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Temp file could not be renamed over the target.
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "snapshot i/o failed for `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "malformed snapshot `{}`: {source}", path.display())
            }
            Self::Persist { path, source } => {
                write!(f, "failed to replace `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Persist { source, .. } => Some(source),
        }
    }
}
