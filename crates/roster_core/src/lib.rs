//! Core record management engine for the student roster.
//! This crate is the single source of truth for roster invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod snapshot;
pub mod sort;
pub mod stats;
pub mod store;

pub use export::{export_csv_file, render_csv, write_csv};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::student::{
    validate_gpa, validate_id, validate_name, Gpa, Student, StudentField, ValidationError,
    ValidationReason,
};
pub use model::ParseKindError;
pub use search::{SearchHit, SearchQuery, SearchStrategy};
pub use service::roster_service::RosterService;
pub use snapshot::{SnapshotError, SnapshotResult, DEFAULT_SNAPSHOT_FILE};
pub use sort::SortAlgorithm;
pub use stats::{compute_stats, RosterStats};
pub use store::student_store::StudentStore;
pub use store::{StoreError, StoreResult, StudentRepository};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
