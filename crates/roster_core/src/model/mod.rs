//! Domain model for the student roster.
//!
//! # Responsibility
//! - Define the record shape shared by store, search, sort and export.
//! - Keep field validation pure so UI layers can reuse it.
//!
//! # Invariants
//! - Every record is identified by its 12-digit student number.
//! - Deletion is a hard delete; there are no tombstones.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod student;

/// Error for parsing a name (field, strategy, algorithm) from user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// What was being parsed, e.g. `field` or `sort algorithm`.
    pub kind: &'static str,
    pub value: String,
    /// Accepted spellings, `|`-separated.
    pub expected: &'static str,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.trim().to_string(),
            expected,
        }
    }
}

impl Display for ParseKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown {} `{}`; expected {}",
            self.kind, self.value, self.expected
        )
    }
}

impl Error for ParseKindError {}
