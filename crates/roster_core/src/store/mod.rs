//! Store layer contracts and the file-backed implementation.
//!
//! # Responsibility
//! - Define the CRUD contract over the authoritative student collection.
//! - Isolate snapshot file details from service orchestration.
//!
//! # Invariants
//! - Write paths must call `Student::validate()` before mutating.
//! - Student numbers are unique across the live collection.
//! - Store APIs return semantic errors (`DuplicateId`, `NotFound`) in
//!   addition to persistence errors.

use crate::model::student::{Student, ValidationError};
use crate::snapshot::SnapshotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod student_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for store mutations and persistence.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    DuplicateId(String),
    NotFound(String),
    Persistence(SnapshotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "student id already exists: {id}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SnapshotError> for StoreError {
    fn from(value: SnapshotError) -> Self {
        Self::Persistence(value)
    }
}

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    fn load(&mut self);
    fn save(&self) -> StoreResult<()>;
    fn add(&mut self, student: Student) -> StoreResult<()>;
    fn find_by_id(&self, id: &str) -> Option<&Student>;
    fn update(&mut self, old_id: &str, student: Student) -> StoreResult<()>;
    fn delete(&mut self, id: &str) -> StoreResult<Student>;
    fn list_all(&self) -> Vec<Student>;
}
