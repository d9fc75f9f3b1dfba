//! File-backed student store.
//!
//! # Responsibility
//! - Own the live student collection and its JSON snapshot.
//! - Enforce validation and id uniqueness on every mutation.
//!
//! # Invariants
//! - Every mutation validates, mutates in memory, then persists the whole
//!   collection.
//! - A failed persist rolls the in-memory change back, so memory never holds
//!   a state the snapshot does not.
//! - `update` keeps the record in its original slot.
//! - Log lines carry counts and status only, never record contents.

use super::{StoreError, StoreResult, StudentRepository};
use crate::model::student::Student;
use crate::snapshot::{read_snapshot, write_snapshot};
use log::{info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Authoritative in-memory roster synchronized with one snapshot file.
#[derive(Debug)]
pub struct StudentStore {
    path: PathBuf,
    students: Vec<Student>,
}

impl StudentStore {
    /// Creates a store bound to `path` and loads whatever snapshot is there.
    ///
    /// Never fails: an absent or malformed snapshot yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            students: Vec::new(),
        };
        store.load();
        store
    }

    /// Snapshot file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }
}

impl StudentRepository for StudentStore {
    /// Replaces the collection with the snapshot contents.
    ///
    /// Missing, unreadable or malformed snapshots (bad JSON, invalid field,
    /// duplicate ids) reset the store to empty.
    fn load(&mut self) {
        let started_at = Instant::now();
        self.students = match read_snapshot(&self.path) {
            Ok(Some(students)) => match check_loaded(&students) {
                Ok(()) => {
                    info!(
                        "event=store_load module=store status=ok records={} duration_ms={}",
                        students.len(),
                        started_at.elapsed().as_millis()
                    );
                    students
                }
                Err(reason) => {
                    warn!(
                        "event=store_load module=store status=reset reason=invalid_record error={}",
                        reason
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("event=store_load module=store status=empty reason=missing_snapshot");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=reset reason=unreadable_snapshot error={}",
                    err
                );
                Vec::new()
            }
        };
    }

    fn save(&self) -> StoreResult<()> {
        write_snapshot(&self.path, &self.students)?;
        Ok(())
    }

    fn add(&mut self, student: Student) -> StoreResult<()> {
        student.validate()?;
        if self.position(&student.id).is_some() {
            return Err(StoreError::DuplicateId(student.id));
        }

        self.students.push(student);
        if let Err(err) = self.save() {
            self.students.pop();
            return Err(err);
        }

        info!(
            "event=student_add module=store status=ok records={}",
            self.students.len()
        );
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    fn update(&mut self, old_id: &str, student: Student) -> StoreResult<()> {
        student.validate()?;
        let slot = self
            .position(old_id)
            .ok_or_else(|| StoreError::NotFound(old_id.to_string()))?;
        if student.id != old_id && self.position(&student.id).is_some() {
            return Err(StoreError::DuplicateId(student.id));
        }

        let renamed = student.id != old_id;
        let previous = std::mem::replace(&mut self.students[slot], student);
        if let Err(err) = self.save() {
            self.students[slot] = previous;
            return Err(err);
        }

        info!("event=student_update module=store status=ok renamed={renamed}");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> StoreResult<Student> {
        let slot = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = self.students.remove(slot);
        if let Err(err) = self.save() {
            self.students.insert(slot, removed);
            return Err(err);
        }

        info!(
            "event=student_delete module=store status=ok records={}",
            self.students.len()
        );
        Ok(removed)
    }

    fn list_all(&self) -> Vec<Student> {
        self.students.clone()
    }
}

fn check_loaded(students: &[Student]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(students.len());
    for (index, student) in students.iter().enumerate() {
        student
            .validate()
            .map_err(|err| format!("record {index}: {err}"))?;
        if !seen.insert(student.id.as_str()) {
            return Err(format!("record {index}: duplicate id"));
        }
    }
    Ok(())
}
