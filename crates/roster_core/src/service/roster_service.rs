//! Roster use-case service.
//!
//! # Responsibility
//! - Expose the query interface UIs call: search, sort, stats, export.
//! - Pass CRUD calls through to the repository unchanged.
//!
//! # Invariants
//! - Query APIs work on snapshots and never touch the store's records.
//! - Binary search always runs over an id-sorted snapshot.
//! - Service layer remains storage-agnostic.

use crate::export;
use crate::model::student::{Student, StudentField};
use crate::search::{SearchHit, SearchQuery, SearchStrategy};
use crate::snapshot::SnapshotResult;
use crate::sort::SortAlgorithm;
use crate::stats::{compute_stats, RosterStats};
use crate::store::{StoreResult, StudentRepository};
use log::debug;
use std::io::{self, Write};
use std::path::Path;

/// Use-case service wrapper over a student repository.
pub struct RosterService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Consumes the service and returns the repository.
    pub fn into_repository(self) -> R {
        self.repo
    }

    pub fn add_student(&mut self, student: Student) -> StoreResult<()> {
        self.repo.add(student)
    }

    /// Replaces the record currently keyed by `old_id`.
    ///
    /// Returns repository-level not-found, duplicate or validation errors
    /// unchanged.
    pub fn update_student(&mut self, old_id: &str, student: Student) -> StoreResult<()> {
        self.repo.update(old_id, student)
    }

    pub fn delete_student(&mut self, id: &str) -> StoreResult<Student> {
        self.repo.delete(id)
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.repo.find_by_id(id)
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.repo.list_all()
    }

    /// Runs `strategy` over a snapshot of the roster.
    ///
    /// # Contract
    /// - Linear/sequential hits index into the roster in store order.
    /// - Binary search first merge-sorts the snapshot by `id`; its hit
    ///   indexes into that sorted view.
    pub fn search(&self, strategy: SearchStrategy, query: &SearchQuery) -> Vec<SearchHit> {
        let mut students = self.repo.list_all();
        if strategy.requires_id_order() {
            students = SortAlgorithm::Merge.sort(&students, StudentField::Id);
        }
        let hits = strategy.search(&students, query);
        debug!(
            "event=roster_search module=service strategy={} scanned={} hits={}",
            strategy,
            students.len(),
            hits.len()
        );
        hits
    }

    /// Parses search box input (`text` or `field:value`) and searches.
    pub fn search_raw(&self, strategy: SearchStrategy, raw: &str) -> Vec<SearchHit> {
        self.search(strategy, &SearchQuery::parse(raw))
    }

    /// Returns a snapshot ordered ascending by `field`.
    pub fn sort(&self, algorithm: SortAlgorithm, field: StudentField) -> Vec<Student> {
        algorithm.sort(&self.repo.list_all(), field)
    }

    pub fn stats(&self) -> RosterStats {
        compute_stats(&self.repo.list_all())
    }

    /// Writes `students` (the caller's displayed view) as CSV.
    pub fn export_csv<W: Write>(&self, writer: W, students: &[Student]) -> io::Result<()> {
        export::write_csv(writer, students)
    }

    /// Writes `students` (the caller's displayed view) to a CSV file.
    pub fn export_csv_file(&self, path: &Path, students: &[Student]) -> SnapshotResult<()> {
        export::export_csv_file(path, students)
    }
}
