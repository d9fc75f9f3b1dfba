//! Derived roster statistics.
//!
//! # Invariants
//! - Computed on demand from a snapshot; nothing is cached.
//! - The mean of an empty roster is `0.00`, never a division error.

use crate::model::student::{Gpa, Student};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view of a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    /// Mean GPA rounded half-up to two decimals.
    pub mean_gpa: Gpa,
    /// Record count per major.
    pub by_major: BTreeMap<String, usize>,
}

pub fn compute_stats(students: &[Student]) -> RosterStats {
    let mut by_major = BTreeMap::new();
    for student in students {
        *by_major.entry(student.major.clone()).or_insert(0) += 1;
    }

    let hundredths = students
        .iter()
        .map(|student| u64::from(student.gpa.hundredths()));

    RosterStats {
        total: students.len(),
        mean_gpa: mean_gpa(hundredths.sum(), students.len()),
        by_major,
    }
}

fn mean_gpa(total_hundredths: u64, count: usize) -> Gpa {
    if count == 0 {
        return Gpa::ZERO;
    }
    let count = count as u64;
    let rounded = (total_hundredths * 2 + count) / (count * 2);
    // A mean of values in 0..=400 stays in 0..=400.
    Gpa::from_hundredths(rounded as u16).unwrap_or(Gpa::MAX)
}
