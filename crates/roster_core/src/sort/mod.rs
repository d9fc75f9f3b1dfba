//! Ordering of student collections.
//!
//! # Responsibility
//! - Provide five classic sorting algorithms behind one signature.
//! - Map an algorithm choice plus a sort field onto record collections.
//!
//! # Invariants
//! - Sorting never mutates its input; a new `Vec` is returned.
//! - Bubble, insertion and merge sort are stable.

pub mod algorithms;

use crate::model::student::{Student, StudentField};
use crate::model::ParseKindError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use algorithms::{bubble_sort, insertion_sort, merge_sort, selection_sort, shell_sort};

/// Selectable sorting algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    #[default]
    Merge,
    Shell,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Shell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Shell => "shell",
        }
    }

    /// Whether equal keys keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion | Self::Merge)
    }

    /// Returns `students` ordered ascending by `field`.
    pub fn sort(self, students: &[Student], field: StudentField) -> Vec<Student> {
        self.sort_by(students, |left, right| left.compare_by(right, field))
    }

    /// Runs this algorithm over any cloneable items with a custom comparator.
    pub fn sort_by<T, F>(self, items: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> std::cmp::Ordering,
    {
        match self {
            Self::Bubble => bubble_sort(items, compare),
            Self::Insertion => insertion_sort(items, compare),
            Self::Selection => selection_sort(items, compare),
            Self::Merge => merge_sort(items, compare),
            Self::Shell => shell_sort(items, compare),
        }
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ParseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "insertion" => Ok(Self::Insertion),
            "selection" => Ok(Self::Selection),
            "merge" => Ok(Self::Merge),
            "shell" => Ok(Self::Shell),
            _ => Err(ParseKindError::new(
                "sort algorithm",
                value,
                "bubble|insertion|selection|merge|shell",
            )),
        }
    }
}
