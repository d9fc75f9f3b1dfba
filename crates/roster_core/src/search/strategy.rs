//! Search strategies over a student slice.
//!
//! # Responsibility
//! - Implement linear, sequential and binary lookup with one shared
//!   function signature.
//! - Select a strategy by enum value instead of trait objects.
//!
//! # Invariants
//! - Linear and sequential scans return hits in input order.
//! - Binary search assumes input sorted ascending by `id` and returns at
//!   most one hit.
//! - Field-qualified binary queries on anything but `id` return no hits.

use super::query::SearchQuery;
use crate::model::student::{Student, StudentField};
use crate::model::ParseKindError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Shared signature of every search strategy.
pub type SearchFn = fn(&[Student], &SearchQuery) -> Vec<SearchHit>;

/// One match: the record and its position in the searched slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub student: Student,
}

impl SearchHit {
    fn new(index: usize, student: &Student) -> Self {
        Self {
            index,
            student: student.clone(),
        }
    }
}

/// Selectable search algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    #[default]
    Linear,
    Sequential,
    Binary,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Linear,
        SearchStrategy::Sequential,
        SearchStrategy::Binary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sequential => "sequential",
            Self::Binary => "binary",
        }
    }

    /// Function implementing this strategy.
    pub fn search_fn(self) -> SearchFn {
        match self {
            Self::Linear => linear_search,
            Self::Sequential => sequential_search,
            Self::Binary => binary_search,
        }
    }

    /// Whether the input must be sorted ascending by `id` first.
    pub fn requires_id_order(self) -> bool {
        matches!(self, Self::Binary)
    }

    pub fn search(self, students: &[Student], query: &SearchQuery) -> Vec<SearchHit> {
        (self.search_fn())(students, query)
    }
}

impl Display for SearchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = ParseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "sequential" => Ok(Self::Sequential),
            "binary" => Ok(Self::Binary),
            _ => Err(ParseKindError::new(
                "search strategy",
                value,
                "linear|sequential|binary",
            )),
        }
    }
}

/// Single O(n) scan.
///
/// Text queries match a case-insensitive substring of `name` or the exact
/// `id`; field queries match a case-insensitive substring of that field.
pub fn linear_search(students: &[Student], query: &SearchQuery) -> Vec<SearchHit> {
    match query {
        SearchQuery::Text(text) => {
            let needle = text.to_lowercase();
            scan(students, |student| {
                student.name.to_lowercase().contains(&needle) || student.id == *text
            })
        }
        SearchQuery::Field { field, value } => field_substring_scan(students, *field, value),
    }
}

/// Field-substring scan for field queries; text queries go to
/// [`linear_search`].
pub fn sequential_search(students: &[Student], query: &SearchQuery) -> Vec<SearchHit> {
    match query {
        SearchQuery::Field { field, value } => field_substring_scan(students, *field, value),
        SearchQuery::Text(_) => linear_search(students, query),
    }
}

/// Exact `id` lookup over a slice sorted ascending by `id`.
///
/// Ids are fixed-width digit strings, so string order equals numeric order.
pub fn binary_search(students: &[Student], query: &SearchQuery) -> Vec<SearchHit> {
    let target = match query {
        SearchQuery::Text(text) => text.as_str(),
        SearchQuery::Field {
            field: StudentField::Id,
            value,
        } => value.as_str(),
        SearchQuery::Field { .. } => return Vec::new(),
    };

    match students.binary_search_by(|student| student.id.as_str().cmp(target)) {
        Ok(index) => vec![SearchHit::new(index, &students[index])],
        Err(_) => Vec::new(),
    }
}

fn field_substring_scan(students: &[Student], field: StudentField, value: &str) -> Vec<SearchHit> {
    let needle = value.to_lowercase();
    scan(students, |student| {
        student.field_text(field).to_lowercase().contains(&needle)
    })
}

fn scan(students: &[Student], mut is_match: impl FnMut(&Student) -> bool) -> Vec<SearchHit> {
    students
        .iter()
        .enumerate()
        .filter(|&(_, student)| is_match(student))
        .map(|(index, student)| SearchHit::new(index, student))
        .collect()
}
