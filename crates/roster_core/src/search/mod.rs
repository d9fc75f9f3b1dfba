//! In-memory search over student snapshots.
//!
//! # Responsibility
//! - Parse raw search box input into typed queries.
//! - Provide interchangeable search strategies behind one signature.
//!
//! # Invariants
//! - Matches keep the relative order of the input collection.
//! - Every hit carries the index of the record in the searched slice.

pub mod query;
pub mod strategy;

pub use query::SearchQuery;
pub use strategy::{
    binary_search, linear_search, sequential_search, SearchFn, SearchHit, SearchStrategy,
};
