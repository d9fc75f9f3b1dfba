//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, search, sort and stats into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod roster_service;
