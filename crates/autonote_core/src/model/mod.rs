//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, search and CLI.
//!
//! # Invariants
//! - Every note owns a tag list (possibly empty) and a creation
//!   timestamp assigned exactly once at construction.

pub mod note;
