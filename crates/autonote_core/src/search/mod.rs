//! Keyword search and ordering over note collections.
//!
//! # Responsibility
//! - Expose pure match/sort functions used by the store's read APIs.
//!
//! # Invariants
//! - Search never mutates the collection.
//! - Result ordering is deterministic for a fixed input.

pub mod filter;
