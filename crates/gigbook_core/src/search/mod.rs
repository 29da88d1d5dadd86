//! Query-side projections over the event graph.
//!
//! # Responsibility
//! - Keep read-model derivation logic apart from persistence code.
//!
//! # Invariants
//! - Projections never mutate the records they are derived from.

pub mod filter;
