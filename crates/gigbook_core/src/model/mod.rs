//! Domain model for the event/band/member graph.
//!
//! # Responsibility
//! - Define the canonical records shared by persistence and projection code.
//! - Keep natural-key (name) semantics explicit for bands and members.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid`.
//! - Band and member names are unique within their stores; records are
//!   shared by name across the whole graph, never copied per event.

pub mod band;
pub mod event;
pub mod member;
