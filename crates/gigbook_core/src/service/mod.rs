//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep callers decoupled from SQLite details behind [`catalog::EventCatalog`].

pub mod catalog;
pub mod event_service;
