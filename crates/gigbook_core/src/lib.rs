//! Core domain logic for the gigbook event catalog.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::band::{Band, BandId};
pub use model::event::{BandDraft, Event, EventDraft, EventId};
pub use model::member::{Member, MemberId};
pub use repo::band_repo::{BandRepository, SqliteBandRepository};
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::member_repo::{MemberRepository, SqliteMemberRepository};
pub use repo::{RepoError, RepoResult};
pub use search::filter::filter_events;
pub use service::catalog::EventCatalog;
pub use service::event_service::EventService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
