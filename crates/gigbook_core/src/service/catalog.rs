//! SQLite-backed catalog facade over the event use-cases.
//!
//! # Responsibility
//! - Own one migrated connection and expose the external operation surface:
//!   list, filter, create, update, delete.
//! - Wrap every write in a single all-or-nothing transaction.
//!
//! # Invariants
//! - Update and delete are atomic: scalar changes, band/member resolution,
//!   and link replacement commit together or not at all.
//! - A failed unit of work leaves prior state intact; no retries.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::model::event::{Event, EventDraft, EventId};
use crate::repo::band_repo::SqliteBandRepository;
use crate::repo::event_repo::SqliteEventRepository;
use crate::repo::member_repo::SqliteMemberRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::event_service::EventService;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

type SqliteEventService<'conn> = EventService<
    SqliteEventRepository<'conn>,
    SqliteBandRepository<'conn>,
    SqliteMemberRepository<'conn>,
>;

/// Catalog facade owning a migrated SQLite connection.
pub struct EventCatalog {
    conn: Connection,
}

impl EventCatalog {
    /// Opens a file-backed catalog, applying pending migrations.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an in-memory catalog, mainly for tests and probes.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Lists all events with their band/member graphs.
    pub fn events(&self) -> RepoResult<Vec<Event>> {
        service(&self.conn).get_events()
    }

    /// Lists the substring filter projection of all events.
    pub fn filtered_events(&self, query: &str) -> RepoResult<Vec<Event>> {
        service(&self.conn).get_filtered_events(query)
    }

    /// Creates an event from a draft in one transaction.
    pub fn create_event(&mut self, draft: &EventDraft) -> RepoResult<Event> {
        let started_at = Instant::now();
        let tx = self.conn.transaction()?;
        let created = match service(&tx).create(draft) {
            Ok(created) => created,
            Err(err) => {
                log_write_error("event_create", started_at, &err);
                return Err(err);
            }
        };
        tx.commit()?;

        info!(
            "event=event_create module=catalog status=ok id={} bands={} duration_ms={}",
            created.id,
            created.bands.len(),
            started_at.elapsed().as_millis()
        );
        Ok(created)
    }

    /// Applies a desired-state draft to an existing event in one transaction.
    ///
    /// Returns `Ok(None)` when the id is absent; nothing is written then.
    pub fn update_event(&mut self, id: EventId, draft: &EventDraft) -> RepoResult<Option<Event>> {
        let started_at = Instant::now();
        let tx = self.conn.transaction()?;
        let updated = match service(&tx).update(id, draft) {
            Ok(updated) => updated,
            Err(err) => {
                log_write_error("event_update", started_at, &err);
                return Err(err);
            }
        };
        tx.commit()?;

        info!(
            "event=event_update module=catalog status=ok id={id} found={} duration_ms={}",
            updated.is_some(),
            started_at.elapsed().as_millis()
        );
        Ok(updated)
    }

    /// Deletes an event by id in one transaction. Absent ids are a no-op.
    pub fn delete_event(&mut self, id: EventId) -> RepoResult<()> {
        let started_at = Instant::now();
        let tx = self.conn.transaction()?;
        if let Err(err) = service(&tx).delete(id) {
            log_write_error("event_delete", started_at, &err);
            return Err(err);
        }
        tx.commit()?;

        info!(
            "event=event_delete module=catalog status=ok id={id} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn service(conn: &Connection) -> SqliteEventService<'_> {
    EventService::new(
        SqliteEventRepository::new(conn),
        SqliteBandRepository::new(conn),
        SqliteMemberRepository::new(conn),
    )
}

fn log_write_error(operation: &str, started_at: Instant, err: &RepoError) {
    error!(
        "event={operation} module=catalog status=error duration_ms={} error={err}",
        started_at.elapsed().as_millis()
    );
}
