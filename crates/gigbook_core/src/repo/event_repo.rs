//! Event repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist event scalar fields plus the event→band link set.
//! - Load the full event graph (bands with members) for read paths.
//!
//! # Invariants
//! - `find_all` order is deterministic: `created_at ASC, uuid ASC`.
//! - `save` replaces the whole `event_bands` link set; linked bands must
//!   already be store-resident.
//! - `delete` clears the association rows before removing the event row,
//!   and never touches band or member records.

use crate::model::band::Band;
use crate::model::event::{Event, EventId};
use crate::repo::band_repo::load_band_members;
use crate::repo::{parse_uuid, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EVENT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    comment,
    img_url,
    nb_stars
FROM events";

/// Store interface for event records.
pub trait EventRepository {
    fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;
    fn find_all(&self) -> RepoResult<Vec<Event>>;
    fn save(&self, event: &Event) -> RepoResult<Event>;
    fn delete(&self, event: &Event) -> RepoResult<()>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} WHERE uuid = ?1;"))?;
        let event = stmt
            .query_row([id.to_string()], parse_event_row)
            .optional()?;

        match event {
            Some(scalars) => {
                let mut event = scalars?;
                event.bands = load_event_bands(self.conn, event.id)?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    fn find_all(&self) -> RepoResult<Vec<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            let mut event = parse_event_row(row)??;
            event.bands = load_event_bands(self.conn, event.id)?;
            events.push(event);
        }

        Ok(events)
    }

    fn save(&self, event: &Event) -> RepoResult<Event> {
        let event_uuid = event.id.to_string();
        self.conn.execute(
            "INSERT INTO events (uuid, title, comment, img_url, nb_stars)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (uuid) DO UPDATE SET
                title = excluded.title,
                comment = excluded.comment,
                img_url = excluded.img_url,
                nb_stars = excluded.nb_stars,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                event_uuid.as_str(),
                event.title.as_str(),
                event.comment.as_str(),
                event.img_url.as_str(),
                event.nb_stars,
            ],
        )?;

        // Full replacement of the band link set.
        self.conn.execute(
            "DELETE FROM event_bands WHERE event_uuid = ?1;",
            [event_uuid.as_str()],
        )?;
        for band in &event.bands {
            self.conn.execute(
                "INSERT INTO event_bands (event_uuid, band_uuid) VALUES (?1, ?2);",
                params![event_uuid.as_str(), band.id.to_string()],
            )?;
        }

        Ok(event.clone())
    }

    fn delete(&self, event: &Event) -> RepoResult<()> {
        let event_uuid = event.id.to_string();

        // Clear associations first: the foreign key has no cascade and the
        // linked bands themselves must survive.
        self.conn.execute(
            "DELETE FROM event_bands WHERE event_uuid = ?1;",
            [event_uuid.as_str()],
        )?;
        self.conn
            .execute("DELETE FROM events WHERE uuid = ?1;", [event_uuid.as_str()])?;

        Ok(())
    }
}

fn parse_event_row(row: &Row<'_>) -> rusqlite::Result<RepoResult<Event>> {
    let uuid_text: String = row.get("uuid")?;
    let title: String = row.get("title")?;
    let comment: String = row.get("comment")?;
    let img_url: String = row.get("img_url")?;
    let nb_stars: u8 = row.get("nb_stars")?;

    Ok(match parse_uuid(&uuid_text, "events.uuid") {
        Ok(id) => {
            let mut event = Event::with_id(id, title);
            event.comment = comment;
            event.img_url = img_url;
            event.nb_stars = nb_stars;
            Ok(event)
        }
        Err(err) => Err(err),
    })
}

fn load_event_bands(conn: &Connection, event_id: EventId) -> RepoResult<Vec<Band>> {
    let mut stmt = conn.prepare(
        "SELECT b.uuid, b.name
         FROM event_bands eb
         INNER JOIN bands b ON b.uuid = eb.band_uuid
         WHERE eb.event_uuid = ?1
         ORDER BY b.name ASC;",
    )?;
    let mut rows = stmt.query([event_id.to_string()])?;
    let mut bands = Vec::new();

    while let Some(row) = rows.next()? {
        let uuid: String = row.get("uuid")?;
        let id = parse_uuid(&uuid, "bands.uuid")?;
        let mut band = Band::with_id(id, row.get::<_, String>("name")?);
        band.members = load_band_members(conn, &uuid)?;
        bands.push(band);
    }

    Ok(bands)
}
