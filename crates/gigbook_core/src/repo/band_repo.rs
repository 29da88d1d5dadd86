//! Band repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist band records plus their member link set.
//!
//! # Invariants
//! - `name` is unique within the `bands` table.
//! - `save` replaces the whole `band_members` link set for the band.
//! - Members are loaded in deterministic `name ASC` order.

use crate::model::band::Band;
use crate::model::member::Member;
use crate::repo::{parse_uuid, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Store interface for band records, keyed by natural name.
pub trait BandRepository {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Band>>;
    fn save(&self, band: &Band) -> RepoResult<Band>;
}

/// SQLite-backed band repository.
pub struct SqliteBandRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBandRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BandRepository for SqliteBandRepository<'_> {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Band>> {
        let row = self
            .conn
            .query_row(
                "SELECT uuid, name FROM bands WHERE name = ?1;",
                [name],
                |row| {
                    let uuid: String = row.get("uuid")?;
                    let name: String = row.get("name")?;
                    Ok((uuid, name))
                },
            )
            .optional()?;

        match row {
            Some((uuid, name)) => {
                let id = parse_uuid(&uuid, "bands.uuid")?;
                let mut band = Band::with_id(id, name);
                band.members = load_band_members(self.conn, &uuid)?;
                Ok(Some(band))
            }
            None => Ok(None),
        }
    }

    fn save(&self, band: &Band) -> RepoResult<Band> {
        let band_uuid = band.id.to_string();
        self.conn.execute(
            "INSERT INTO bands (uuid, name) VALUES (?1, ?2)
             ON CONFLICT (uuid) DO UPDATE SET name = excluded.name;",
            params![band_uuid.as_str(), band.name.as_str()],
        )?;

        // Full replacement of the member link set.
        self.conn.execute(
            "DELETE FROM band_members WHERE band_uuid = ?1;",
            [band_uuid.as_str()],
        )?;
        for member in &band.members {
            self.conn.execute(
                "INSERT INTO band_members (band_uuid, member_uuid) VALUES (?1, ?2);",
                params![band_uuid.as_str(), member.id.to_string()],
            )?;
        }

        Ok(band.clone())
    }
}

/// Loads the member set linked to one band, in `name ASC` order.
pub(crate) fn load_band_members(conn: &Connection, band_uuid: &str) -> RepoResult<Vec<Member>> {
    let mut stmt = conn.prepare(
        "SELECT m.uuid, m.name
         FROM band_members bm
         INNER JOIN members m ON m.uuid = bm.member_uuid
         WHERE bm.band_uuid = ?1
         ORDER BY m.name ASC;",
    )?;
    let mut rows = stmt.query([band_uuid])?;
    let mut members = Vec::new();
    while let Some(row) = rows.next()? {
        let uuid: String = row.get("uuid")?;
        let id = parse_uuid(&uuid, "members.uuid")?;
        members.push(Member::with_id(id, row.get::<_, String>("name")?));
    }
    Ok(members)
}
