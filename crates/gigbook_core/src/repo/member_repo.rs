//! Member repository contract and SQLite implementation.
//!
//! # Invariants
//! - `name` is unique within the `members` table.
//! - `save` upserts on `uuid`; a name collision with a different record
//!   surfaces as a DB constraint error, not silent reuse.

use crate::model::member::Member;
use crate::repo::{parse_uuid, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Store interface for member records, keyed by natural name.
pub trait MemberRepository {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Member>>;
    fn save(&self, member: &Member) -> RepoResult<Member>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Member>> {
        let row = self
            .conn
            .query_row(
                "SELECT uuid, name FROM members WHERE name = ?1;",
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
                let id = parse_uuid(&uuid, "members.uuid")?;
                Ok(Some(Member::with_id(id, name)))
            }
            None => Ok(None),
        }
    }

    fn save(&self, member: &Member) -> RepoResult<Member> {
        self.conn.execute(
            "INSERT INTO members (uuid, name) VALUES (?1, ?2)
             ON CONFLICT (uuid) DO UPDATE SET name = excluded.name;",
            params![member.id.to_string(), member.name.as_str()],
        )?;

        Ok(member.clone())
    }
}
