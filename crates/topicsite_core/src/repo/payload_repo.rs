//! Payload store contract and SQLite implementation.
//!
//! # Responsibility
//! - Fetch externally stored payloads by `(content type, object id)`.
//! - Keep payload SQL inside the persistence boundary.
//!
//! # Invariants
//! - A payload row always references an existing content type.

use crate::model::content_type::{ContentTypeDescriptor, Payload};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Lookup contract for externally stored payloads.
pub trait PayloadStore {
    fn get_payload(
        &self,
        content_type: &ContentTypeDescriptor,
        object_id: i64,
    ) -> RepoResult<Option<Payload>>;
}

impl<T: PayloadStore + ?Sized> PayloadStore for &T {
    fn get_payload(
        &self,
        content_type: &ContentTypeDescriptor,
        object_id: i64,
    ) -> RepoResult<Option<Payload>> {
        (**self).get_payload(content_type, object_id)
    }
}

/// SQLite-backed payload store over the `payloads` table.
pub struct SqlitePayloadStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePayloadStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts or replaces one payload body.
    pub fn put_payload(
        &self,
        content_type: &ContentTypeDescriptor,
        object_id: i64,
        body: &str,
    ) -> RepoResult<Payload> {
        self.conn.execute(
            "INSERT INTO payloads (content_type_id, object_id, body)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (content_type_id, object_id) DO UPDATE SET
                body = excluded.body,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![content_type.id, object_id, body],
        )?;

        Ok(Payload {
            content_type_id: content_type.id,
            object_id,
            body: body.to_string(),
        })
    }
}

impl PayloadStore for SqlitePayloadStore<'_> {
    fn get_payload(
        &self,
        content_type: &ContentTypeDescriptor,
        object_id: i64,
    ) -> RepoResult<Option<Payload>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM payloads WHERE content_type_id = ?1 AND object_id = ?2;",
                params![content_type.id, object_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        debug!(
            "event=payload_get module=repo status=ok content_type_id={} object_id={} hit={}",
            content_type.id,
            object_id,
            body.is_some()
        );

        Ok(body.map(|body| Payload {
            content_type_id: content_type.id,
            object_id,
            body,
        }))
    }
}
