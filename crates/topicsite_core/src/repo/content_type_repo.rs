//! Content type registry contracts and implementations.
//!
//! # Responsibility
//! - Resolve content type labels and ids to descriptors.
//! - Provide an in-process registry and a SQLite-backed registry.
//!
//! # Invariants
//! - `app_label` is unique per registry.
//! - Labels are trimmed before validation and lookup.

use crate::model::content_type::ContentTypeDescriptor;
use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;

const CONTENT_TYPE_SELECT_SQL: &str = "SELECT id, app_label, model, name FROM content_types";

/// Lookup contract for content type descriptors.
pub trait ContentTypeRegistry {
    fn get_by_label(&self, label: &str) -> RepoResult<Option<ContentTypeDescriptor>>;
    fn get_by_id(&self, id: i64) -> RepoResult<Option<ContentTypeDescriptor>>;
}

impl<T: ContentTypeRegistry + ?Sized> ContentTypeRegistry for &T {
    fn get_by_label(&self, label: &str) -> RepoResult<Option<ContentTypeDescriptor>> {
        (**self).get_by_label(label)
    }

    fn get_by_id(&self, id: i64) -> RepoResult<Option<ContentTypeDescriptor>> {
        (**self).get_by_id(id)
    }
}

/// In-process registry keyed by label.
#[derive(Debug, Default)]
pub struct InMemoryContentTypeRegistry {
    by_label: BTreeMap<String, ContentTypeDescriptor>,
}

impl InMemoryContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one content type and assigns the next id.
    pub fn register(
        &mut self,
        app_label: &str,
        model: &str,
        name: &str,
    ) -> RepoResult<ContentTypeDescriptor> {
        let label = validated_label(app_label)?;
        if self.by_label.contains_key(label.as_str()) {
            return Err(RepoError::DuplicateLabel(label));
        }

        let id = self.by_label.values().map(|entry| entry.id).max().unwrap_or(0) + 1;
        let descriptor = ContentTypeDescriptor::new(id, label.clone(), model, name);
        self.by_label.insert(label, descriptor.clone());
        Ok(descriptor)
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Returns sorted labels.
    pub fn labels(&self) -> Vec<String> {
        self.by_label.keys().cloned().collect()
    }
}

impl ContentTypeRegistry for InMemoryContentTypeRegistry {
    fn get_by_label(&self, label: &str) -> RepoResult<Option<ContentTypeDescriptor>> {
        Ok(self.by_label.get(label.trim()).cloned())
    }

    fn get_by_id(&self, id: i64) -> RepoResult<Option<ContentTypeDescriptor>> {
        Ok(self.by_label.values().find(|entry| entry.id == id).cloned())
    }
}

/// SQLite-backed registry over the `content_types` table.
pub struct SqliteContentTypeRegistry<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContentTypeRegistry<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Persists one content type.
    pub fn register(
        &self,
        app_label: &str,
        model: &str,
        name: &str,
    ) -> RepoResult<ContentTypeDescriptor> {
        let label = validated_label(app_label)?;
        if self.get_by_label(&label)?.is_some() {
            return Err(RepoError::DuplicateLabel(label));
        }

        self.conn.execute(
            "INSERT INTO content_types (app_label, model, name) VALUES (?1, ?2, ?3);",
            params![label.as_str(), model, name],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=content_type_register module=repo status=ok id={id} label={label}");

        Ok(ContentTypeDescriptor::new(id, label, model, name))
    }

    /// Lists all registered types ordered by label.
    pub fn list(&self) -> RepoResult<Vec<ContentTypeDescriptor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTENT_TYPE_SELECT_SQL} ORDER BY app_label ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut descriptors = Vec::new();
        while let Some(row) = rows.next()? {
            descriptors.push(parse_content_type_row(row)?);
        }
        Ok(descriptors)
    }
}

impl ContentTypeRegistry for SqliteContentTypeRegistry<'_> {
    fn get_by_label(&self, label: &str) -> RepoResult<Option<ContentTypeDescriptor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTENT_TYPE_SELECT_SQL} WHERE app_label = ?1;"))?;
        let descriptor = stmt
            .query_row([label.trim()], |row| Ok(parse_content_type_row(row)))
            .optional()?;
        descriptor.transpose()
    }

    fn get_by_id(&self, id: i64) -> RepoResult<Option<ContentTypeDescriptor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTENT_TYPE_SELECT_SQL} WHERE id = ?1;"))?;
        let descriptor = stmt
            .query_row([id], |row| Ok(parse_content_type_row(row)))
            .optional()?;
        descriptor.transpose()
    }
}

fn parse_content_type_row(row: &Row<'_>) -> RepoResult<ContentTypeDescriptor> {
    let app_label: String = row.get("app_label")?;
    if !is_valid_label(&app_label) {
        return Err(RepoError::InvalidData(format!(
            "invalid label `{app_label}` in content_types.app_label"
        )));
    }

    Ok(ContentTypeDescriptor {
        id: row.get("id")?,
        app_label,
        model: row.get("model")?,
        name: row.get("name")?,
    })
}

fn validated_label(value: &str) -> RepoResult<String> {
    let label = value.trim().to_string();
    if !is_valid_label(&label) {
        return Err(RepoError::InvalidLabel(label));
    }
    Ok(label)
}

fn is_valid_label(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{ContentTypeRegistry, InMemoryContentTypeRegistry};
    use crate::repo::RepoError;

    #[test]
    fn registers_and_looks_up_by_label_and_id() {
        let mut registry = InMemoryContentTypeRegistry::new();
        let note = registry
            .register("note", "Note", "Field Note")
            .expect("note should register");
        let quote = registry
            .register("quote", "Quote", "Quote")
            .expect("quote should register");

        assert_eq!(note.id, 1);
        assert_eq!(quote.id, 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_by_label(" note ").unwrap(), Some(note));
        assert_eq!(registry.get_by_id(2).unwrap(), Some(quote));
        assert_eq!(registry.get_by_label("video").unwrap(), None);
    }

    #[test]
    fn rejects_invalid_or_duplicate_labels() {
        let mut registry = InMemoryContentTypeRegistry::new();
        assert!(matches!(
            registry.register("Field Note", "Note", "Note"),
            Err(RepoError::InvalidLabel(_))
        ));
        assert!(matches!(
            registry.register("   ", "Note", "Note"),
            Err(RepoError::InvalidLabel(_))
        ));

        registry
            .register("note", "Note", "Note")
            .expect("first register");
        assert!(matches!(
            registry.register("note", "Note", "Note"),
            Err(RepoError::DuplicateLabel(label)) if label == "note"
        ));
        assert_eq!(registry.labels(), vec!["note".to_string()]);
    }
}
