use std::fs;
use std::path::Path;

use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{RecordStore, StoreError};
use crate::model::{CONTENT_MAX_CHARS, Record, RecordFields, TITLE_MAX_CHARS};
use crate::util::unicode;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT,
    completed INTEGER NOT NULL,
    created_at INTEGER NOT NULL
)";

const SELECT_COLUMNS: &str = "SELECT id, title, content, completed, created_at FROM todos";

/// SQLite-backed record store (one table, one file)
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path`, creating parent directories
    /// and the schema as needed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let conn = Connection::open(path)?;
        let store = Self::with_connection(conn)?;
        info!("opened todo database at {}", path.display());
        Ok(store)
    }

    /// A private database that lives as long as the store
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(SCHEMA, [])?;
        debug!("todos table is ready");
        Ok(SqliteStore { conn })
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        completed: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Reject fields the editor could not have produced, so a record always
/// loads back into the form unchanged.
fn check_fields(fields: &RecordFields) -> Result<(), StoreError> {
    if !fields.has_title() {
        return Err(StoreError::EmptyTitle);
    }
    if unicode::char_len(&fields.title) > TITLE_MAX_CHARS {
        return Err(StoreError::TooLong {
            field: "title",
            limit: TITLE_MAX_CHARS,
        });
    }
    if unicode::char_len(&fields.content) > CONTENT_MAX_CHARS {
        return Err(StoreError::TooLong {
            field: "content",
            limit: CONTENT_MAX_CHARS,
        });
    }
    Ok(())
}

impl RecordStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
        let records = stmt
            .query_map([], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn get(&self, id: i64) -> Result<Record, StoreError> {
        self.conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                record_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&mut self, fields: &RecordFields) -> Result<i64, StoreError> {
        check_fields(fields)?;
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO todos (title, content, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![fields.title, fields.content, fields.completed, now],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("created todo {}", id);
        Ok(id)
    }

    fn update(&mut self, id: i64, fields: &RecordFields) -> Result<(), StoreError> {
        check_fields(fields)?;
        let changed = self.conn.execute(
            "UPDATE todos SET title = ?1, content = ?2, completed = ?3 WHERE id = ?4",
            params![fields.title, fields.content, fields.completed, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!("updated todo {} (completed={})", id, fields.completed);
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!("deleted todo {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        for title in titles {
            store
                .create(&RecordFields::new(*title, "", false))
                .unwrap();
        }
        store
    }

    #[test]
    fn create_assigns_fresh_ids_in_order() {
        let mut store = store_with(&["A", "B"]);
        let id = store
            .create(&RecordFields::new("C", "body", false))
            .unwrap();
        let all = store.list_all().unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(id, 3);
        assert_eq!(all[2].content, "body");
        assert!(!all[2].completed);
        assert!(all[2].created_at > 0);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store_with(&["A", "B"]);
        store.delete(2).unwrap();
        let id = store.create(&RecordFields::new("C", "", false)).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn update_preserves_created_at() {
        let mut store = store_with(&["A"]);
        let before = store.get(1).unwrap();
        store
            .update(1, &RecordFields::new("A2", "x", true))
            .unwrap();
        let after = store.get(1).unwrap();
        assert_eq!(after.title, "A2");
        assert_eq!(after.content, "x");
        assert!(after.completed);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn missing_ids_are_not_found() {
        let mut store = store_with(&[]);
        assert!(matches!(store.get(9), Err(StoreError::NotFound(9))));
        assert!(matches!(
            store.update(9, &RecordFields::new("x", "", false)),
            Err(StoreError::NotFound(9))
        ));
        assert!(matches!(store.delete(9), Err(StoreError::NotFound(9))));
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut store = store_with(&["A"]);
        assert!(matches!(
            store.create(&RecordFields::new("", "", false)),
            Err(StoreError::EmptyTitle)
        ));
        // whitespace is still a title
        assert!(store.create(&RecordFields::new("  ", "", false)).is_ok());
        assert!(matches!(
            store.update(1, &RecordFields::new("", "", false)),
            Err(StoreError::EmptyTitle)
        ));
        assert_eq!(store.get(1).unwrap().title, "A");
    }

    #[test]
    fn over_limit_fields_are_rejected() {
        let mut store = store_with(&["A"]);
        let long_title = "t".repeat(TITLE_MAX_CHARS + 1);
        let long_content = "c".repeat(CONTENT_MAX_CHARS + 1);

        assert!(matches!(
            store.create(&RecordFields::new(long_title.as_str(), "", false)),
            Err(StoreError::TooLong { field: "title", limit: 50 })
        ));
        assert!(matches!(
            store.update(1, &RecordFields::new("A", long_content.as_str(), false)),
            Err(StoreError::TooLong { field: "content", limit: 200 })
        ));
        assert_eq!(store.list_all().unwrap().len(), 1);
        assert_eq!(store.get(1).unwrap().content, "");

        // exactly at the limit is fine, counted in characters not bytes
        let at_limit = "é".repeat(TITLE_MAX_CHARS);
        store
            .update(1, &RecordFields::new(at_limit.as_str(), "", false))
            .unwrap();
        assert_eq!(store.get(1).unwrap().title, at_limit);
    }

    #[test]
    fn null_content_reads_as_empty() {
        let store = store_with(&[]);
        store
            .conn
            .execute(
                "INSERT INTO todos (title, content, completed, created_at) VALUES ('t', NULL, 0, 1)",
                [],
            )
            .unwrap();
        assert_eq!(store.get(1).unwrap().content, "");
    }
}
