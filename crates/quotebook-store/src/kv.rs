//! SQLite-backed key-value capability
//!
//! One database holds both scopes in separate tables, so a long-lived and a
//! session-scoped `SqliteKv` can share a connection.

use std::path::Path;
use std::rc::Rc;

use quotebook_core::errors::Result as CoreResult;
use quotebook_core::KeyValueStore;
use rusqlite::{Connection, OptionalExtension};

use crate::db;
use crate::errors::{kv_error, Result};

/// Which table a `SqliteKv` reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvScope {
    /// Survives across sessions (collection, category cache)
    Local,
    /// Cleared when a session ends (selection, last viewed quote)
    Session,
}

impl KvScope {
    fn table(self) -> &'static str {
        match self {
            KvScope::Local => "kv_local",
            KvScope::Session => "kv_session",
        }
    }
}

/// Key-value capability over one scope of a migrated SQLite database
#[derive(Debug, Clone)]
pub struct SqliteKv {
    conn: Rc<Connection>,
    scope: KvScope,
}

impl SqliteKv {
    fn new(conn: Rc<Connection>, scope: KvScope) -> Self {
        Self { conn, scope }
    }

    /// Open the database at `path` and return its local and session stores
    pub fn open_pair<P: AsRef<Path>>(path: P) -> Result<(SqliteKv, SqliteKv)> {
        let conn = Rc::new(db::open_and_migrate(path)?);
        Ok(Self::pair(conn))
    }

    #[cfg(test)]
    fn in_memory_pair() -> Result<(SqliteKv, SqliteKv)> {
        let mut conn = db::open_in_memory()?;
        crate::migrations::apply_migrations(&mut conn)?;
        Ok(Self::pair(Rc::new(conn)))
    }

    fn pair(conn: Rc<Connection>) -> (SqliteKv, SqliteKv) {
        (
            SqliteKv::new(conn.clone(), KvScope::Local),
            SqliteKv::new(conn, KvScope::Session),
        )
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let sql = format!("SELECT value FROM {} WHERE key = ?1", self.scope.table());
        self.conn
            .query_row(&sql, [key], |row| row.get(0))
            .optional()
            .map_err(|e| kv_error("sqlite_get", e))
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let sql = format!(
            "INSERT INTO {} (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            self.scope.table()
        );
        let now = chrono::Utc::now().timestamp();
        self.conn
            .execute(&sql, rusqlite::params![key, value, now])
            .map_err(|e| kv_error("sqlite_set", e))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        let sql = format!("DELETE FROM {} WHERE key = ?1", self.scope.table());
        self.conn
            .execute(&sql, [key])
            .map_err(|e| kv_error("sqlite_remove", e))?;
        Ok(())
    }

    fn clear(&mut self) -> CoreResult<()> {
        let sql = format!("DELETE FROM {}", self.scope.table());
        let removed = self
            .conn
            .execute(&sql, [])
            .map_err(|e| kv_error("sqlite_clear", e))?;
        tracing::debug!(scope = ?self.scope, removed, "Cleared key-value scope");
        Ok(())
    }
}
