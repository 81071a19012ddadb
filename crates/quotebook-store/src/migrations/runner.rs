use std::collections::HashMap;

use rusqlite::Connection;

use crate::digest::sha256_hex;
use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::embedded::MIGRATIONS;

const SCHEMA_VERSION_DDL: &str = "CREATE TABLE IF NOT EXISTS schema_version (
    migration_id TEXT PRIMARY KEY NOT NULL,
    checksum TEXT NOT NULL,
    applied_at INTEGER NOT NULL
)";

/// Bring the database up to the embedded schema
///
/// Fails without applying anything if a recorded checksum no longer
/// matches its embedded SQL.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    tx.execute_batch(SCHEMA_VERSION_DDL)
        .map_err(from_rusqlite)?;

    let recorded = recorded_checksums(&tx)?;
    for migration in MIGRATIONS {
        let checksum = sha256_hex(migration.sql);
        match recorded.get(migration.id) {
            Some(stored) if *stored == checksum => {}
            Some(stored) => return Err(checksum_mismatch(migration.id, stored, &checksum)),
            None => {
                tx.execute_batch(migration.sql)
                    .map_err(|e| migration_error(migration.id, &e.to_string()))?;
                tx.execute(
                    "INSERT INTO schema_version (migration_id, checksum, applied_at)
                     VALUES (?1, ?2, ?3)",
                    rusqlite::params![migration.id, checksum, chrono::Utc::now().timestamp()],
                )
                .map_err(from_rusqlite)?;
                tracing::debug!(migration_id = migration.id, "Applied migration");
            }
        }
    }

    tx.commit().map_err(from_rusqlite)
}

fn recorded_checksums(conn: &Connection) -> Result<HashMap<String, String>> {
    let mut stmt = conn
        .prepare("SELECT migration_id, checksum FROM schema_version")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<HashMap<String, String>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
