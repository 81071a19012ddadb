//! Quotebook Store - SQLite persistence and snapshot files
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - `SqliteKv`, a `KeyValueStore` capability backed by SQLite
//! - Atomic snapshot file writes
//! - SHA256 digests for migration checksums and snapshot receipts

pub mod db;
pub mod digest;
pub mod errors;
pub mod kv;
pub mod migrations;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use kv::{KvScope, SqliteKv};
