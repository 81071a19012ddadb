//! Schema migrations for the key-value tables
//!
//! Migrations run inside one transaction; a migration already recorded in
//! `schema_version` is skipped once its checksum matches.

mod embedded;
mod runner;

pub use runner::apply_migrations;
