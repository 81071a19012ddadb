//! SQL migrations, embedded at compile time

/// One schema step, identified by its file stem
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Every migration, in application order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "001_kv_local",
        sql: include_str!("../../migrations/001_kv_local.sql"),
    },
    Migration {
        id: "002_kv_session",
        sql: include_str!("../../migrations/002_kv_session.sql"),
    },
];
