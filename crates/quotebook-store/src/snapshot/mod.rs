//! Snapshot files
//!
//! Provides:
//! - Atomic writes of exported snapshots (temp file then rename)
//! - Reading import files to completion
//! - A SHA256 digest of the written bytes in each receipt

mod atomic;
mod file;

pub use atomic::atomic_write;
pub use file::{default_export_path, read_snapshot, write_snapshot, SnapshotReceipt};
