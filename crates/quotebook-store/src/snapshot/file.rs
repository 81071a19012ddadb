//! Export and import files

use std::fs;
use std::path::{Path, PathBuf};

use quotebook_core::codec::DEFAULT_EXPORT_FILE_NAME;

use crate::errors::{io_error, Result};
use crate::snapshot::atomic::atomic_write;
use crate::digest::sha256_hex;

/// Result of writing a snapshot file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReceipt {
    pub path: PathBuf,
    pub digest: String,
    pub bytes: usize,
}

/// `quotes.json` inside `dir`
pub fn default_export_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_EXPORT_FILE_NAME)
}

/// Atomically write exported snapshot content to `path`
pub fn write_snapshot(path: &Path, content: &str) -> Result<SnapshotReceipt> {
    atomic_write(path, content.as_bytes())?;

    let receipt = SnapshotReceipt {
        path: path.to_path_buf(),
        digest: sha256_hex(content),
        bytes: content.len(),
    };
    tracing::info!(
        path = %receipt.path.display(),
        digest = receipt.digest.as_str(),
        bytes = receipt.bytes,
        "Wrote snapshot"
    );
    Ok(receipt)
}

/// Read an import file to completion
pub fn read_snapshot(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error("read_snapshot", e))
}
