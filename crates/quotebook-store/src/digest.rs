//! SHA256 digests
//!
//! One routine serves migration checksums and snapshot receipts.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA256 of `content`
pub fn sha256_hex(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
