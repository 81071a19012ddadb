//! Text encoding of quote collections
//!
//! Collections travel as a JSON array of `{ "text", "category" }` objects.
//! Exports are pretty-printed with two-space indentation; persisted values use
//! the same shape.

use serde_json::Value;

use crate::errors::{QuoteBookError, Result};
use crate::model::Quote;
use crate::rules::validation::{json_type, validate_record};

/// Default file name offered for exported collections
pub const DEFAULT_EXPORT_FILE_NAME: &str = "quotes.json";

/// Encode a collection as pretty-printed JSON
pub fn encode_snapshot(quotes: &[Quote]) -> Result<String> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// Encode a collection compactly for the key-value capability
pub fn encode_persisted(quotes: &[Quote]) -> Result<String> {
    Ok(serde_json::to_string(quotes)?)
}

/// Decode import content into a validated collection
///
/// The top-level value must be an array, and every element must be a
/// well-formed quote record.
///
/// # Errors
/// * `InvalidImportShape` - If the content is not JSON or not an array
/// * `InvalidRecord` - If any element is malformed
pub fn decode_import(content: &str) -> Result<Vec<Quote>> {
    let value: Value =
        serde_json::from_str(content).map_err(|err| QuoteBookError::InvalidImportShape {
            reason: format!("not valid JSON: {}", err),
        })?;

    let records = value
        .as_array()
        .ok_or_else(|| QuoteBookError::InvalidImportShape {
            reason: format!("expected an array of quotes, found {}", json_type(&value)),
        })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

/// Decode a collection previously written under `key`
///
/// Applies the same checks as import, so a stored collection that violates
/// the record invariants is treated as corrupt.
///
/// # Errors
/// * `PersistenceDecode` - If the stored value is not a valid collection
pub fn decode_persisted(key: &str, raw: &str) -> Result<Vec<Quote>> {
    decode_import(raw).map_err(|err| QuoteBookError::PersistenceDecode {
        key: key.to_string(),
        reason: err.to_string(),
    })
}

/// Encode the category cache
pub fn encode_categories(categories: &[String]) -> Result<String> {
    Ok(serde_json::to_string(categories)?)
}

/// Decode the category cache
///
/// # Errors
/// * `PersistenceDecode` - If the stored value is not an array of strings
pub fn decode_categories(key: &str, raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).map_err(|err| QuoteBookError::PersistenceDecode {
        key: key.to_string(),
        reason: err.to_string(),
    })
}

/// Encode a single quote (session-scoped last viewed value)
pub fn encode_quote(quote: &Quote) -> Result<String> {
    Ok(serde_json::to_string(quote)?)
}

/// Decode a single quote
///
/// # Errors
/// * `PersistenceDecode` - If the stored value is not a valid quote record
pub fn decode_quote(key: &str, raw: &str) -> Result<Quote> {
    let value: Value = serde_json::from_str(raw).map_err(|err| QuoteBookError::PersistenceDecode {
        key: key.to_string(),
        reason: err.to_string(),
    })?;
    validate_record(0, &value).map_err(|err| QuoteBookError::PersistenceDecode {
        key: key.to_string(),
        reason: err.to_string(),
    })
}
