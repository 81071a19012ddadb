use serde_json::Value;

use crate::errors::{QuoteBookError, Result};
use crate::model::Quote;

/// Validate a full replacement collection
///
/// Records are checked for blank fields but kept exactly as given. The first
/// malformed record rejects the whole collection.
///
/// # Errors
/// * `InvalidRecord` - With the index of the first record whose text or category is blank
pub fn validate_collection(quotes: &[Quote]) -> Result<()> {
    quotes.iter().enumerate().try_for_each(|(index, quote)| {
        quote
            .ensure_complete()
            .map_err(|err| QuoteBookError::InvalidRecord {
                index,
                reason: err.to_string(),
            })
    })
}

/// Validate one untyped import record
///
/// Accepts any object carrying string `text` and `category` fields; other
/// fields are ignored.
///
/// # Errors
/// * `InvalidRecord` - If the record is not an object, or a field is missing, not a string, or blank
pub fn validate_record(index: usize, record: &Value) -> Result<Quote> {
    let invalid = |reason: String| QuoteBookError::InvalidRecord { index, reason };

    let object = record
        .as_object()
        .ok_or_else(|| invalid(format!("expected an object, found {}", json_type(record))))?;

    let field = |name: &str| -> Result<&str> {
        match object.get(name) {
            None => Err(invalid(format!("missing field '{}'", name))),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(invalid(format!(
                "field '{}' must be a string, found {}",
                name,
                json_type(other)
            ))),
        }
    };

    let quote = Quote::new(field("text")?, field("category")?);
    quote
        .ensure_complete()
        .map_err(|err| invalid(err.to_string()))?;
    Ok(quote)
}

/// Human name of a JSON value's type, for error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
