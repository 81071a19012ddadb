//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Domain fields
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_QUOTE_COUNT: &str = "quote_count";
pub const FIELD_CATEGORY_COUNT: &str = "category_count";
pub const FIELD_STORAGE_KEY: &str = "storage_key";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
