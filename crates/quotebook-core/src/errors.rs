use quotebook_core_types::RequestId;
use thiserror::Error;

/// Result type alias using QuoteBookError
pub type Result<T> = std::result::Result<T, QuoteBookError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on and that
/// is emitted in structured log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed caller input (add, replace, import)
    Validation,
    /// Persisted data could not be decoded (recovered locally)
    PersistenceDecode,
    /// The key-value backend failed to read or write
    Persistence,
    Io,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::PersistenceDecode => "ERR_PERSISTENCE_DECODE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging. Used at crate boundaries (store helpers, CLI output).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    storage_key: Option<String>,
    index: Option<usize>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            storage_key: None,
            index: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the storage key involved
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Add the position of the offending record
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the storage key context, if any
    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    /// Get the record index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.storage_key {
            write!(f, " (key: {})", key)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Quotebook operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteBookError {
    // ===== Validation Errors =====
    /// A required quote field was empty after trimming
    #[error("Quote {field} cannot be empty")]
    EmptyField { field: &'static str },

    /// A record in a bulk replacement was malformed
    #[error("Invalid quote record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Import content was not an array of quote records
    #[error("Invalid import format: {reason}")]
    InvalidImportShape { reason: String },

    // ===== Persistence Errors =====
    /// Persisted data under a key could not be decoded
    #[error("Could not decode persisted value under '{key}': {reason}")]
    PersistenceDecode { key: String, reason: String },

    /// The key-value backend failed
    #[error("Storage failure during {op}: {message}")]
    Storage { op: String, message: String },

    /// Reading caller-supplied content failed
    #[error("IO error during {op}: {message}")]
    Io { op: String, message: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl QuoteBookError {
    /// Whether this error reports malformed caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuoteBookError::EmptyField { .. }
                | QuoteBookError::InvalidRecord { .. }
                | QuoteBookError::InvalidImportShape { .. }
        )
    }

    /// Build a storage error for a failed backend operation
    pub fn storage(op: impl Into<String>, message: impl Into<String>) -> Self {
        QuoteBookError::Storage {
            op: op.into(),
            message: message.into(),
        }
    }
}

impl From<QuoteBookError> for ExError {
    fn from(err: QuoteBookError) -> Self {
        let message = err.to_string();
        match err {
            QuoteBookError::EmptyField { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("add_quote")
                .with_message(message),

            QuoteBookError::InvalidRecord { index, .. } => ExError::new(ExErrorKind::Validation)
                .with_op("replace_all")
                .with_index(index)
                .with_message(message),

            QuoteBookError::InvalidImportShape { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("import")
                .with_message(message),

            QuoteBookError::PersistenceDecode { key, .. } => {
                ExError::new(ExErrorKind::PersistenceDecode)
                    .with_storage_key(key)
                    .with_message(message)
            }

            QuoteBookError::Storage { op, .. } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),

            QuoteBookError::Io { op, .. } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),

            QuoteBookError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to QuoteBookError
impl From<serde_json::Error> for QuoteBookError {
    fn from(err: serde_json::Error) -> Self {
        QuoteBookError::Serialization {
            message: err.to_string(),
        }
    }
}
