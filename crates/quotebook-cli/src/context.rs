//! Store construction shared by every command

use std::path::Path;

use quotebook_core::errors::{ExError, ExErrorKind};
use quotebook_core::{CommandOutcome, QuoteStore};
use quotebook_store::SqliteKv;

/// Result type for command handlers
pub type CmdResult = Result<(), ExError>;

/// Open the database at `db` and load the store over it
pub fn open_store(db: &Path) -> Result<QuoteStore, ExError> {
    let (local, session) = SqliteKv::open_pair(db)?;
    Ok(QuoteStore::initialize(Box::new(local), Box::new(session)))
}

/// Error for an `apply` outcome that does not belong to the command sent
pub fn unexpected_outcome(op: &str, outcome: &CommandOutcome) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message(format!("unexpected outcome {:?}", outcome))
}
