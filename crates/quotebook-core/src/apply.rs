//! Single dispatch point for caller-driven actions
//!
//! `apply()` routes a [`Command`] to the matching [`QuoteStore`] operation.
//! Each operation is all-or-nothing: on error the store is unchanged.
//!
//! ## Example
//!
//! ```
//! use quotebook_core::{apply, Command, CommandOutcome, MemoryKv, QuoteStore};
//!
//! let mut store = QuoteStore::initialize(Box::new(MemoryKv::new()), Box::new(MemoryKv::new()));
//! let outcome = apply(
//!     &mut store,
//!     Command::AddQuote {
//!         text: "Stay hungry.".to_string(),
//!         category: "Work".to_string(),
//!     },
//! )
//! .unwrap();
//!
//! assert!(matches!(outcome, CommandOutcome::Added(_)));
//! assert_eq!(store.len(), 5);
//! ```

use crate::commands::{Command, CommandOutcome};
use crate::errors::Result;
use crate::ops::QuoteStore;

/// Apply a command to the store
///
/// # Errors
///
/// Returns the error of the underlying store operation: validation errors
/// for malformed input, `Storage` when a capability write fails. See
/// `QuoteBookError` for the full taxonomy.
pub fn apply(store: &mut QuoteStore, cmd: Command) -> Result<CommandOutcome> {
    match cmd {
        Command::AddQuote { text, category } => {
            let quote = store.add(&text, &category)?;
            Ok(CommandOutcome::Added(quote))
        }

        Command::ReplaceAll { quotes } => {
            store.replace_all(quotes)?;
            Ok(CommandOutcome::Replaced { count: store.len() })
        }

        Command::Import { content } => {
            let count = store.import(&content)?;
            Ok(CommandOutcome::Replaced { count })
        }

        Command::SelectCategory { category } => {
            store.select_category(&category)?;
            let category = store.selected_category();
            let quotes = category
                .as_deref()
                .map(|c| store.filter_by_category(c))
                .unwrap_or_default();
            Ok(CommandOutcome::Selected { category, quotes })
        }

        Command::ShowRandom { category } => {
            let shown = store.random_from_category(&category);
            if let Some(quote) = &shown {
                store.record_last_viewed(quote)?;
            }
            Ok(CommandOutcome::Shown(shown))
        }

        Command::EndSession => {
            store.end_session()?;
            Ok(CommandOutcome::SessionEnded)
        }
    }
}
