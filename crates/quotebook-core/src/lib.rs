//! Quotebook Core - Categorized quote collection store
//!
//! This crate provides:
//! - The `Quote` model and the built-in seed collection
//! - `QuoteStore`, which owns the collection and persists it through an
//!   injected `KeyValueStore` capability
//! - Category queries and uniform random sampling
//! - The JSON snapshot codec used for import and export
//! - A command inventory with a single `apply()` dispatch point
//! - Structured error and logging facilities

pub mod apply;
pub mod codec;
pub mod commands;
pub mod config;
pub mod errors;
pub mod kv;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

#[doc(hidden)]
pub use quotebook_core_types as core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{Command, CommandOutcome};
pub use config::StoreConfig;
pub use errors::{ExError, ExErrorKind, QuoteBookError, Result};
pub use kv::{KeyValueStore, MemoryKv};
pub use model::Quote;
pub use ops::{CollectionSource, QuoteStore};
