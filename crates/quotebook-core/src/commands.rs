//! Command types for every caller-driven action
//!
//! A View Binder translates user events into `Command`s and feeds them to
//! `apply()`, then re-renders from the store.

use crate::model::Quote;

/// Command enum covering mutations and session actions
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a quote from form input
    AddQuote { text: String, category: String },

    /// Replace the collection with typed records
    ReplaceAll { quotes: Vec<Quote> },

    /// Replace the collection with exported snapshot content
    Import { content: String },

    /// Remember the category filter (blank clears it)
    SelectCategory { category: String },

    /// Sample a quote from a category and remember it as last viewed
    ShowRandom { category: String },

    /// Forget all session-scoped state
    EndSession,
}

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The quote that was appended
    Added(Quote),

    /// The collection was replaced with this many quotes
    Replaced { count: usize },

    /// The selection was updated; carries the quotes it now selects
    Selected {
        category: Option<String>,
        quotes: Vec<Quote>,
    },

    /// The sampled quote, or None when the category has no quotes
    Shown(Option<Quote>),

    /// Session state was cleared
    SessionEnded,
}
