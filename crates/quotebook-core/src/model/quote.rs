use serde::{Deserialize, Serialize};

use crate::errors::{QuoteBookError, Result};

/// Quote - a piece of text filed under one category
///
/// Quotes carry no identifier; two quotes with the same text and category
/// are the same quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quoted text
    pub text: String,

    /// Category the quote is filed under
    pub category: String,
}

impl Quote {
    /// Create a quote without validation
    ///
    /// Used for literals (seed data, tests). Caller input goes through
    /// [`Quote::parse`].
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Build a quote from caller input
    ///
    /// Both fields are trimmed before the emptiness check.
    ///
    /// # Errors
    /// * `EmptyField` - If either field is empty after trimming (text is checked first)
    pub fn parse(text: &str, category: &str) -> Result<Self> {
        let quote = Self::new(text.trim(), category.trim());
        quote.ensure_complete()?;
        Ok(quote)
    }

    /// Check that neither field is blank, leaving both as they are
    ///
    /// # Errors
    /// * `EmptyField` - If either field is empty after trimming (text is checked first)
    pub fn ensure_complete(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(QuoteBookError::EmptyField { field: "text" });
        }
        if self.category.trim().is_empty() {
            return Err(QuoteBookError::EmptyField { field: "category" });
        }
        Ok(())
    }

    /// Check whether this quote is filed under `category`
    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}
