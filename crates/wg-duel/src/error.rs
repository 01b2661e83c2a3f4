//! Error types for the duel engine.

use thiserror::Error;

/// Result type for duel operations.
pub type DuelResult<T> = Result<T, DuelError>;

/// Errors that can occur while building a rule table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DuelError {
    /// A rule names the same choice as winner and loser.
    #[error("'{0}' cannot beat itself")]
    SelfBeating(String),

    /// Two rules orient the same pair of choices.
    #[error("pair {0} / {1} is ruled on more than once")]
    DuplicateRule(String, String),

    /// A pair of distinct choices is not oriented by any rule.
    #[error("no rule covers the pair {0} / {1}")]
    MissingRule(String, String),
}
