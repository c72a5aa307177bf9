//! Error types for phonetic encoding.

use thiserror::Error;

/// Errors that can occur while building a rule table or encoding a word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneticError {
    /// A pattern rule could not be compiled.
    ///
    /// This only happens while a rule table is being built; once a table
    /// exists every rule in it is valid.
    #[error("Rule {rule_id} ({rule_name}) has an invalid pattern: {reason}")]
    InvalidPattern {
        /// Identifier of the offending rule
        rule_id: usize,
        /// Human-readable rule name
        rule_name: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// The rule table did not converge within the pass budget.
    ///
    /// This signals a defect in the rule table (two rules undoing each other),
    /// never a property of the input. The partially rewritten word is not
    /// returned.
    #[error("No fixpoint for {word:?} after {passes} passes")]
    NoFixpoint {
        /// The cleaned word that was being encoded
        word: String,
        /// Number of passes that were run before giving up
        passes: usize,
    },
}

/// A specialized `Result` type for phonetic operations.
pub type Result<T> = std::result::Result<T, PhoneticError>;
