//! Unified error type for the dealer ledger.
//!
//! Core functions return [`Result`]; the action layer turns every variant into
//! an [`ActionResult`](crate::actions::ActionResult) so nothing escapes to callers.

use thiserror::Error;

/// All failures the ledger can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed a field rule. `message` is the first violated rule.
    #[error("{message}")]
    Validation {
        /// Human-readable description of the violated rule
        message: String,
    },

    /// Another vehicle already holds this registration number.
    #[error("Registration number already exists: {reg_number}")]
    DuplicateRegNumber {
        /// The conflicting registration number
        reg_number: String,
    },

    /// The referenced vehicle does not exist.
    #[error("Vehicle not found: {id}")]
    VehicleNotFound {
        /// The identifier that failed to resolve
        id: String,
    },

    /// The persistence layer failed.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A money total left the representable range.
    #[error("Amount overflow while computing {context}")]
    AmountOverflow {
        /// The figure being computed
        context: &'static str,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
