//! Error types for explorer data operations.
//!
//! [`ExplorerError`] is what the data service reports. The navigation layer
//! never distinguishes between its variants: every one of them collapses into
//! a single [`FetchFailed`] condition before it reaches the user.

use thiserror::Error;

// ============================================================================
// Data Service Errors
// ============================================================================

/// Errors produced while resolving a block or transaction identifier.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status other than 404.
    #[error("HTTP {status} from data service")]
    Http {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The requested entity does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Entity kind ("block" or "transaction").
        entity: &'static str,
        /// The identifier that was requested.
        id: String,
    },

    /// The payload could not be decoded into a record.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The fetch did not resolve within the configured bound.
    #[error("Request timed out after {seconds}s")]
    Timeout {
        /// The bound that was exceeded, in seconds.
        seconds: u64,
    },

    /// Invalid identifier supplied by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ExplorerError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Fetch Classification
// ============================================================================

/// Kind of entity a drill-down fetch was resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Block,
    Transaction,
}

impl EntityKind {
    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Transaction => "transaction",
        }
    }
}

/// The single failure condition surfaced by the navigation layer.
///
/// Network errors, missing entities, decode failures and timeouts all end up
/// here; only `reason` keeps the original description for the log and toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load {} '{id}': {reason}", kind.as_str())]
pub struct FetchFailed {
    /// What was being fetched.
    pub kind: EntityKind,
    /// The identifier that was requested.
    pub id: String,
    /// Human-readable cause.
    pub reason: String,
}

impl FetchFailed {
    /// Classify a data service error as a fetch failure.
    #[must_use]
    pub fn from_error(kind: EntityKind, id: impl Into<String>, error: &ExplorerError) -> Self {
        Self {
            kind,
            id: id.into(),
            reason: error.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
