//! Unified error handling for Skygate operations.
//!
//! Access denial is never an error: the decision engine returns booleans.
//! Errors are reserved for collaborator failures (the grant store being the
//! only suspension point) and for malformed input at parse boundaries.

use serde::{Deserialize, Serialize};

/// Unified error type for all Skygate operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SkygateError {
    /// The grant store could not be reached or failed mid-query.
    ///
    /// Propagated unchanged to the caller, who translates it into a
    /// user-facing response. Never silently mapped to allow or deny.
    #[error("grant store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the store failure
        message: String,
    },

    /// A date string could not be parsed at an ingestion boundary.
    #[error("invalid date: {value}")]
    InvalidDate {
        /// The offending input
        value: String,
    },

    /// Internal invariant violation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the violated invariant
        message: String,
    },
}

impl SkygateError {
    /// Create a store-unavailable error
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Create an invalid-date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for Skygate operations
pub type SkygateResult<T> = Result<T, SkygateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_unavailable_display_includes_message() {
        let err = SkygateError::store_unavailable("connection refused");
        assert_eq!(err.to_string(), "grant store unavailable: connection refused");
    }

    #[test]
    fn errors_round_trip_through_serde() {
        let err = SkygateError::invalid_date("2025-13-99");
        let json = serde_json::to_string(&err).unwrap();
        let back: SkygateError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
