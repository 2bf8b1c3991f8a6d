//! Catalog API error taxonomy.
//!
//! Everything the client can go wrong with surfaces as a [`CatalogError`]
//! value - callers never see an uncaught panic from the query layer. The
//! variants carry enough context for logs; [`CatalogError::user_message`]
//! maps any of them to copy suitable for a retry affordance.

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection, TLS, redirect loop, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with a non-success status.
    #[error("Catalog API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body snippet.
        message: String,
    },
}

impl CatalogError {
    /// User-facing copy for this error.
    ///
    /// Network-ish failures get retry wording; a missing resource reads as
    /// exactly that.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Http(_) => "Network error. Please check your connection and try again.",
            Self::NotFound(_) => "That product could not be found.",
            Self::Parse(_) | Self::Status { .. } => {
                "The catalog is having trouble right now. Please try again."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let error = CatalogError::Status {
            status: 503,
            message: "upstream unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Catalog API returned 503: upstream unavailable"
        );
    }

    #[test]
    fn test_user_message_suggests_retry_for_server_faults() {
        let error = CatalogError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(error.user_message().contains("try again"));

        let missing = CatalogError::NotFound("products/999".to_string());
        assert!(!missing.user_message().contains("try again"));
    }
}
