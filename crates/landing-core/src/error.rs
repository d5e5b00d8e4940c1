//! Error Types

use thiserror::Error;

/// Result type alias for landing-page operations
pub type Result<T> = std::result::Result<T, LandingError>;

/// Landing-page error types
#[derive(Error, Debug)]
pub enum LandingError {
    /// Email failed the syntax check
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Email domain has no resolvable DNS record
    #[error("Unresolvable email domain: {0}")]
    UnresolvableDomain(String),

    /// Data table construction violated a shape invariant
    #[error("Malformed data table: {0}")]
    TableShape(String),

    /// Key-value store unavailable or refused the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl LandingError {
    /// Whether this error rejects an email submission (the only
    /// user-facing error class; everything else is internal)
    pub fn is_email_rejection(&self) -> bool {
        matches!(
            self,
            LandingError::InvalidEmail(_) | LandingError::UnresolvableDomain(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            LandingError::InvalidEmail(_) => {
                "Please enter a valid email to register.".into()
            }
            LandingError::UnresolvableDomain(_) => {
                "We couldn't verify that email domain. Please double-check it.".into()
            }
            _ => "Something went wrong. Please try again.".into(),
        }
    }
}

impl From<anyhow::Error> for LandingError {
    fn from(err: anyhow::Error) -> Self {
        LandingError::Other(err.to_string())
    }
}
