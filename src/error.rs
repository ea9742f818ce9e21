use thiserror::Error;

/// Errors that can occur while running a radio session
#[derive(Debug, Error)]
pub enum RadioError {
    // ===== Input Errors =====
    /// A required start parameter was absent or empty
    #[error("missing required input: {name}")]
    MissingInput {
        /// Name of the missing parameter
        name: String,
    },

    // ===== Resolution Errors =====
    /// Fetching or parsing a playlist failed
    #[error("failed to resolve {url}: {message}")]
    Resolution {
        /// The playlist URL being resolved
        url: String,
        /// Description of the failure
        message: String,
        /// The underlying source of the error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Operation timed out
    #[error("operation timed out after {duration:?}")]
    Timeout {
        /// The bound that was exceeded
        duration: std::time::Duration,
    },

    // ===== State Errors =====
    /// Command not valid in the current session lifecycle stage
    #[error("invalid state: {message}")]
    InvalidState {
        /// Description of why the state is invalid
        message: String,
        /// The current lifecycle stage
        current_state: String,
    },
}

impl RadioError {
    /// Shorthand for a missing parameter
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingInput {
            name: name.to_string(),
        }
    }
}

/// Result type alias for radio session operations
pub type Result<T> = std::result::Result<T, RadioError>;
