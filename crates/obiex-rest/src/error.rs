//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (no response, or non-2xx without a structured body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a structured error response
    #[error("API error ({status_code}): {message}")]
    Api {
        /// Error message from the response body
        message: String,
        /// The `data` payload of the error body, as returned
        data: serde_json::Value,
        /// HTTP status code
        status_code: u16,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// A currency code did not resolve against the currency list
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// System clock error
    #[error("System clock error: time went backwards")]
    SystemClock,
}

impl RestError {
    /// HTTP status code of a structured API error, if that is what this is
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Check whether this is a structured API error with the given status
    pub fn is_status(&self, status: u16) -> bool {
        self.status_code() == Some(status)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = RestError::Api {
            message: "not found".to_string(),
            data: serde_json::Value::Null,
            status_code: 404,
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("not found"));
        assert!(err.is_status(404));
        assert!(!err.is_status(500));
    }

    #[test]
    fn test_status_code_only_for_api_errors() {
        let err = RestError::UnknownCurrency("XYZ".to_string());
        assert_eq!(err.status_code(), None);
    }
}
