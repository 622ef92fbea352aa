//! Error handling for the leadboard API client

use thiserror::Error;

/// Unified error type for the leadboard API client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The backend rejected the bearer token (401). Raised after the
    /// persisted token has been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx response, carrying the server-supplied message
    /// when one was present in the body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// The server-supplied message, if this error carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Convert to a user-facing message string, preferring the
    /// server-supplied message and falling back to `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_server_message() {
        let err = Error::Api {
            status: 422,
            message: "Name is required".into(),
        };
        assert_eq!(err.message_or("Failed to save source."), "Name is required");
    }

    #[test]
    fn unauthorized_falls_back_to_generic_message() {
        let err = Error::Unauthorized;
        assert_eq!(err.message_or("Failed to fetch leads."), "Failed to fetch leads.");
    }

    #[test]
    fn empty_server_message_falls_back() {
        let err = Error::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.message_or("Something broke."), "Something broke.");
    }
}
