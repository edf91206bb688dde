//! Error types for the API client.

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter failed a local format or range rule.
    /// Always raised before any request is sent.
    #[error("{0}")]
    Validation(String),
    /// The API answered with an error payload (`{"Code": ..., "Message": ...}`).
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
    /// No response could be obtained from the API.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),
    /// The API returned a non-success status without an error payload.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// The numeric code reported by the API, or 0 for every other failure.
    pub fn code(&self) -> i64 {
        match self {
            Error::Api { code, .. } => *code,
            _ => 0,
        }
    }

    /// Returns `true` if the request was rejected locally before being sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns `true` if the API itself reported the failure.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Failures of the HTTP transport: the request never produced a readable response.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_defaults_to_zero() {
        assert_eq!(Error::validation("bad").code(), 0);
        assert_eq!(Error::Parse("eof".to_string()).code(), 0);
        assert_eq!(
            Error::HttpStatus {
                status: 500,
                body: String::new()
            }
            .code(),
            0
        );
    }

    #[test]
    fn api_error_keeps_code_and_message() {
        let err = Error::Api {
            code: 3,
            message: "bad key".to_string(),
        };
        assert_eq!(err.code(), 3);
        assert!(err.is_api());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "API error 3: bad key");
    }

    #[test]
    fn validation_display_is_the_message() {
        let err = Error::validation("Invalid stop number.");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid stop number.");
    }

    #[test]
    fn transport_error_display() {
        let err = Error::from(TransportError::InvalidHeader("bad name".to_string()));
        assert!(err.to_string().contains("Transport failure"));
        assert!(err.to_string().contains("bad name"));
    }
}
