use std::fmt;

/// Errors that can occur while talking to the progress store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Store unreachable or timed out
    Unavailable(String),
    /// Store answered with a non-success status (constraint violation, bad key, etc.)
    Rejected { status: u16, body: String },
    /// Response body could not be read as inserted rows
    InvalidResponse(String),
    /// Any other transport error
    Http(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
            Self::Rejected { status, body } => {
                write!(f, "Store rejected request (status {}): {}", status, body)
            }
            Self::InvalidResponse(msg) => write!(f, "Invalid store response: {}", msg),
            Self::Http(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Unavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::Unavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}
