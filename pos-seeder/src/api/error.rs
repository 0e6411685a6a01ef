//! Errors returned by the POS API client

/// Failure talking to the POS API
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS, body read)
    Http(reqwest::Error),
    /// Non-success HTTP status
    Status { status: u16, body: String },
    /// Response body did not have the expected shape
    Decode(String),
    /// Login succeeded but no token was found in the response
    Auth(String),
}

impl ApiError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Http(e) => e.is_connect() || e.is_timeout(),
            ApiError::Status { status, .. } => *status == 429 || (500..600).contains(status),
            ApiError::Decode(_) | ApiError::Auth(_) => false,
        }
    }

    /// Whether the request never reached the server, so even a
    /// non-idempotent call can be resent
    pub fn is_unsent(&self) -> bool {
        matches!(self, ApiError::Http(e) if e.is_connect())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ApiError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "API returned status {}", status)
                } else {
                    write!(f, "API returned status {}: {}", status, body)
                }
            }
            ApiError::Decode(msg) => write!(f, "Unexpected API response: {}", msg),
            ApiError::Auth(msg) => write!(f, "Login failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e)
    }
}
