use std::fmt;

/// Error returned by API calls, carrying the HTTP status and a message
/// suitable for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}
