//! SL client error types.

use std::fmt;

use crate::domain::SiteId;

/// Errors from fetching departures.
#[derive(Debug)]
pub enum SlError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// The site id is not known to SL
    SiteNotFound(SiteId),

    /// Rate limited by the API
    RateLimited,

    /// Mock data missing or unreadable
    Mock(String),
}

impl fmt::Display for SlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlError::Http(e) => write!(f, "HTTP error: {e}"),
            SlError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            SlError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            SlError::SiteNotFound(site) => write!(f, "site {site} not found"),
            SlError::RateLimited => write!(f, "rate limited by SL API"),
            SlError::Mock(msg) => write!(f, "mock data: {msg}"),
        }
    }
}

impl std::error::Error for SlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SlError {
    fn from(err: reqwest::Error) -> Self {
        SlError::Http(err)
    }
}
