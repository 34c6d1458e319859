use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum JqError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unsuccessful HTTP status code.
    ///
    /// `url` never carries the query string, so tokens passed as query parameters
    /// do not end up in logs.
    #[error("Unexpected response status: {status} at {url}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL (without query) that returned the error.
        url: String,
        /// The response body, as text.
        body: String,
    },

    /// The id-token exchange was rejected with `400 Bad Request` while fresh
    /// credentials are available to log in again.
    ///
    /// This is consumed by the token manager's retry loop; callers only observe it
    /// as [`JqError::Status`] once every attempt has failed.
    #[error("token exchange rejected ({status}) at {url}: {body}")]
    TokenExchange {
        /// The HTTP status code.
        status: u16,
        /// The URL (without query) that returned the error.
        url: String,
        /// The response body, as text.
        body: String,
    },

    /// Missing or invalid credentials.
    #[error("configuration error: {0}")]
    Config(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A date argument could not be interpreted as a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,

    /// A parameter value is not one the API accepts.
    #[error("invalid parameter: {0}")]
    InvalidParams(String),

    /// Reading or writing the on-disk cache failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cached table could not be encoded or decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl JqError {
    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::TokenExchange { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Converts a retry signal into the plain status error surfaced to callers.
    pub(crate) fn into_fatal(self) -> Self {
        match self {
            Self::TokenExchange { status, url, body } => Self::Status { status, url, body },
            other => other,
        }
    }
}
