//! Error types for the wallets request.
//!
//! `RequestError` keeps the transport's own error where there is one;
//! `FetchFailure` is the cloneable snapshot stored in view state.

use serde::Serialize;
use thiserror::Error;

/// Upper bound on the response body kept for a non-success status.
const MAX_ERROR_BODY_CHARS: usize = 1024;

/// Errors that can occur while fetching the wallets list.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The configured endpoint could not be turned into a request URL
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Connection refused, DNS failure, reset mid-body and similar
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured timeout elapsed
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Server answered with a non-2xx status
    #[error("'{url}' responded with status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Body was not valid JSON
    #[error("Failed to decode response from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl RequestError {
    /// Stable tag for the failure kind, used in logs and serialized output.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::InvalidUrl { .. } => "invalid_url",
            RequestError::ClientBuild { .. } => "client_build",
            RequestError::Connection { .. } => "connection_error",
            RequestError::Timeout { .. } => "timeout",
            RequestError::Status { .. } => "status_error",
            RequestError::Decode { .. } => "decode_error",
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            RequestError::InvalidUrl { url, .. }
            | RequestError::Connection { url, .. }
            | RequestError::Timeout { url }
            | RequestError::Status { url, .. }
            | RequestError::Decode { url, .. } => Some(url),
            RequestError::ClientBuild { .. } => None,
        }
    }

    pub(crate) fn status_body(url: String, status: u16, body: String) -> Self {
        let body = if body.chars().count() > MAX_ERROR_BODY_CHARS {
            body.chars().take(MAX_ERROR_BODY_CHARS).collect()
        } else {
            body
        };
        RequestError::Status { url, status, body }
    }

    pub(crate) fn from_transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            RequestError::Timeout {
                url: url.to_string(),
            }
        } else {
            RequestError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Snapshot of a failed request, as held and rendered by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub kind: String,
    pub message: String,
    pub status: Option<u16>,
    /// `None` only when the client could not be built, so no request URL exists.
    pub url: Option<String>,
}

impl FetchFailure {
    /// Compact JSON form shown in the view.
    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<&RequestError> for FetchFailure {
    fn from(err: &RequestError) -> Self {
        let message = match err {
            RequestError::Status { body, .. } if !body.is_empty() => {
                format!("{}: {}", err, body)
            }
            _ => err.to_string(),
        };
        FetchFailure {
            kind: err.kind().to_string(),
            message,
            status: err.status(),
            url: err.url().map(str::to_string),
        }
    }
}

impl From<RequestError> for FetchFailure {
    fn from(err: RequestError) -> Self {
        FetchFailure::from(&err)
    }
}
