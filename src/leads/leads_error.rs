use std::path::PathBuf;
use thiserror::Error;

/// Longest response body kept in an [`LeadsError::Http`] message.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum LeadsError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{service} HTTP {status}: {body}")]
    Http {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),

    #[error("No business data with phone numbers found in {region}")]
    EmptyResult { region: String },

    #[error("Spreadsheet error: {0}")]
    Serialization(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LeadsError {
    /// Non-2xx answer from `service`. Error pages can be long HTML documents,
    /// so only the first [`MAX_ERROR_BODY_CHARS`] characters are kept.
    pub fn http(service: &'static str, status: u16, body: &str) -> Self {
        let body = match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.to_string(),
        };

        LeadsError::Http {
            service,
            status,
            body,
        }
    }

    /// Empty results are reported to the operator as a warning, not a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, LeadsError::EmptyResult { .. })
    }
}
