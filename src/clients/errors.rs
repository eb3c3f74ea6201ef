use rspotify::{ClientError, http::HttpError};
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong fetching or summarizing a playlist
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog could not be reached or refused our credentials
    #[error("Catalog unavailable: {reason}")]
    CatalogUnavailable {
        /// Underlying client error
        reason: String,
        /// Worth retrying: transport errors, 429 and 5xx
        transient: bool,
    },

    /// The catalog has no playlist with this id
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// A statistic was asked of an empty track list
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// More artist ids in one lookup than the catalog accepts
    #[error("Artist lookup of {0} ids exceeds the catalog batch limit")]
    BatchTooLarge(usize),

    /// Missing credentials or bad settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unreadable snapshot or unserializable output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File or socket failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether retrying the failed catalog call may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::CatalogUnavailable {
                transient: true,
                ..
            }
        )
    }
}

/// HTTP status carried by a catalog client error, if the catalog answered at all
pub fn http_status(err: &ClientError) -> Option<u16> {
    match err {
        ClientError::Http(http) => match http.as_ref() {
            HttpError::StatusCode(response) => Some(response.status().as_u16()),
            _ => None,
        },
        _ => None,
    }
}

impl From<ClientError> for Error {
    fn from(err: ClientError) -> Self {
        let transient = match &err {
            ClientError::Http(_) => {
                http_status(&err).is_none_or(|status| status == 429 || status >= 500)
            }
            ClientError::Io(_) => true,
            _ => false,
        };
        Error::CatalogUnavailable {
            reason: err.to_string(),
            transient,
        }
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}
