//! Error type for the helpers

use std::path::PathBuf;

/// Errors surfaced by the helpers
///
/// Invalid players and absent game rules never produce an error; those
/// calls quietly do nothing or return a default.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// The maps directory could not be listed
    #[error("Failed to read maps directory {path:?}: {source}")]
    MapsDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A console variable the helper depends on is not registered
    #[error("ConVar not found: {0}")]
    ConVarNotFound(String),

    /// The profile request never got a response
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The profile endpoint answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(#[from] std::io::Error),

    /// The profile document is not well-formed XML
    #[error("Malformed profile XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The profile document has no usable `steamID` element
    #[error("Profile has no player name")]
    MissingName,
}

impl From<ureq::Error> for UtilsError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => UtilsError::Status(code),
            other => UtilsError::Http(other.to_string()),
        }
    }
}

/// Result type for helper operations
pub type UtilsResult<T> = Result<T, UtilsError>;
