//! Error types

use thiserror::Error;

/// Errors raised by folio-rs outside of plain IO
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid {kind} pattern `{pattern}`: {source}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Unknown type: {0}. Available: post, project, page, draft, feed, route")]
    UnknownListType(String),

    #[error("File already exists: {0}")]
    AlreadyExists(std::path::PathBuf),
}
