use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a single extraction. The batch loop inspects these as
/// values; none of them propagate past that boundary.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source path does not exist.
    #[error("PDF file not found: {path}")]
    NotFound { path: PathBuf },

    /// Bad request: non-PDF input, malformed page selection, or an input
    /// exceeding the configured limits.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The document could not be opened or a page could not be decoded.
    #[error("failed to decode {path}: {detail}")]
    Decode { path: PathBuf, detail: String },

    /// Filesystem failure while writing outputs or enumerating inputs.
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
