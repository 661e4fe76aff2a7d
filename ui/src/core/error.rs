//! Error types for dataset loading.

use thiserror::Error;

/// Result alias used by the loader.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Failure to fetch or parse one of the input datasets. Any of these keeps the
/// dashboard on its title slide.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The HTTP request failed or returned a non-success status.
    #[error("failed to fetch {location}: {reason}")]
    Http { location: String, reason: String },

    /// Reading a local dataset file failed.
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be decoded into a record.
    #[error("malformed {dataset} data at row {row}: {reason}")]
    Parse {
        dataset: &'static str,
        row: u64,
        reason: String,
    },

    /// The header row is missing or unreadable.
    #[error("malformed {dataset} header: {reason}")]
    Header {
        dataset: &'static str,
        reason: String,
    },
}
