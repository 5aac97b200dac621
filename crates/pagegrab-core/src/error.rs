//! Pipeline failure taxonomy.

use crate::fetch::FetchError;
use crate::fs_ops::FsError;

/// Failure of a [`download`](crate::loader::download) run.
///
/// Every stage failure aborts the run: no retries, no local recovery, and
/// assets already written stay on disk for the caller to keep or discard.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input could not be parsed as an absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Page or asset transfer failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Directory creation or file write failed.
    #[error(transparent)]
    Fs(#[from] FsError),
}
