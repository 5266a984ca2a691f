//! Fetch error type.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned by a single fetch. None of these are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Scheme + location does not parse as a URL.
    #[error("invalid address {url}")]
    InvalidAddress {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The location has no usable last path segment to name the local file.
    #[error("cannot derive a local file name from {location}")]
    NoFileName { location: String },
    /// libcurl failed: unreachable host, refused login, missing remote file, etc.
    #[error("transfer of {url} failed")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server did not report the file size; nothing was written.
    #[error("{url} did not report a content length")]
    MissingContentLength { url: String },
    /// Creating or writing the local file failed.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The body ended before the advertised size was reached.
    #[error("partial transfer of {url}: expected {expected} bytes, got {received}")]
    ShortTransfer {
        url: String,
        expected: u64,
        received: u64,
    },
}
