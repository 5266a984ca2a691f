//! Anonymous file fetcher.
//!
//! Each fetch goes Connecting (size probe) -> Streaming (body into the local
//! file) -> Done. Fetches run one after another; the first failure stops the
//! run and leaves any partial file on disk.

mod error;
mod probe;
mod stream;

pub use error::FetchError;

use crate::location::{Location, DEFAULT_SCHEME};
use crate::progress::{ProgressReporter, TransferProgress};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Block size for the body copy.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// How locations are turned into transfers and where the files land.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Prepended to each location, e.g. `ftp://`.
    pub scheme: String,
    /// Receive buffer size handed to libcurl.
    pub chunk_size: usize,
    /// Directory the downloaded files are written to.
    pub output_dir: PathBuf,
    /// Connect timeout; `None` waits as long as the OS does.
    pub connect_timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_dir: PathBuf::from("."),
            connect_timeout: None,
        }
    }
}

/// Outcome of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub location: Location,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    options: FetchOptions,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Download `location` into the output directory, overwriting any file of the
    /// same name. Fails before creating the file if the size is not advertised.
    pub fn fetch(
        &self,
        location: &Location,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<FetchReport, FetchError> {
        let raw = location.url(&self.options.scheme);
        let url = url::Url::parse(&raw)
            .map_err(|source| FetchError::InvalidAddress {
                url: raw.clone(),
                source,
            })?
            .to_string();

        let file_name = location
            .file_name()
            .ok_or_else(|| FetchError::NoFileName {
                location: location.to_string(),
            })?;
        let path = self.options.output_dir.join(file_name);

        let total_bytes = probe::probe_size(&url, self.options.connect_timeout)
            .map_err(|source| FetchError::Curl {
                url: url.clone(),
                source,
            })?
            .ok_or_else(|| FetchError::MissingContentLength { url: url.clone() })?;

        tracing::info!("fetching {} ({} bytes) -> {}", url, total_bytes, path.display());
        reporter.started(file_name, total_bytes);

        let bytes = stream::stream_to_file(
            &url,
            &path,
            total_bytes,
            self.options.chunk_size,
            self.options.connect_timeout,
            reporter,
        )?;

        reporter.finished(&TransferProgress {
            bytes_done: bytes,
            total_bytes,
        });
        tracing::info!("fetched {} ({} bytes)", path.display(), bytes);

        Ok(FetchReport {
            location: location.clone(),
            path,
            bytes,
        })
    }
}

/// Fetch every location in order. Stops at the first error; earlier files stay.
pub fn fetch_all(
    fetcher: &Fetcher,
    locations: &[Location],
    reporter: &mut dyn ProgressReporter,
) -> Result<Vec<FetchReport>> {
    let mut reports = Vec::with_capacity(locations.len());
    for (i, location) in locations.iter().enumerate() {
        let report = fetcher
            .fetch(location, reporter)
            .with_context(|| format!("location {} of {}: {}", i + 1, locations.len(), location))?;
        reports.push(report);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;

    #[test]
    fn default_options() {
        let o = FetchOptions::default();
        assert_eq!(o.scheme, "ftp://");
        assert_eq!(o.chunk_size, 8192);
        assert_eq!(o.output_dir, PathBuf::from("."));
        assert!(o.connect_timeout.is_none());
    }

    #[test]
    fn invalid_address_is_rejected_before_connecting() {
        let fetcher = Fetcher::default();
        let err = fetcher
            .fetch(&Location::new("exa mple.org/a.fastq.gz"), &mut NoProgress)
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidAddress { .. }), "{:?}", err);
    }

    #[test]
    fn directory_location_has_no_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(FetchOptions {
            output_dir: dir.path().to_path_buf(),
            ..FetchOptions::default()
        });
        let err = fetcher
            .fetch(&Location::new("ftp.example.org/pub/"), &mut NoProgress)
            .unwrap_err();
        assert!(matches!(err, FetchError::NoFileName { .. }), "{:?}", err);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
