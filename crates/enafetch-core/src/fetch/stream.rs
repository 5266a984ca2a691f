//! Single-stream body download into a truncated local file.

use super::FetchError;
use crate::progress::{ProgressReporter, TransferProgress};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Streams `url` into `path` (created or truncated), reporting after every chunk.
/// Returns the number of bytes written. On failure the partial file stays on disk.
pub(crate) fn stream_to_file(
    url: &str,
    path: &Path,
    total_bytes: u64,
    chunk_size: usize,
    connect_timeout: Option<Duration>,
    reporter: &mut dyn ProgressReporter,
) -> Result<u64, FetchError> {
    let curl_err = |source: curl::Error| FetchError::Curl {
        url: url.to_string(),
        source,
    };
    let write_err = |source: io::Error| FetchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.fail_on_error(true).map_err(curl_err)?;
    easy.buffer_size(chunk_size).map_err(curl_err)?;
    if let Some(timeout) = connect_timeout {
        easy.connect_timeout(timeout).map_err(curl_err)?;
    }

    let mut file = File::create(path).map_err(write_err)?;
    let mut bytes_done = 0u64;
    let mut write_error: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                if let Err(e) = file.write_all(data) {
                    tracing::warn!("write to {} failed: {}", path.display(), e);
                    write_error = Some(e);
                    return Ok(0); // abort transfer
                }
                bytes_done += data.len() as u64;
                reporter.progress(&TransferProgress {
                    bytes_done,
                    total_bytes,
                });
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform()
    };

    if let Some(source) = write_error {
        return Err(write_err(source));
    }
    performed.map_err(curl_err)?;

    if bytes_done < total_bytes {
        return Err(FetchError::ShortTransfer {
            url: url.to_string(),
            expected: total_bytes,
            received: bytes_done,
        });
    }
    if bytes_done > total_bytes {
        tracing::warn!(
            "{} sent {} bytes, {} were advertised",
            url,
            bytes_done,
            total_bytes
        );
    }
    Ok(bytes_done)
}
