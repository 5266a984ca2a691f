//! Progress reporting for a single fetch (bytes done, percentage).
//!
//! The fetcher pushes snapshots into a [`ProgressReporter`]; the CLI renders
//! them on the terminal, library callers can pass [`NoProgress`].

/// Snapshot of one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    /// Bytes written to the local file so far.
    pub bytes_done: u64,
    /// Size advertised by the server before the body was fetched.
    pub total_bytes: u64,
}

impl TransferProgress {
    /// Fraction of the advertised size received. May exceed 1.0 if the server
    /// under-reported the size; a zero total counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total_bytes == 0 {
            return 1.0;
        }
        self.bytes_done as f64 / self.total_bytes as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// `<bytes, right-aligned to 10>  [<percent, 2 decimals>%]`
    pub fn status_line(&self) -> String {
        format!("{:>10}  [{:3.2}%]", self.bytes_done, self.percent())
    }
}

/// Receives fetch lifecycle events. All methods default to no-ops.
pub trait ProgressReporter {
    /// Size is known and the local file is about to be created.
    fn started(&mut self, _file_name: &str, _total_bytes: u64) {}

    /// A chunk was written.
    fn progress(&mut self, _progress: &TransferProgress) {}

    /// The body was fully received.
    fn finished(&mut self, _progress: &TransferProgress) {}
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {}
