//! In-place terminal progress.

use enafetch_core::{ProgressReporter, TransferProgress};
use std::io::Write;

const BACKSPACE: char = '\x08';

/// Prints `Downloading: <name> Bytes: <size>` per file, then keeps rewriting a
/// single status line by backing the cursor over it after each chunk.
pub struct TerminalProgress<W: Write> {
    out: W,
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Output errors (e.g. a closed pipe) never abort a download.
impl<W: Write> ProgressReporter for TerminalProgress<W> {
    fn started(&mut self, file_name: &str, total_bytes: u64) {
        let _ = writeln!(self.out, "Downloading: {} Bytes: {}", file_name, total_bytes);
    }

    fn progress(&mut self, progress: &TransferProgress) {
        let status = progress.status_line();
        let rewind: String = std::iter::repeat(BACKSPACE).take(status.len() + 1).collect();
        let _ = write!(self.out, "{}{}", status, rewind);
        let _ = self.out.flush();
    }

    fn finished(&mut self, progress: &TransferProgress) {
        let _ = writeln!(self.out, "{}", progress.status_line());
        let _ = self.out.flush();
    }
}
