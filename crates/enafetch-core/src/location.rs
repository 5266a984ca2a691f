//! Remote file locations and local filename derivation.

use std::fmt;

/// Scheme prepended to every location at fetch time.
pub const DEFAULT_SCHEME: &str = "ftp://";

/// Scheme-less remote address, e.g. `ftp.sra.ebi.ac.uk/vol1/fastq/SRR000/SRR000001/SRR000001_1.fastq.gz`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(address: impl Into<String>) -> Self {
        Location(address.into())
    }

    pub fn address(&self) -> &str {
        &self.0
    }

    /// Full address with `scheme` (e.g. `ftp://`) prepended.
    pub fn url(&self, scheme: &str) -> String {
        format!("{}{}", scheme, self.0)
    }

    /// Local filename: the text after the last `/`.
    ///
    /// Returns `None` when that segment is empty, `.` or `..`, since none of
    /// those can name a file in the output directory.
    pub fn file_name(&self) -> Option<&str> {
        let segment = match self.0.rfind('/') {
            Some(i) => &self.0[i + 1..],
            None => self.0.as_str(),
        };
        if segment.is_empty() || segment == "." || segment == ".." {
            return None;
        }
        Some(segment)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
