//! Tab-separated archive-export tables.
//!
//! Rows are split on `\n` and columns on `\t` with no trimming and no
//! quoting rules. Row 0 is the header.

mod error;
mod extract;

pub use error::{ExtractError, TableError};
pub use extract::{extract_locations, ColumnSelector, DEFAULT_LOCATION_COLUMN};

use std::fs;
use std::path::Path;

/// Fully materialized table: ordered rows of ordered column strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read and split the file at `path`. Invalid UTF-8 is replaced, not rejected.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let bytes = fs::read(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&String::from_utf8_lossy(&bytes));
        tracing::debug!("loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Split `text` into rows and columns. Ragged rows are kept as-is.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows, including the header and a trailing empty row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.row(0)
    }

    /// Data rows with their table index: everything after the header, minus the
    /// empty row a trailing newline leaves behind. A file that does not end in a
    /// newline keeps its last record.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        let end = match self.rows.last() {
            Some(last) if is_blank_row(last) => self.rows.len() - 1,
            _ => self.rows.len(),
        };
        self.rows
            .iter()
            .enumerate()
            .take(end)
            .skip(1)
            .map(|(i, row)| (i, row.as_slice()))
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.len() == 1 && row[0].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_splits_rows_and_columns_exactly() {
        let t = Table::parse("a\tb\n c \t\td\n");
        assert_eq!(t.len(), 3);
        assert_eq!(t.row(0).unwrap(), ["a", "b"]);
        assert_eq!(t.row(1).unwrap(), [" c ", "", "d"]);
        assert_eq!(t.row(2).unwrap(), [""]);
    }

    #[test]
    fn parse_keeps_ragged_rows() {
        let t = Table::parse("h1\th2\th3\nx\ny\tz\n");
        assert_eq!(t.row(1).unwrap().len(), 1);
        assert_eq!(t.row(2).unwrap().len(), 2);
    }

    #[test]
    fn data_rows_skip_header_and_trailing_newline() {
        let t = Table::parse("h\nr1\nr2\n");
        let idx: Vec<usize> = t.data_rows().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![1, 2]);
    }

    #[test]
    fn data_rows_keep_last_record_without_trailing_newline() {
        let t = Table::parse("h\nr1\nr2");
        let idx: Vec<usize> = t.data_rows().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![1, 2]);
    }

    #[test]
    fn data_rows_header_only() {
        assert_eq!(Table::parse("h\n").data_rows().count(), 0);
        assert_eq!(Table::parse("h").data_rows().count(), 0);
        assert_eq!(Table::parse("").data_rows().count(), 0);
    }

    #[test]
    fn load_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"run_accession\tfastq_ftp\nSRR1\thost/a.gz\n").unwrap();
        f.flush().unwrap();
        let t = Table::load(f.path()).unwrap();
        assert_eq!(t.header().unwrap(), ["run_accession", "fastq_ftp"]);
        assert_eq!(t.data_rows().count(), 1);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.tsv");
        match Table::load(&missing) {
            Err(TableError::Read { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
