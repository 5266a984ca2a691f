//! Error types for table loading and location extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the table file from disk.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to pull locations out of a loaded table.
///
/// `row` is the 0-based row index in the table (row 0 is the header).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The table has no header row to resolve a column name against.
    #[error("table is empty")]
    EmptyTable,
    /// No header cell matches the requested column name.
    #[error("no column named {name:?} in header")]
    UnknownHeader { name: String },
    /// A row is shorter than the selected column index.
    #[error("row {row} has {found} columns, location column {column} is missing")]
    MissingColumn {
        row: usize,
        column: usize,
        found: usize,
    },
    /// More than two `;`-joined locations in one field.
    #[error("row {row} packs {count} locations into one field, at most 2 are supported")]
    TooManyLocations { row: usize, count: usize },
    /// The field (or one half of a `;` pair) is empty.
    #[error("row {row} has an empty location")]
    EmptyLocation { row: usize },
}
