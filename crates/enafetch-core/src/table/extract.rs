//! Location extraction from the designated table column.

use super::{ExtractError, Table};
use crate::location::Location;

/// Column holding the FTP addresses in an archive-export table (`fastq_ftp`).
pub const DEFAULT_LOCATION_COLUMN: usize = 10;

/// Which column holds the locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// 0-based column index.
    Index(usize),
    /// Exact header cell text, resolved against row 0.
    Header(String),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        ColumnSelector::Index(DEFAULT_LOCATION_COLUMN)
    }
}

impl ColumnSelector {
    /// Resolve to a 0-based column index for `table`.
    pub fn resolve(&self, table: &Table) -> Result<usize, ExtractError> {
        match self {
            ColumnSelector::Index(i) => Ok(*i),
            ColumnSelector::Header(name) => {
                let header = table.header().ok_or(ExtractError::EmptyTable)?;
                header
                    .iter()
                    .position(|cell| cell == name)
                    .ok_or_else(|| ExtractError::UnknownHeader { name: name.clone() })
            }
        }
    }
}

/// Collect the locations of every data row, in row order.
///
/// A field containing `;` holds exactly two locations, kept in split order.
pub fn extract_locations(
    table: &Table,
    selector: &ColumnSelector,
) -> Result<Vec<Location>, ExtractError> {
    let column = selector.resolve(table)?;
    let mut locations = Vec::new();
    for (row, cells) in table.data_rows() {
        let value = cells.get(column).ok_or(ExtractError::MissingColumn {
            row,
            column,
            found: cells.len(),
        })?;
        match value.split_once(';') {
            Some((first, second)) => {
                if second.contains(';') {
                    return Err(ExtractError::TooManyLocations {
                        row,
                        count: value.split(';').count(),
                    });
                }
                locations.push(non_empty(first, row)?);
                locations.push(non_empty(second, row)?);
            }
            None => locations.push(non_empty(value, row)?),
        }
    }
    tracing::debug!("extracted {} locations from column {}", locations.len(), column);
    Ok(locations)
}

fn non_empty(part: &str, row: usize) -> Result<Location, ExtractError> {
    if part.is_empty() {
        return Err(ExtractError::EmptyLocation { row });
    }
    Ok(Location::new(part))
}
