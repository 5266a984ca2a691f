pub mod config;
pub mod logging;

pub mod fetch;
pub mod location;
pub mod progress;
pub mod table;

pub use fetch::{fetch_all, FetchError, FetchOptions, FetchReport, Fetcher};
pub use location::Location;
pub use progress::{NoProgress, ProgressReporter, TransferProgress};
pub use table::{extract_locations, ColumnSelector, Table};
