//! CLI for enafetch: table in, files out.

mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use enafetch_core::config::{self, EnafetchConfig};
use enafetch_core::{
    extract_locations, fetch_all, ColumnSelector, FetchOptions, Fetcher, Location, Table,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub use terminal::TerminalProgress;

/// Download every file listed in an archive-export table.
#[derive(Debug, Parser)]
#[command(name = "enafetch")]
#[command(about = "Download the FASTQ files listed in an archive-export table", long_about = None)]
pub struct Cli {
    /// Tab-separated table, e.g. an ENA project file report.
    pub table: PathBuf,

    /// 0-based column holding the file locations (default from config, 10).
    #[arg(short, long, value_name = "N", conflicts_with = "header")]
    pub column: Option<usize>,

    /// Pick the location column by header name instead of index.
    #[arg(long, value_name = "NAME")]
    pub header: Option<String>,

    /// Directory to write the downloaded files to (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the extracted locations and exit without downloading.
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Flags win over the config file.
    pub fn column_selector(&self, cfg: &EnafetchConfig) -> ColumnSelector {
        if let Some(name) = &self.header {
            return ColumnSelector::Header(name.clone());
        }
        if let Some(index) = self.column {
            return ColumnSelector::Index(index);
        }
        cfg.column_selector()
    }

    pub fn fetch_options(&self, cfg: &EnafetchConfig) -> FetchOptions {
        let mut options = cfg.fetch_options();
        if let Some(dir) = &self.output_dir {
            options.output_dir = dir.clone();
        }
        options
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    run(&cli, &cfg, &mut io::stdout())
}

/// One location per line, in extraction order.
pub fn write_locations(out: &mut dyn Write, locations: &[Location]) -> io::Result<()> {
    for location in locations {
        writeln!(out, "{}", location)?;
    }
    out.flush()
}

/// Listing and progress go to `out`.
pub fn run(cli: &Cli, cfg: &EnafetchConfig, out: &mut dyn Write) -> Result<()> {
    let selector = cli.column_selector(cfg);
    let locations = {
        let table = Table::load(&cli.table)?;
        extract_locations(&table, &selector)
            .with_context(|| format!("reading locations from {}", cli.table.display()))?
    };
    tracing::info!(
        "{} locations in {} ({:?})",
        locations.len(),
        cli.table.display(),
        selector
    );

    if cli.list {
        write_locations(out, &locations)?;
        return Ok(());
    }

    let options = cli.fetch_options(cfg);
    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("create output dir {}", options.output_dir.display()))?;
    let fetcher = Fetcher::new(options);
    let mut progress = TerminalProgress::new(out);
    let reports = fetch_all(&fetcher, &locations, &mut progress)?;
    let total: u64 = reports.iter().map(|r| r.bytes).sum();
    tracing::info!("downloaded {} files, {} bytes", reports.len(), total);
    Ok(())
}
