//! page-range CLI
//!
//! Prints the zero-indexed, half-open `[start, end)` range for a page.
//!
//! ```sh
//! # Third page of 15 items -> "30 45"
//! index-range --page 3 --page-size 15
//!
//! # Use the configured default page size, report against a list of 52 items
//! index-range --page 2 --total 52 --json
//!
//! # Validate config without computing anything
//! index-range --check --config /etc/page-range/config.toml
//! ```
//!
//! Exit status: 0 on success, 2 for bad page/page-size input, 1 otherwise.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info};

use page_range::shared::types::total_pages;
use page_range::{
    default_config_path, index_range, init_tracing, AppConfig, AppError, ConfigError,
    IndexRange, PaginationConfig,
};

/// Compute the index range of a page within a list.
#[derive(Parser, Debug)]
#[command(
    name = "index-range",
    version,
    about = "Compute pagination start/end indexes",
    long_about = "Maps a 1-based page number and a page size to the zero-indexed, \
                  half-open [start, end) range of list indexes on that page."
)]
struct Cli {
    /// Page number, starting at 1.
    #[arg(short, long, required_unless_present = "check")]
    page: Option<u64>,

    /// Items per page. Defaults to `pagination.default_page_size` from the config.
    #[arg(short = 's', long)]
    page_size: Option<u64>,

    /// Length of the list being paged; also reports the clamped range and page count.
    #[arg(short, long)]
    total: Option<u64>,

    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PAGE_RANGE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

/// What to do when the config file could not be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadFailure {
    /// No file at the default location; defaults are expected
    Silent,
    /// Log the error and continue with defaults
    UseDefaults,
    /// Stop with the error
    Abort,
}

fn classify_load_error(err: &ConfigError, explicit_path: bool, check: bool) -> LoadFailure {
    if check {
        return LoadFailure::Abort;
    }
    match err {
        ConfigError::Io(e) if !explicit_path && e.kind() == io::ErrorKind::NotFound => {
            LoadFailure::Silent
        }
        _ => LoadFailure::UseDefaults,
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Report {
    page: u64,
    page_size: u64,
    start: u64,
    end: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clamped: Option<IndexRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_pages: Option<u32>,
}

fn compute(
    page: u64,
    page_size: Option<u64>,
    total: Option<u64>,
    config: &PaginationConfig,
) -> Result<Report, AppError> {
    let page_size = page_size.unwrap_or(u64::from(config.default_page_size));
    config.check_page_size(page_size)?;

    let range = index_range(page, page_size)?;
    debug!(page, page_size, start = range.start, end = range.end, "Computed index range");

    Ok(Report {
        page,
        page_size,
        start: range.start,
        end: range.end,
        total,
        clamped: total.map(|t| range.clamp_to(t)),
        total_pages: total.map(|t| total_pages(t, page_size)),
    })
}

fn render_text(report: &Report) -> String {
    let mut out = format!("{} {}", report.start, report.end);
    if let (Some(total), Some(clamped), Some(pages)) =
        (report.total, report.clamped, report.total_pages)
    {
        out.push_str(&format!(
            "\nclamped: {} {} (page {} of {}, {} items)",
            clamped.start, clamped.end, report.page, pages, total
        ));
    }
    out
}

fn exit_status(err: &(dyn Error + 'static)) -> u8 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Pagination(e)) if e.is_invalid_argument() => 2,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // Init tracing after overrides so the CLI level takes effect
    init_tracing(&config.logging);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => match classify_load_error(&e, cli.config.is_some(), cli.check) {
            LoadFailure::Silent => {
                debug!("No config at {}, using defaults", config_path.display())
            }
            LoadFailure::UseDefaults => {
                error!("Failed to load config from {}: {}", config_path.display(), e);
                error!("Using default configuration.");
            }
            LoadFailure::Abort => {
                error!("Failed to load config from {}: {}", config_path.display(), e);
                return Err(AppError::from(e).into());
            }
        },
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file       : {}", config_path.display());
        println!("   Default page size : {}", config.pagination.default_page_size);
        println!("   Max page size     : {}", config.pagination.max_page_size);
        println!("   Log level         : {}", config.logging.level);
        return Ok(());
    }

    // clap enforces --page outside --check; 0 is rejected by index_range
    let page = cli.page.unwrap_or(0);
    let report = compute(page, cli.page_size, cli.total, &config.pagination)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&report));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_status(e.as_ref()))
        }
    }
}
