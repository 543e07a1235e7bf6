//! # page-range
//!
//! Pagination index arithmetic: maps a 1-based page number and a page size to
//! the half-open `[start, end)` slice of a list.
//!
//! ## Layout
//!
//! - **shared**: core types, errors and parameter normalization
//! - **application**: in-memory pagination of loaded lists
//! - **config**: TOML configuration
//! - **logging**: tracing subscriber setup

pub mod application;
pub mod config;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig, LoggingConfig, PaginationConfig};

pub use application::paginate;
pub use logging::{init_tracing, LogFormat};
pub use shared::types::{
    index_range, AppError, ConfigError, IndexRange, PaginatedResult, PaginationError,
    PaginationParams,
};
pub use shared::validations::validate_pagination;
