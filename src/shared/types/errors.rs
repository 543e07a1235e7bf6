use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Invalid argument: {name} must be at least 1, got {value}")]
    InvalidArgument { name: &'static str, value: u64 },

    #[error("Page size {page_size} exceeds the maximum of {max}")]
    PageSizeTooLarge { page_size: u64, max: u64 },

    #[error("Page {page} with page size {page_size} is out of range")]
    Overflow { page: u64, page_size: u64 },

    #[error("Validation: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl PaginationError {
    /// Whether the caller passed a bad `page`/`page_size` (as opposed to an
    /// unrepresentable range).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PaginationError::InvalidArgument { .. }
                | PaginationError::PageSizeTooLarge { .. }
                | PaginationError::Validation(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
