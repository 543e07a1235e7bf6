//! Configuration module
//!
//! Settings are read from a TOML file. Every section and key is optional:
//!
//! ```toml
//! [pagination]
//! default_page_size = 50
//! max_page_size = 100
//!
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::types::{ConfigError, PaginationError, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

/// Pagination defaults and bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when none is given
    pub default_page_size: u32,
    /// Upper bound for any requested page size
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size < 1 {
            return Err(ConfigError::Invalid(
                "pagination.max_page_size must be at least 1".to_string(),
            ));
        }
        if self.default_page_size < 1 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "pagination.default_page_size must be between 1 and {}, got {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }

    /// Reject page sizes above `max_page_size`.
    pub fn check_page_size(&self, page_size: u64) -> Result<(), PaginationError> {
        let max = u64::from(self.max_page_size);
        if page_size > max {
            return Err(PaginationError::PageSizeTooLarge { page_size, max });
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format: "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pagination.validate()
    }
}

/// `<user config dir>/page-range/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("page-range").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pagination.default_page_size, 50);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [pagination]
            default_page_size = 25

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_default_above_max_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [pagination]
            default_page_size = 200
            max_page_size = 100
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_max_rejected() {
        let config = PaginationConfig {
            default_page_size: 0,
            max_page_size: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_check_page_size() {
        let config = PaginationConfig::default();
        assert!(config.check_page_size(100).is_ok());
        let err = config.check_page_size(101).unwrap_err();
        assert!(matches!(
            err,
            PaginationError::PageSizeTooLarge {
                page_size: 101,
                max: 100
            }
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[pagination\nmax_page_size = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/page-range/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_config_path_file_name() {
        let path = default_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
    }
}
