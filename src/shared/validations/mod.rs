use crate::config::PaginationConfig;

/// Normalize optional page/limit input against the configured bounds.
///
/// Missing or zero `page` becomes 1, missing `limit` takes the configured
/// default and any `limit` is clamped into `1..=max_page_size`.
pub fn validate_pagination(
    page: Option<u64>,
    limit: Option<u64>,
    config: &PaginationConfig,
) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit
        .unwrap_or(u64::from(config.default_page_size))
        .clamp(1, u64::from(config.max_page_size.max(1)));
    (page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = PaginationConfig::default();
        assert_eq!(validate_pagination(None, None, &config), (1, 50));
    }

    #[test]
    fn test_out_of_range_clamped() {
        let config = PaginationConfig {
            default_page_size: 20,
            max_page_size: 30,
        };
        assert_eq!(validate_pagination(Some(0), Some(0), &config), (1, 1));
        assert_eq!(validate_pagination(Some(5), Some(500), &config), (5, 30));
        assert_eq!(validate_pagination(Some(2), None, &config), (2, 20));
    }
}
