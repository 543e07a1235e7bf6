//! In-memory pagination of already loaded lists

use tracing::debug;
use validator::Validate;

use crate::shared::types::{PaginatedResult, PaginationError, PaginationParams};

/// Cut one page out of `items`.
///
/// Pages past the end of the list produce an empty `items` vector; `total`
/// and `total_pages` still describe the whole list.
pub fn paginate<T: Clone>(
    items: &[T],
    params: &PaginationParams,
) -> Result<PaginatedResult<T>, PaginationError> {
    params.validate()?;

    let total = items.len() as u64;
    let range = params.index_range()?.clamp_to(total);

    debug!(
        page = params.page,
        limit = params.limit,
        start = range.start,
        end = range.end,
        total,
        "Paginating list"
    );

    let page_items = items[range.to_usize_range()].to_vec();
    Ok(PaginatedResult::new(
        page_items,
        total,
        params.page,
        params.limit,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    #[test]
    fn test_first_page() {
        let result = paginate(&numbers(25), &PaginationParams::new(1, 10)).unwrap();
        assert_eq!(result.items, (0..10).collect::<Vec<_>>());
        assert_eq!(result.total, 25);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next());
    }

    #[test]
    fn test_last_partial_page() {
        let result = paginate(&numbers(25), &PaginationParams::new(3, 10)).unwrap();
        assert_eq!(result.items, vec![20, 21, 22, 23, 24]);
        assert!(!result.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let result = paginate(&numbers(25), &PaginationParams::new(9, 10)).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total, 25);
        assert_eq!(result.page, 9);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_empty_list() {
        let result = paginate::<u32>(&[], &PaginationParams::default()).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let err = paginate(&numbers(5), &PaginationParams::new(0, 10)).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = paginate(&numbers(5), &PaginationParams::new(1, 101)).unwrap_err();
        assert!(matches!(err, PaginationError::Validation(_)));
    }

    #[test]
    fn test_result_serializes() {
        let result = paginate(&["a", "b", "c"], &PaginationParams::new(2, 2)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": ["c"],
                "total": 3,
                "page": 2,
                "limit": 2,
                "total_pages": 2
            })
        );
    }
}
