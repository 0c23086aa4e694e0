//! Query-parameter construction for paged endpoints.
//!
//! The node hands out an opaque cursor as `pagination.next_key` and expects
//! it back as `pagination.key`; the client passes it through untouched.

use govlens_types::PageRequest;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Maximum page size accepted by public nodes.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Resolve the effective page size, clamped to [1, MAX_PAGE_SIZE].
pub fn effective_limit(page: Option<&PageRequest>) -> u32 {
    page.and_then(|p| p.limit)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Build the `pagination.*` query parameters for a request.
pub fn page_query(page: Option<&PageRequest>) -> Vec<(String, String)> {
    let mut query = vec![(
        "pagination.limit".to_string(),
        effective_limit(page).to_string(),
    )];
    if let Some(page) = page {
        if let Some(key) = &page.key {
            query.push(("pagination.key".to_string(), key.clone()));
        }
        if page.reverse {
            query.push(("pagination.reverse".to_string(), "true".to_string()));
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_when_unspecified() {
        assert_eq!(effective_limit(None), DEFAULT_PAGE_SIZE);
        let page = PageRequest::default();
        assert_eq!(effective_limit(Some(&page)), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_limit_clamped_to_bounds() {
        assert_eq!(effective_limit(Some(&PageRequest::with_limit(0))), 1);
        assert_eq!(
            effective_limit(Some(&PageRequest::with_limit(9999))),
            MAX_PAGE_SIZE
        );
    }

    #[test]
    fn test_query_without_request_has_only_limit() {
        let query = page_query(None);
        assert_eq!(
            query,
            vec![("pagination.limit".to_string(), "50".to_string())]
        );
    }

    #[test]
    fn test_query_passes_cursor_through_opaquely() {
        let page = PageRequest {
            key: Some("AAECAw==".to_string()),
            limit: Some(25),
            reverse: true,
        };
        let query = page_query(Some(&page));
        assert!(query.contains(&("pagination.limit".to_string(), "25".to_string())));
        assert!(query.contains(&("pagination.key".to_string(), "AAECAw==".to_string())));
        assert!(query.contains(&("pagination.reverse".to_string(), "true".to_string())));
    }
}
