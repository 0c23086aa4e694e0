//! Pagination shapes shared by list endpoints.

use serde::{Deserialize, Serialize};

/// Client-side pagination request, mapped onto `pagination.*` query
/// parameters by the RPC layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Opaque cursor from a previous response (`pagination.next_key`).
    #[serde(default)]
    pub key: Option<String>,
    /// Items per page. The RPC layer clamps and defaults this.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Newest-first ordering.
    #[serde(default)]
    pub reverse: bool,
}

impl PageRequest {
    /// A request for the first page with an explicit page size.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// The follow-up request for the page after `response`, if there is one.
    pub fn next(&self, response: &PageResponse) -> Option<PageRequest> {
        response.next_key.as_ref().map(|key| PageRequest {
            key: Some(key.clone()),
            ..self.clone()
        })
    }
}

/// Pagination metadata returned by list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Cursor for the next page; absent on the last page.
    #[serde(default)]
    pub next_key: Option<String>,
    /// Total item count, when the node reports it (decimal string).
    #[serde(default)]
    pub total: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_carries_cursor_and_settings() {
        let first = PageRequest {
            limit: Some(20),
            reverse: true,
            ..PageRequest::default()
        };
        let response = PageResponse {
            next_key: Some("b2Zmc2V0PTIw".to_string()),
            total: Some("57".to_string()),
        };
        let next = first.next(&response).unwrap();
        assert_eq!(next.key.as_deref(), Some("b2Zmc2V0PTIw"));
        assert_eq!(next.limit, Some(20));
        assert!(next.reverse);
    }

    #[test]
    fn test_next_is_none_on_last_page() {
        let request = PageRequest::with_limit(10);
        assert!(request.next(&PageResponse::default()).is_none());
    }
}
