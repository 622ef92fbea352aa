//! Shared wire types: the response envelope and pagination metadata.
//!
//! Every enveloped endpoint returns `{ data, pagination?, message? }`; the
//! shape is validated once here, at the transport boundary, instead of being
//! picked apart ad hoc by every caller.

use serde::{Deserialize, Serialize};

/// The backend's standard response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_leads: u64,
    pub limit: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_leads: 0,
            limit: crate::config::DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of a listed resource: the rows plus the pagination metadata the
/// backend sent alongside them.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_decodes_data_and_pagination() {
        let body = json!({
            "data": [1, 2, 3],
            "pagination": {
                "currentPage": 2,
                "totalPages": 5,
                "totalLeads": 93,
                "limit": 20
            }
        });
        let envelope: Envelope<Vec<u32>> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
        let page = envelope.pagination.unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_leads, 93);
        // totalPages is consistent with ceil(totalLeads / limit)
        assert_eq!(
            page.total_pages as u64,
            (page.total_leads + page.limit as u64 - 1) / page.limit as u64
        );
    }

    #[test]
    fn envelope_tolerates_missing_pagination_and_message() {
        let body = json!({ "data": { "ok": true } });
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert!(envelope.pagination.is_none());
        assert!(envelope.message.is_none());
    }
}
