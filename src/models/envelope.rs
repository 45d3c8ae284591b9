//! Marketplace API response envelope

use serde::{Deserialize, Serialize};

/// `{statusCode, success, message, data, meta?}` wrapper used by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl PageMeta {
    /// Meta used when the API omits it
    pub fn empty(limit: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            limit,
            total_pages: 1,
        }
    }

    /// `totalPages` when present, otherwise derived from `total / limit`
    pub fn effective_total_pages(&self) -> u32 {
        if self.total_pages > 0 {
            return self.total_pages;
        }
        if self.limit == 0 {
            return 1;
        }
        (self.total.div_ceil(u64::from(self.limit)) as u32).max(1)
    }
}

/// Body of a failed marketplace call; only the message is used
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_fallback() {
        let meta = PageMeta {
            total: 21,
            page: 1,
            limit: 10,
            total_pages: 0,
        };
        assert_eq!(meta.effective_total_pages(), 3);

        let meta = PageMeta {
            total_pages: 7,
            ..meta
        };
        assert_eq!(meta.effective_total_pages(), 7);

        assert_eq!(PageMeta::empty(10).effective_total_pages(), 1);
    }

    #[test]
    fn test_envelope_with_null_data() {
        let envelope: ApiResponse<Option<serde_json::Value>> = serde_json::from_str(
            r#"{"statusCode":200,"success":true,"message":"ok","data":null}"#,
        )
        .unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.meta.is_none());
    }
}
