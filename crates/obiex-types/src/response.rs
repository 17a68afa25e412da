//! The Obiex response envelope
//!
//! Every successful response body has the shape
//! `{message, data, errors?, meta?}`. Clients are only ever interested in
//! `data`; `meta` carries pagination info on list endpoints.

use serde::Deserialize;

/// Standard Obiex API response wrapper
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
    /// Result data (present if successful)
    pub data: Option<T>,
    /// Per-field validation errors, if any
    pub errors: Option<Vec<FieldError>>,
    /// Pagination metadata on list endpoints
    pub meta: Option<PageMeta>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the `data` payload, discarding the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// A single field validation error
#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub property: String,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub per_page: u32,
    pub current_page: u32,
    pub total_pages: u32,
    /// Items on this page
    pub count: u64,
    /// Items across all pages
    pub total: u64,
}

/// One page of a list endpoint, with its pagination metadata
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_data() {
        let json = r#"{"message":"ok","data":[1,2,3]}"#;
        let response: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "ok");
        assert_eq!(response.into_data(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_envelope_with_meta() {
        let json = r#"{
            "message": "ok",
            "data": ["a"],
            "meta": {"perPage": 30, "currentPage": 1, "totalPages": 4, "count": 30, "total": 101}
        }"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        let meta = response.meta.unwrap();
        assert_eq!(meta.per_page, 30);
        assert_eq!(meta.total, 101);
    }

    #[test]
    fn test_envelope_with_field_errors() {
        let json = r#"{
            "message": "validation failed",
            "data": null,
            "errors": [{"message": "must be positive", "property": "amount"}]
        }"#;
        let response: ApiResponse<()> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors.unwrap()[0].property, "amount");
    }
}
