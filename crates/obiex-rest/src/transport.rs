//! Signed HTTP transport
//!
//! All endpoint methods funnel through [`Transport`]: it canonicalizes the
//! query, signs the request, injects the `x-api-*` headers, and translates
//! error responses in one place. Endpoint modules never build headers or
//! map errors themselves.

use crate::auth::{Credentials, API_KEY_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::error::{RestError, RestResult};
use crate::query::{build_query_string, strip_empty_params, Params};
use obiex_types::{ApiResponse, Paginated};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Production base URL
pub const PRODUCTION_URL: &str = "https://api.obiex.finance";
/// Staging base URL, selected by sandbox mode
pub const SANDBOX_URL: &str = "https://staging.api.obiex.finance";

/// The signed HTTP transport shared by all endpoint groups
pub(crate) struct Transport {
    http: Client,
    base_url: &'static str,
    credentials: Credentials,
}

impl Transport {
    pub(crate) fn new(http: Client, base_url: &'static str, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    pub(crate) fn base_url(&self) -> &'static str {
        self.base_url
    }

    /// GET, unwrapping the envelope's `data`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params<'_>,
    ) -> RestResult<T> {
        let envelope = self.send(Method::GET, path, params, None).await?;
        unwrap_data(envelope)
    }

    /// GET a list endpoint, keeping the pagination metadata
    pub(crate) async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params<'_>,
    ) -> RestResult<Paginated<T>> {
        let envelope: ApiResponse<Vec<T>> = self.send(Method::GET, path, params, None).await?;
        let meta = envelope.meta;
        let items = envelope
            .data
            .ok_or_else(|| RestError::Parse("no data in response".to_string()))?;
        Ok(Paginated { items, meta })
    }

    /// POST a JSON body, unwrapping the envelope's `data`
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> RestResult<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let body =
            serde_json::to_value(body).map_err(|e| RestError::Parse(e.to_string()))?;
        let envelope = self.send(Method::POST, path, Vec::new(), Some(body)).await?;
        unwrap_data(envelope)
    }

    /// POST without a body, discarding the response payload
    pub(crate) async fn post_empty(&self, path: &str) -> RestResult<()> {
        let _: ApiResponse<Value> = self.send(Method::POST, path, Vec::new(), None).await?;
        Ok(())
    }

    /// PUT without a body, unwrapping the envelope's `data`
    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let envelope = self.send(Method::PUT, path, Vec::new(), None).await?;
        unwrap_data(envelope)
    }

    /// Sign and send one request, translating error responses
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Params<'_>,
        body: Option<Value>,
    ) -> RestResult<ApiResponse<T>> {
        let canonical = canonical_path(path, params);
        let signed = self.credentials.sign(method.as_str(), &canonical)?;
        let url = format!("{}{}", self.base_url, canonical);

        debug!(%method, path = %canonical, "sending signed request");

        let mut request = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(TIMESTAMP_HEADER, signed.timestamp.to_string())
            .header(SIGNATURE_HEADER, &signed.signature);

        if let Some(body) = body {
            // .json() also sets Content-Type: application/json
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if let Err(transport_err) = response.error_for_status_ref() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(match translate_error_body(status, &bytes) {
                Some(api_err) => api_err,
                // No structured body: surface the transport failure unchanged
                None => RestError::Http(transport_err),
            });
        }

        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Build the path-with-query the signature covers
///
/// Empty values are stripped first (mandatory, before query construction);
/// the remaining parameters keep the caller's order.
fn canonical_path(path: &str, params: Params<'_>) -> String {
    let params = strip_empty_params(params);
    let query = build_query_string(&params);

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Translate a non-2xx response body into a structured API error
///
/// Returns `None` when the body is not a JSON object, in which case the
/// caller propagates the underlying transport failure.
fn translate_error_body(status: StatusCode, body: &[u8]) -> Option<RestError> {
    let parsed: Value = serde_json::from_slice(body).ok()?;
    let object = parsed.as_object()?;

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("request failed")
        .to_string();
    let data = object.get("data").cloned().unwrap_or(Value::Null);

    Some(RestError::Api {
        message,
        data,
        status_code: status.as_u16(),
    })
}

fn unwrap_data<T>(envelope: ApiResponse<T>) -> RestResult<T> {
    envelope
        .into_data()
        .ok_or_else(|| RestError::Parse("no data in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_path_without_params() {
        assert_eq!(canonical_path("/v1/currencies", Vec::new()), "/v1/currencies");
    }

    #[test]
    fn test_canonical_path_with_params() {
        let path = canonical_path(
            "/v1/transactions/me",
            vec![("page", json!(1)), ("pageSize", json!(30))],
        );
        assert_eq!(path, "/v1/transactions/me?page=1&pageSize=30");
    }

    #[test]
    fn test_canonical_path_strips_before_building() {
        let path = canonical_path(
            "/v1/transactions/me",
            vec![("page", json!(1)), ("category", json!(null))],
        );
        assert_eq!(path, "/v1/transactions/me?page=1");
    }

    #[test]
    fn test_all_params_empty_means_no_query() {
        let path = canonical_path("/v1/currencies", vec![("a", json!("")), ("b", json!(null))]);
        assert_eq!(path, "/v1/currencies");
    }

    #[test]
    fn test_structured_error_is_translated() {
        let body = br#"{"message": "not found", "data": {"id": "t-1"}}"#;
        let err = translate_error_body(StatusCode::NOT_FOUND, body).unwrap();

        match err {
            RestError::Api {
                message,
                data,
                status_code,
            } => {
                assert_eq!(status_code, 404);
                assert_eq!(message, "not found");
                assert_eq!(data, json!({"id": "t-1"}));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_unstructured_body_is_not_translated() {
        assert!(translate_error_body(StatusCode::BAD_GATEWAY, b"<html>oops</html>").is_none());
        assert!(translate_error_body(StatusCode::BAD_GATEWAY, b"").is_none());
        // A bare JSON scalar is not a structured error body either
        assert!(translate_error_body(StatusCode::BAD_GATEWAY, b"\"oops\"").is_none());
    }

    #[test]
    fn test_error_body_without_message_gets_a_default() {
        let err = translate_error_body(StatusCode::INTERNAL_SERVER_ERROR, br#"{"data": null}"#)
            .unwrap();
        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("request failed"));
    }

    #[test]
    fn test_unwrap_data_requires_data() {
        let envelope: ApiResponse<u32> = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(matches!(unwrap_data(envelope), Err(RestError::Parse(_))));
    }
}
