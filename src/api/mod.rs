//! REST API Client
//!
//! Typed wrappers over the backend's JSON endpoints, organized by resource.
//! Every request carries the session cookie; any non-2xx response or
//! transport failure surfaces as an `ApiError` for the caller to handle.

mod analytics;
mod auth;
mod contacts;
mod deals;
mod seed;
mod tasks;

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

// Re-export all public items
pub use analytics::*;
pub use auth::*;
pub use contacts::*;
pub use deals::*;
pub use seed::*;
pub use tasks::*;

/// Fixed prefix the backend mounts its routes under
const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: the request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Characters kept verbatim in query values; everything else is escaped
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Filter query-string builder; absent and empty values are omitted
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.pairs.push((key, value.to_string()));
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, utf8_percent_encode(value, QUERY_ENCODE))?;
        }
        Ok(())
    }
}

fn network_err(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// FastAPI-style error bodies carry a `detail` field worth surfacing
fn error_detail(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("request failed with status {}", status)
            } else {
                body.to_string()
            }
        })
}

async fn send(method: &str, path: &str, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", API_BASE, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(network_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network_err)?;

    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".to_string()))?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = read_text(&response).await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        detail: error_detail(&body, status),
    })
}

async fn read_text(response: &Response) -> Option<String> {
    let promise = response.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let promise = response.json().map_err(network_err)?;
    let value = JsFuture::from(promise).await.map_err(network_err)?;
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    decode_json(send("GET", path, None).await?).await
}

pub(crate) async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> ApiResult<T> {
    let body = serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    decode_json(send("POST", path, Some(body)).await?).await
}

pub(crate) async fn put_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> ApiResult<T> {
    let body = serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    decode_json(send("PUT", path, Some(body)).await?).await
}

/// POST with no body where the caller only cares about success
pub(crate) async fn post_empty(path: &str) -> ApiResult<()> {
    send("POST", path, None).await?;
    Ok(())
}

/// POST with no body, decoding the JSON response
pub(crate) async fn post_for_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    decode_json(send("POST", path, None).await?).await
}

pub(crate) async fn delete(path: &str) -> ApiResult<()> {
    send("DELETE", path, None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_renders_nothing() {
        let query = Query::new();
        assert_eq!(query.to_string(), "");
        let mut query = Query::new();
        query.push_opt("status", None);
        query.push_opt("search", Some(""));
        assert_eq!(query.to_string(), "");
    }

    #[test]
    fn present_filters_appear_exactly_once() {
        let mut query = Query::new();
        query.push_opt("status", Some("lead"));
        query.push_opt("search", Some("acme"));
        assert_eq!(query.to_string(), "?status=lead&search=acme");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let mut query = Query::new();
        query.push_opt("search", Some("a b&c=d"));
        assert_eq!(query.to_string(), "?search=a%20b%26c%3Dd");
    }

    #[test]
    fn error_detail_prefers_json_detail_field() {
        assert_eq!(error_detail(r#"{"detail":"Not found"}"#, 404), "Not found");
        assert_eq!(error_detail("plain text", 500), "plain text");
        assert_eq!(error_detail("", 502), "request failed with status 502");
        assert_eq!(error_detail(r#"{"other":1}"#, 400), r#"{"other":1}"#);
    }
}
