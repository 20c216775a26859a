//! The authenticated request pipeline.
//!
//! Every call runs the same four steps: resolve a credential (pre-supplied
//! session or the injected provider), assemble headers, perform the transport
//! call exactly once, classify the outcome. No retries, no client-imposed
//! timeout; resilience policy belongs to layers above this client.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::domain::{ApiError, Credential};
use crate::ports::{CredentialIssuer, SessionProvider};

use super::{ApiBody, ApiRequest};

/// Authenticated HTTP client for the backend service.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use baynext_console::adapters::{ApiClient, ApiRequest, JwtCredentialIssuer, StaticSessionProvider};
///
/// let client = ApiClient::new(
///     &config.api,
///     Arc::new(JwtCredentialIssuer::new(&config.auth)),
///     Arc::new(StaticSessionProvider::new().with_session(session)),
/// );
///
/// let me = client.get("/v1/me").await?;
/// ```
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    issuer: Arc<dyn CredentialIssuer>,
    sessions: Arc<dyn SessionProvider>,
}

impl ApiClient {
    /// Creates a client against the configured base URL.
    pub fn new(
        config: &ApiConfig,
        issuer: Arc<dyn CredentialIssuer>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            issuer,
            sessions,
        }
    }

    /// Performs one backend call described by `request`.
    ///
    /// Dropping the returned future aborts the in-flight transport call;
    /// that is the cancellation mechanism, there is no separate abort signal.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - no session resolvable, no subject,
    ///   or no usable credential; returned before any network activity
    /// * [`ApiError::Misconfigured`] - signing secret absent
    /// * [`ApiError::Network`] - transport failed with no HTTP status
    /// * [`ApiError::Request`] - the backend responded outside 200-299
    pub async fn request(&self, request: ApiRequest) -> Result<ApiBody, ApiError> {
        let ApiRequest {
            method,
            endpoint,
            body,
            session,
            headers: caller_headers,
        } = request;

        // Step 1 - credential resolution. A missing session fails here,
        // before any transport work.
        let session = match session {
            Some(session) => session,
            None => self
                .sessions
                .current()
                .await
                .ok_or(ApiError::Unauthenticated)?,
        };
        let credential = self.issuer.issue(&session).await?;

        // Step 2 - header assembly.
        let headers = assemble_headers(&credential, &caller_headers)?;
        let url = format!("{}{}", self.base_url, endpoint);

        // Step 3 - transport, attempted exactly once.
        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!(method = %method, url = %url, error = %e, "backend request did not complete");
            ApiError::network(e.to_string())
        })?;

        // Step 4 - outcome classification.
        let status = response.status();
        if !status.is_success() {
            return Err(classify_rejection(status, response).await);
        }

        // Success range is inclusive 200-299.
        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            "backend request completed"
        );

        decode_success(response).await
    }

    /// GET pass-through into [`ApiClient::request`].
    pub async fn get(&self, endpoint: &str) -> Result<ApiBody, ApiError> {
        self.request(ApiRequest::get(endpoint)).await
    }

    /// POST pass-through into [`ApiClient::request`].
    pub async fn post(&self, endpoint: &str, body: Value) -> Result<ApiBody, ApiError> {
        self.request(ApiRequest::post(endpoint).with_body(body)).await
    }

    /// PUT pass-through into [`ApiClient::request`].
    pub async fn put(&self, endpoint: &str, body: Value) -> Result<ApiBody, ApiError> {
        self.request(ApiRequest::put(endpoint).with_body(body)).await
    }

    /// DELETE pass-through into [`ApiClient::request`].
    pub async fn delete(&self, endpoint: &str) -> Result<ApiBody, ApiError> {
        self.request(ApiRequest::delete(endpoint)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Merges the default `Authorization` and `Content-Type` headers with the
/// caller's; caller headers win on key collision.
fn assemble_headers(
    credential: &Credential,
    caller_headers: &HeaderMap,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();

    let bearer = HeaderValue::from_str(&format!("Bearer {}", credential.as_str()))
        // A token that cannot travel as a header value is no credential.
        .map_err(|_| ApiError::Unauthenticated)?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in caller_headers {
        headers.insert(name.clone(), value.clone());
    }

    Ok(headers)
}

/// Builds the failure for a non-2xx response. Message extraction order:
/// JSON `detail` field, else non-empty raw text, else `HTTP <status>: <text>`.
async fn classify_rejection(status: StatusCode, response: reqwest::Response) -> ApiError {
    let text = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|value| value.get("detail").and_then(Value::as_str).map(String::from));

    let message = match detail {
        Some(detail) => detail,
        None if !text.is_empty() => text.clone(),
        None => format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
    };

    let body = if text.is_empty() { None } else { Some(text) };
    ApiError::request(message, status.as_u16(), body)
}

/// Decodes a successful response by its declared content type.
async fn decode_success(response: reqwest::Response) -> Result<ApiBody, ApiError> {
    let declares_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false);

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    if declares_json {
        let value = serde_json::from_str(&text)
            .map_err(|e| ApiError::network(format!("Invalid JSON in response body: {}", e)))?;
        Ok(ApiBody::Json(value))
    } else {
        Ok(ApiBody::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;

    #[test]
    fn default_headers_carry_bearer_and_json_content_type() {
        let credential = Credential::new("abc.def.ghi");
        let headers = assemble_headers(&credential, &HeaderMap::new()).unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def.ghi");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn caller_headers_win_on_collision() {
        let credential = Credential::new("abc.def.ghi");
        let mut caller = HeaderMap::new();
        caller.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        caller.insert(
            HeaderName::from_static("x-trace-id"),
            HeaderValue::from_static("t-42"),
        );

        let headers = assemble_headers(&credential, &caller).unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get("x-trace-id").unwrap(), "t-42");
        // Defaults not named by the caller survive.
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def.ghi");
    }

    #[test]
    fn unencodable_credential_is_unauthenticated() {
        let credential = Credential::new("bad\ntoken");
        let result = assemble_headers(&credential, &HeaderMap::new());
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }
}
