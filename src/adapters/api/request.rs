//! Request descriptor and typed response body.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Session;

/// Describes one backend call: endpoint, method, optional JSON body, optional
/// pre-supplied session, caller headers. Constructed per call-site, consumed
/// once by [`ApiClient::request`](super::ApiClient::request).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) endpoint: String,
    pub(crate) body: Option<Value>,
    pub(crate) session: Option<Session>,
    pub(crate) headers: HeaderMap,
}

impl ApiRequest {
    /// Creates a descriptor for an arbitrary method.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            session: None,
            headers: HeaderMap::new(),
        }
    }

    /// GET descriptor.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// POST descriptor.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// PUT descriptor.
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// DELETE descriptor.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attaches a JSON body. Bodyless descriptors send no body at all.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Pre-supplies the session, skipping provider resolution.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Adds a caller header. Caller headers win over the client's defaults
    /// (`Authorization`, `Content-Type`) on key collision.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// The two-shape successful outcome of a backend call, negotiated by the
/// response's declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// Response declared `application/json`; the parsed value.
    Json(Value),
    /// Any other content type; the raw text body, unmodified.
    Text(String),
}

impl ApiBody {
    /// The parsed JSON value, when the response was structured.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiBody::Json(value) => Some(value),
            ApiBody::Text(_) => None,
        }
    }

    /// The raw text body, when the response was unstructured.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiBody::Json(_) => None,
            ApiBody::Text(text) => Some(text),
        }
    }

    /// Deserializes the body into a typed value. A `Text` body is parsed as
    /// JSON first, so endpoints with a sloppy content type still decode.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        match self {
            ApiBody::Json(value) => serde_json::from_value(value),
            ApiBody::Text(text) => serde_json::from_str(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verb_constructors_set_the_method() {
        assert_eq!(ApiRequest::get("/v1/me").method, Method::GET);
        assert_eq!(ApiRequest::post("/v1/projects").method, Method::POST);
        assert_eq!(ApiRequest::put("/v1/projects/p1").method, Method::PUT);
        assert_eq!(ApiRequest::delete("/v1/projects/p1").method, Method::DELETE);
    }

    #[test]
    fn descriptor_defaults_are_empty() {
        let request = ApiRequest::get("/v1/me");
        assert!(request.body.is_none());
        assert!(request.session.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn body_variants_expose_their_shape() {
        let json = ApiBody::Json(json!({"id": "u1"}));
        assert_eq!(json.as_json().unwrap()["id"], "u1");
        assert!(json.as_text().is_none());

        let text = ApiBody::Text("pong".to_string());
        assert_eq!(text.as_text(), Some("pong"));
        assert!(text.as_json().is_none());
    }

    #[test]
    fn typed_decode_from_json_variant() {
        #[derive(serde::Deserialize)]
        struct Me {
            id: String,
        }
        let me: Me = ApiBody::Json(json!({"id": "u1"})).json().unwrap();
        assert_eq!(me.id, "u1");
    }
}
