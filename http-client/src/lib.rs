//! Private HTTP client for the cloudBit REST API
//!
//! This crate provides a minimal blocking client that performs exactly one
//! authenticated JSON round trip per call. It knows nothing about
//! subscriptions; request assembly lives in `cloudbit-api`.

mod error;

pub use error::HttpError;

use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Media type for version 2 of the cloudBit API
pub const API_MEDIA_TYPE: &str = "application/vnd.littlebits.v2+json";

/// HTTP methods used by the cloudBit API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A single request to send through [`HttpClient::call`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            ..Self::default()
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Delete,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header set on this request (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A minimal authenticated client for the cloudBit REST API
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    token: String,
}

impl HttpClient {
    /// Create a new client that authenticates every call with `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
            token: token.into(),
        }
    }

    /// The bearer token sent with each request
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Send a request and return the parsed JSON body
    ///
    /// An empty success body is returned as `Value::Null`.
    pub fn call(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        debug!(method = request.method.as_str(), url = %request.url, "cloudbit request");

        let mut builder = self
            .agent
            .request(request.method.as_str(), &request.url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", API_MEDIA_TYPE);

        for (name, value) in &request.headers {
            builder = builder.set(name, value);
        }

        let result = match &request.body {
            Some(body) => builder.send_string(body),
            None => builder.call(),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(HttpError::Status { status, body });
            }
            Err(e) => return Err(HttpError::Network(e.to_string())),
        };

        let text = response
            .into_string()
            .map_err(|e| HttpError::Network(e.to_string()))?;

        parse_body(&text)
    }
}

fn parse_body(text: &str) -> Result<Value, HttpError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| HttpError::Parse(e.to_string()))
}
