//! Test helpers shared by the integration tests

#![allow(dead_code)]

use cloudbit_api::{ClientConfig, HttpError, HttpRequest, Transport};
use serde_json::Value;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

pub const CALLBACK_URL: &str = "https://example.com/hook";
pub const SUBSCRIPTIONS_URL: &str = "https://api.test/v2/subscriptions";

/// Load a JSON fixture from the fixtures directory
pub fn load_fixture(filename: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in fixture {}: {}", filename, e))
}

pub fn test_config(token: &str) -> ClientConfig {
    ClientConfig::new(token, CALLBACK_URL).with_subscriptions_url(SUBSCRIPTIONS_URL)
}

/// Transport double that records every request and answers with a canned value
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    response: Result<Value, u16>,
}

impl RecordingTransport {
    pub fn returning(response: Value) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            response: Ok(response),
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            response: Err(status),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    /// Body of the last request decoded as JSON
    pub fn last_body(&self) -> Value {
        let request = self.last_request();
        let body = request.body.expect("last request had no body");
        serde_json::from_str(&body).expect("request body is not JSON")
    }
}

impl Transport for RecordingTransport {
    fn call(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        self.requests.borrow_mut().push(request.clone());
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(status) => Err(HttpError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}
