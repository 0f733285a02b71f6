use http_client::{HttpClient, HttpError, HttpRequest};
use serde_json::Value;

/// Performs one HTTP round trip and returns the parsed JSON body
///
/// [`NotificationManager`](crate::NotificationManager) only talks to the
/// network through this trait.
pub trait Transport {
    fn call(&self, request: &HttpRequest) -> Result<Value, HttpError>;
}

impl Transport for HttpClient {
    fn call(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        HttpClient::call(self, request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        (**self).call(request)
    }
}
