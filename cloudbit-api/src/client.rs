use crate::{ApiError, ClientConfig, ConfigError, EventMappings, EventRef, Result, Subscription, Transport};
use crate::subscription::{CreateSubscriptionPayload, DeleteSubscriptionPayload};
use http_client::{HttpClient, HttpRequest};
use serde_json::Value;
use tracing::{debug, warn};

/// Manages subscriptions to events generated by cloudBit devices
///
/// Every operation validates its arguments, sends exactly one request
/// through the transport and returns. Nothing is cached between calls.
///
/// ```rust,no_run
/// use cloudbit_api::{ClientConfig, EventRef, NotificationManager};
///
/// let config = ClientConfig::new("my-token", "https://example.com/hook");
/// let manager = NotificationManager::new(config);
///
/// manager.subscribe_to_notifications("00e04c0379bb", None, &[EventRef::new("ignite")])?;
/// for subscription in manager.list_subscriptions("00e04c0379bb")? {
///     println!("{} -> {}", subscription.publisher_id, subscription.subscriber_id);
/// }
/// # Ok::<(), cloudbit_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NotificationManager<T: Transport = HttpClient> {
    transport: T,
    config: ClientConfig,
    mappings: EventMappings,
}

impl NotificationManager<HttpClient> {
    /// Create a manager authenticating with the config's token
    pub fn new(config: ClientConfig) -> Self {
        Self::with_token(config, None)
    }

    /// Create a manager with an explicit token
    ///
    /// When `token` is `None` or empty the config's token is used instead.
    pub fn with_token(mut config: ClientConfig, token: Option<&str>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            config.auth_token = token.to_string();
        }
        let client = HttpClient::new(config.auth_token());
        Self::with_transport(config, client)
    }

    /// Create a manager from `CLOUDBIT_*` environment variables
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl<T: Transport> NotificationManager<T> {
    /// Create a manager over a custom transport (for advanced use cases)
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            mappings: EventMappings::default(),
        }
    }

    /// Replace the event mapping table
    pub fn with_mappings(mut self, mappings: EventMappings) -> Self {
        self.mappings = mappings;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn mappings(&self) -> &EventMappings {
        &self.mappings
    }

    /// List the subscriptions that exist for a publisher device
    ///
    /// Each returned publisher event has its `key` set from the mapping
    /// table. Order is preserved as received.
    pub fn list_subscriptions(&self, publisher_id: &str) -> Result<Vec<Subscription>> {
        require("list_subscriptions", "publisher_id", publisher_id)?;

        let url = format!(
            "{}?publisher_id={}",
            self.config.subscriptions_url(),
            encode_query_value(publisher_id)
        );
        let response = self.send(&HttpRequest::get(url))?;

        let subscriptions: Vec<Subscription> = serde_json::from_value(response)
            .map_err(|e| ApiError::Decode(format!("Invalid subscription list: {}", e)))?;

        Ok(subscriptions
            .iter()
            .map(|subscription| subscription.annotated(&self.mappings))
            .collect())
    }

    /// Subscribe to events emitted by a publisher device
    ///
    /// When `subscriber_id` is `None` or empty the default callback URL is
    /// used. Returns the created subscription as sent back by the service.
    pub fn subscribe_to_notifications(
        &self,
        publisher_id: &str,
        subscriber_id: Option<&str>,
        events: &[EventRef],
    ) -> Result<Value> {
        require("subscribe_to_notifications", "publisher_id", publisher_id)?;
        if events.is_empty() {
            warn!("subscribe_to_notifications called without events");
            return Err(ApiError::invalid_parameter("subscribe_to_notifications", "events"));
        }

        let subscriber_id = self.resolve_subscriber_id(subscriber_id);
        let payload = CreateSubscriptionPayload {
            publisher_id,
            subscriber_id: &subscriber_id,
            publisher_events: events,
        };

        let request = HttpRequest::post(self.config.subscriptions_url())
            .with_header("Content-Type", "application/json")
            .with_body(encode_payload(&payload)?);

        self.send(&request)
    }

    /// Remove a subscriber's subscription to a publisher device
    ///
    /// `subscriber_id` falls back to the default callback URL the same way
    /// as [`subscribe_to_notifications`](Self::subscribe_to_notifications).
    pub fn delete_subscription(&self, publisher_id: &str, subscriber_id: Option<&str>) -> Result<Value> {
        require("delete_subscription", "publisher_id", publisher_id)?;

        let subscriber_id = self.resolve_subscriber_id(subscriber_id);
        let payload = DeleteSubscriptionPayload {
            subscriber_id: &subscriber_id,
            publisher_id,
        };

        let request = HttpRequest::delete(self.config.subscriptions_url())
            .with_header("Content-Type", "application/json")
            .with_body(encode_payload(&payload)?);

        self.send(&request)
    }

    fn resolve_subscriber_id(&self, subscriber_id: Option<&str>) -> String {
        match subscriber_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => self.config.default_subscriber_id(),
        }
    }

    fn send(&self, request: &HttpRequest) -> Result<Value> {
        debug!(method = request.method.as_str(), url = %request.url, "sending subscription request");
        Ok(self.transport.call(request)?)
    }
}

fn require(operation: &str, field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        warn!(operation, field, "rejected empty parameter");
        return Err(ApiError::invalid_parameter(operation, field));
    }
    Ok(())
}

fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn encode_payload<P: serde::Serialize>(payload: &P) -> Result<String> {
    serde_json::to_string(payload).map_err(|e| ApiError::Decode(format!("Failed to encode payload: {}", e)))
}
