//! Subscription types and request payloads
//!
//! Field names follow the cloudBit wire format. Fields the service returns
//! that are not modelled here are kept in `extra` so a listed subscription
//! round-trips unchanged.

use crate::mappings::EventMappings;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A named publisher event, optionally annotated with its provider key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
            extra: Map::new(),
        }
    }
}

/// A subscription linking a publisher device to a subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub publisher_id: String,
    #[serde(default)]
    pub subscriber_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_events: Option<Vec<EventRef>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Subscription {
    /// Return a copy with every publisher event's `key` taken from `mappings`
    ///
    /// Events whose name has no mapping come back with `key` unset.
    /// Subscriptions without events are returned as-is.
    pub fn annotated(&self, mappings: &EventMappings) -> Self {
        let mut subscription = self.clone();
        if let Some(events) = subscription.publisher_events.as_mut() {
            for event in events.iter_mut() {
                event.key = mappings.lookup(&event.name).map(str::to_owned);
                if event.key.is_none() {
                    debug!(event = %event.name, "no key mapped for publisher event");
                }
            }
        }
        subscription
    }
}

/// Body of a subscribe request
#[derive(Debug, Serialize)]
pub(crate) struct CreateSubscriptionPayload<'a> {
    pub publisher_id: &'a str,
    pub subscriber_id: &'a str,
    pub publisher_events: &'a [EventRef],
}

/// Body of an unsubscribe request
#[derive(Debug, Serialize)]
pub(crate) struct DeleteSubscriptionPayload<'a> {
    pub subscriber_id: &'a str,
    pub publisher_id: &'a str,
}
