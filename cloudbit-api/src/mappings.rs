//! Event name to cloudBit event key lookup table

use std::collections::HashMap;

/// Built-in cloudBit events, keyed by the short name callers use
const CLOUDBIT_EVENTS: &[(&str, &str)] = &[
    ("amplitude", "amplitude"),
    ("ignite", "amplitude:delta:ignite"),
    ("release", "amplitude:delta:release"),
    ("sustain", "amplitude:delta:sustain"),
    ("nap", "amplitude:delta:nap"),
    ("active", "amplitude:level:active"),
    ("idle", "amplitude:level:idle"),
];

/// Static mapping from event name to provider event key
///
/// Lookups are exact-match on the name. There is no reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMappings {
    events: HashMap<String, String>,
}

impl EventMappings {
    /// A table with no entries
    pub fn empty() -> Self {
        Self { events: HashMap::new() }
    }

    pub fn with_event(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
        self.events.insert(name.into(), key.into());
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.events.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventMappings {
    fn default() -> Self {
        CLOUDBIT_EVENTS
            .iter()
            .map(|(name, key)| (name.to_string(), key.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for EventMappings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { events: iter.into_iter().collect() }
    }
}
