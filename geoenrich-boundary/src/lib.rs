use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Event identifiers are echoed as they were received.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
    /// Fractional or out of range numbers and any other JSON value
    Other(serde_json::Value),
}

impl Default for EventId {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

/// An event as delivered by the events listing API.
///
/// Only the fields needed for geocoding are decoded,
/// everything else is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<EventLocation>,
    #[serde(default)]
    pub area: Option<EventArea>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventLocation {
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventArea {
    #[serde(default)]
    pub address: Option<String>,
}

/// A single element of the output file.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EnrichedEvent {
    pub id: EventId,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An element of a previously written output file.
///
/// All fields are optional, elements written by older or
/// interrupted runs must not break loading.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StoredEvent {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}
