use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// The host's state store, keyed by entity id.
pub type StateStore = HashMap<String, StateObject>;

#[derive(Deserialize, Clone, Default)]
pub struct StateObject {
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Deserialize, Clone, Default)]
pub struct Attributes {
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    /// Kept as a raw value because the sensor payload is untrusted;
    /// anything that is not an array is treated as no departures.
    #[serde(default)]
    pub departures: Value,
}

impl Attributes {
    pub fn departures(&self) -> &[Value] {
        match self.departures.as_array() {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }
}

/// One departure record, coerced field by field from the raw sensor
/// payload. A malformed field becomes `None`; the record itself always
/// survives.
#[derive(Clone, Default)]
pub struct RawDeparture {
    /// First present of `stop`, `when`, `time`.
    pub timestamp: Option<String>,
    pub platform: Option<String>,
    pub name: Option<String>,
    pub to: Option<String>,
    pub number: Option<String>,
    pub category: Option<String>,
    pub delay: Option<f64>,
}

impl RawDeparture {
    pub fn from_value(value: &Value) -> Self {
        let timestamp = ["stop", "when", "time"]
            .into_iter()
            .find_map(|key| text(value.get(key)?));

        Self {
            timestamp,
            platform: value.get("platform").and_then(text),
            name: value.get("name").and_then(text),
            to: value.get("to").and_then(text),
            number: value.get("number").and_then(text),
            category: value.get("category").and_then(text),
            delay: value.get("delay").and_then(numeric),
        }
    }
}

/// Strings pass through, numbers render decimal, everything else is
/// treated as absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
