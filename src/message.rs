//! Request and response messages addressed by dotted field paths.
//!
//! A [`Message`] is a JSON object that mirrors the API schema. Hooks never
//! build one from scratch; they read and write paths such as
//! `workforcePoolProvider.extraAttributesOauth2Client.clientId`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Map<String, Value>);

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Anything other than an object becomes an empty message.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `path`, or `None` if the leaf or any intermediate is absent.
    /// JSON `null` reads as absent.
    pub fn get_field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_field(path).and_then(Value::as_str)
    }

    pub fn has_field(&self, path: &str) -> bool {
        self.get_field(path).is_some()
    }

    /// Set `path` to `value`, creating intermediate objects as needed. A
    /// non-object intermediate is replaced by an object.
    pub fn set_field(&mut self, path: &str, value: impl Into<Value>) {
        let value = value.into();
        let (parents, leaf) = split_path(path);
        let mut current = &mut self.0;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = match entry {
                Value::Object(map) => map,
                _ => unreachable!("entry was just made an object"),
            };
        }
        current.insert(leaf.to_string(), value);
    }

    /// Remove the value at `path`. Missing paths are left alone.
    pub fn clear_field(&mut self, path: &str) -> Option<Value> {
        let (parents, leaf) = split_path(path);
        let mut current = &mut self.0;
        for segment in parents {
            current = current.get_mut(segment)?.as_object_mut()?;
        }
        current.remove(leaf)
    }

    /// Remove and return the value at `path`.
    pub fn take_field(&mut self, path: &str) -> Option<Value> {
        self.clear_field(path).filter(|value| !value.is_null())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::from_value(value)
    }
}

fn split_path(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let leaf = segments.pop().unwrap_or_default();
    (segments, leaf)
}
