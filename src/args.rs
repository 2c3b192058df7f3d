//! Parsed command-line arguments as seen by hooks.
//!
//! Hooks never look at clap types directly. Each command copies the flags it
//! owns into an [`ArgNamespace`], keyed by the snake_case destination name
//! (`--extra-attributes-client-id` becomes `extra_attributes_client_id`).
//! A name with no entry is "unspecified".

use serde_json::Value;
use std::collections::BTreeMap;

/// A single parsed flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
    /// Structured data parsed from a file or a dict-style flag.
    Structured(Value),
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(value: Vec<String>) -> Self {
        ArgValue::List(value)
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        ArgValue::Structured(value)
    }
}

/// Read-only view over the flags of one command invocation.
#[derive(Debug, Clone, Default)]
pub struct ArgNamespace {
    command_path: Vec<String>,
    values: BTreeMap<String, ArgValue>,
}

impl ArgNamespace {
    /// Create an empty namespace for the given command path,
    /// e.g. `["gsurface", "iam", "service-accounts", "enable"]`.
    pub fn new<I, S>(command_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command_path: command_path.into_iter().map(Into::into).collect(),
            values: BTreeMap::new(),
        }
    }

    /// Record a specified flag.
    pub fn with(mut self, name: &str, value: impl Into<ArgValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Record a flag only when clap produced a value for it.
    pub fn with_opt<T: Into<ArgValue>>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Record a boolean switch only when it was passed.
    pub fn with_flag(self, name: &str, set: bool) -> Self {
        if set {
            self.with(name, true)
        } else {
            self
        }
    }

    pub fn command_path(&self) -> &[String] {
        &self.command_path
    }

    /// True if the command path ends with `suffix`.
    pub fn command_path_ends_with(&self, suffix: &[&str]) -> bool {
        self.command_path.len() >= suffix.len()
            && self.command_path[self.command_path.len() - suffix.len()..]
                .iter()
                .zip(suffix)
                .all(|(a, b)| a == b)
    }

    pub fn is_specified(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Boolean flags read as `false` when unspecified.
    pub fn get_bool(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ArgValue::Bool(true)))
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(ArgValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn get_structured(&self, name: &str) -> Option<&Value> {
        match self.values.get(name) {
            Some(ArgValue::Structured(value)) => Some(value),
            _ => None,
        }
    }

    /// The value as JSON, whatever its kind. Used when a flag is copied
    /// verbatim into a request field.
    pub fn get_json(&self, name: &str) -> Option<Value> {
        self.values.get(name).map(|value| match value {
            ArgValue::Str(s) => Value::String(s.clone()),
            ArgValue::Bool(b) => Value::Bool(*b),
            ArgValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            ArgValue::Structured(v) => v.clone(),
        })
    }
}
