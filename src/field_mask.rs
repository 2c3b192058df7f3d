//! Update masks: the ordered list of field paths an update request applies.
//!
//! On the wire a mask is a single comma-joined string (`displayName,description`).
//! An empty mask is never written; the field stays absent instead.

use std::fmt;

use crate::message::Message;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMask {
    paths: Vec<String>,
}

impl UpdateMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-joined mask. Empty segments are dropped.
    pub fn parse(mask: &str) -> Self {
        Self {
            paths: mask
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Read the mask stored at `path` in `request`, or an empty mask.
    pub fn from_message(request: &Message, path: &str) -> Self {
        request.get_str(path).map(Self::parse).unwrap_or_default()
    }

    /// Write the mask to `path`. Empty masks leave the request untouched.
    pub fn write_to(&self, request: &mut Message, path: &str) {
        if let Some(joined) = self.joined() {
            request.set_field(path, joined);
        }
    }

    /// Append `path`, keeping insertion order.
    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// The wire form, or `None` when there is nothing to send.
    pub fn joined(&self) -> Option<String> {
        (!self.paths.is_empty()).then(|| self.paths.join(","))
    }
}

impl fmt::Display for UpdateMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paths.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for UpdateMask {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}
