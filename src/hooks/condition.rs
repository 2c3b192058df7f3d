//! IAM conditions read from `--condition-from-file`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::read_file_contents;
use crate::args::ArgNamespace;
use crate::errors::{Error, Result};
use crate::message::Message;
use crate::resource::ResourceRef;

/// A CEL condition attached to a binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    pub expression: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn condition_file_format_error(path: &str) -> Error {
    Error::invalid_argument(
        "condition-from-file",
        format!(
            "{path} must be a path to a YAML or JSON file containing the condition. \
             `expression` and `title` are required keys. `description` is optional."
        ),
    )
}

/// Read a condition from a YAML or JSON file (`-` for stdin).
pub fn parse_condition_from_file(path: &str) -> Result<Condition> {
    let contents = read_file_contents(path).map_err(|_| condition_file_format_error(path))?;
    // JSON documents are valid YAML, so one parser covers both.
    serde_yaml::from_str::<Condition>(&contents).map_err(|_| condition_file_format_error(path))
}

/// Copy the parsed `condition_from_file` argument into `request.condition`.
pub fn update_request_with_condition_from_file(
    _resource: &ResourceRef,
    args: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    let Some(source) = args.get_structured("condition_from_file") else {
        return Ok(request);
    };

    let mut condition = Map::new();
    for key in ["description", "title", "expression"] {
        if let Some(value) = source.get(key).filter(|v| !v.is_null()) {
            condition.insert(key.to_string(), value.clone());
        }
    }
    request.set_field("condition", Value::Object(condition));
    Ok(request)
}
