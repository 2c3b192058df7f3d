//! Policy binding creation (IAM v3).
//!
//! Argument names read here: `policy_binding`, `project`, `location`,
//! `target_principal_set`, `policy`, `policy_kind`, `display_name`,
//! `condition_from_file` (structured, see [`crate::hooks::condition`]).

use serde_json::Value;
use std::io::Write;

use super::ApiCommand;
use crate::api::iam;
use crate::args::ArgNamespace;
use crate::errors::{Error, Result};
use crate::hooks;
use crate::message::Message;
use crate::resource::{self, ResourceRef};
use crate::transport::Transport;

const DEFAULT_POLICY_KIND: &str = "PRINCIPAL_ACCESS_BOUNDARY";

fn set_binding_fields(parent: &ResourceRef, args: &ArgNamespace, mut request: Message) -> Result<Message> {
    let id = args.get_str("policy_binding").ok_or_else(|| {
        Error::required_argument("POLICY_BINDING", "A policy binding id is required.")
    })?;
    request.set_field("parent", parent.relative_name());
    request.set_field("policyBindingId", id);

    if let Some(principal_set) = args.get_str("target_principal_set") {
        request.set_field("target.principalSet", principal_set);
    }
    if let Some(policy) = args.get_str("policy") {
        request.set_field("policy", policy);
    }
    request.set_field(
        "policyKind",
        args.get_str("policy_kind").unwrap_or(DEFAULT_POLICY_KIND),
    );
    if let Some(display_name) = args.get_str("display_name") {
        request.set_field("displayName", display_name);
    }
    Ok(request)
}

pub fn create(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let parent = resource::policy_binding_parent(args.get_str("project"), args.get_str("location"))?;
    ApiCommand::new(iam::POLICY_BINDINGS_CREATE)
        .modify_request(set_binding_fields)
        .modify_request(hooks::update_request_with_condition_from_file)
        .print_response()
        .execute(transport, &parent, args, Message::new(), out)
}
