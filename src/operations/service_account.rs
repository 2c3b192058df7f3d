//! Service account commands.
//!
//! Argument names read here: `service_account`, `unique_id`, `display_name`,
//! `description`, `policy_file`.

use serde_json::{Map, Value};
use std::io::Write;

use super::ApiCommand;
use crate::api::iam;
use crate::args::ArgNamespace;
use crate::errors::{Error, Result};
use crate::field_mask::UpdateMask;
use crate::hooks::{
    self, add_version_to_update_mask_if_not_present, read_file_contents,
    set_service_account_resource, use_max_requested_policy_version, MaskedField,
};
use crate::message::Message;
use crate::resource::{self, collections, ResourceRef};
use crate::transport::Transport;

const PATCH_FIELDS: &[MaskedField] = &[
    MaskedField::new(
        "display_name",
        "patchServiceAccountRequest.serviceAccount.displayName",
        "displayName",
    ),
    MaskedField::new(
        "description",
        "patchServiceAccountRequest.serviceAccount.description",
        "description",
    ),
];

/// Top-level policy fields that `set-iam-policy` may update.
const POLICY_MASK_FIELDS: [&str; 3] = ["bindings", "etag", "auditConfigs"];

fn account_ref(args: &ArgNamespace) -> Result<ResourceRef> {
    resource::service_account(args.get_str("service_account").unwrap_or_default())
}

pub fn enable(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let account = account_ref(args)?;
    ApiCommand::new(iam::SERVICE_ACCOUNTS_ENABLE)
        .modify_request(set_service_account_resource)
        .on_response(hooks::enable_iam_account_confirmation)
        .execute(transport, &account, args, Message::new(), out)
}

pub fn disable(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let account = account_ref(args)?;
    ApiCommand::new(iam::SERVICE_ACCOUNTS_DISABLE)
        .modify_request(set_service_account_resource)
        .on_response(hooks::disable_iam_account_confirmation)
        .execute(transport, &account, args, Message::new(), out)
}

fn set_patch_fields(_: &ResourceRef, args: &ArgNamespace, mut request: Message) -> Result<Message> {
    hooks::set_masked_fields(
        &mut request,
        args,
        hooks::service_account::PATCH_UPDATE_MASK,
        PATCH_FIELDS,
    );
    Ok(request)
}

/// Patch display name and/or description. Fails before sending if neither is given.
pub fn update(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let account = account_ref(args)?;
    ApiCommand::new(iam::SERVICE_ACCOUNTS_PATCH)
        .modify_request(set_service_account_resource)
        .modify_request(set_patch_fields)
        .modify_request(hooks::validate_update_field_mask)
        .print_response()
        .execute(transport, &account, args, Message::new(), out)
}

/// Describe by email or name, or by numeric unique id.
pub fn describe(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let account = match args.get_str("unique_id") {
        Some(id) => ResourceRef::new(
            collections::SERVICE_ACCOUNTS,
            hooks::create_full_service_account_name_from_id(id)?,
        ),
        None => account_ref(args)?,
    };
    ApiCommand::new(iam::SERVICE_ACCOUNTS_GET)
        .modify_request(set_service_account_resource)
        .print_response()
        .execute(transport, &account, args, Message::new(), out)
}

fn set_policy_resource(
    resource: &ResourceRef,
    _: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    request.set_field("resource", resource.relative_name());
    Ok(request)
}

pub fn get_iam_policy(
    transport: &dyn Transport,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> Result<Value> {
    let account = account_ref(args)?;
    ApiCommand::new(iam::SERVICE_ACCOUNTS_GET_IAM_POLICY)
        .modify_request(set_policy_resource)
        .modify_request(use_max_requested_policy_version(
            "getIamPolicyRequest.options.requestedPolicyVersion",
        ))
        .print_response()
        .execute(transport, &account, args, Message::new(), out)
}

/// Parse an IAM policy from a YAML or JSON file.
pub fn parse_policy_file(path: &str) -> Result<Map<String, Value>> {
    let format_error = || {
        Error::invalid_argument(
            "POLICY_FILE",
            format!("{path} must be a path to a YAML or JSON file containing an IAM policy."),
        )
    };
    let contents = read_file_contents(path).map_err(|_| format_error())?;
    match serde_yaml::from_str::<Value>(&contents) {
        Ok(Value::Object(policy)) => Ok(policy),
        _ => Err(format_error()),
    }
}

fn set_policy_from_file(_: &ResourceRef, args: &ArgNamespace, mut request: Message) -> Result<Message> {
    let path = args
        .get_str("policy_file")
        .ok_or_else(|| Error::required_argument("POLICY_FILE", "A policy file is required."))?;
    let policy = parse_policy_file(path)?;

    let mask: UpdateMask = POLICY_MASK_FIELDS
        .iter()
        .filter(|field| policy.contains_key(**field))
        .copied()
        .collect();
    request.set_field("setIamPolicyRequest.policy", Value::Object(policy));
    mask.write_to(&mut request, "setIamPolicyRequest.updateMask");
    Ok(request)
}

pub fn set_iam_policy(
    transport: &dyn Transport,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> Result<Value> {
    let account = account_ref(args)?;
    ApiCommand::new(iam::SERVICE_ACCOUNTS_SET_IAM_POLICY)
        .modify_request(set_policy_resource)
        .modify_request(set_policy_from_file)
        .modify_request(add_version_to_update_mask_if_not_present(
            "setIamPolicyRequest.updateMask",
        ))
        .print_response()
        .execute(transport, &account, args, Message::new(), out)
}
