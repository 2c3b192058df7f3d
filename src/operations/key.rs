//! Service account key commands.
//!
//! Argument names read here: `iam_key`, `iam_account`, `public_key_file`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use std::io::Write;

use super::ApiCommand;
use crate::api::iam;
use crate::args::ArgNamespace;
use crate::errors::{Error, Result};
use crate::hooks::{self, generate_public_key_data_from_file, set_service_account_resource};
use crate::message::Message;
use crate::resource::{self, ResourceRef};
use crate::transport::Transport;

fn key_ref(args: &ArgNamespace) -> Result<ResourceRef> {
    let key = args
        .get_str("iam_key")
        .ok_or_else(|| Error::required_argument("IAM_KEY", "A key id is required."))?;
    resource::service_account_key(key, args.get_str("iam_account"))
}

/// Confirmations name the owning account, so a full key name given without
/// `--iam-account` supplies it from its `serviceAccounts/{account}` segment.
fn with_owning_account(args: &ArgNamespace, key: &ResourceRef) -> ArgNamespace {
    if args.is_specified("iam_account") {
        return args.clone();
    }
    match key.relative_name().split('/').nth(3) {
        Some(account) => args.clone().with("iam_account", account),
        None => args.clone(),
    }
}

pub fn enable(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let key = key_ref(args)?;
    let args = with_owning_account(args, &key);
    ApiCommand::new(iam::KEYS_ENABLE)
        .modify_request(set_service_account_resource)
        .on_response(hooks::enable_iam_key_confirmation)
        .execute(transport, &key, &args, Message::new(), out)
}

pub fn disable(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let key = key_ref(args)?;
    let args = with_owning_account(args, &key);
    ApiCommand::new(iam::KEYS_DISABLE)
        .modify_request(set_service_account_resource)
        .on_response(hooks::disable_iam_key_confirmation)
        .execute(transport, &key, &args, Message::new(), out)
}

fn set_public_key_data(_: &ResourceRef, args: &ArgNamespace, mut request: Message) -> Result<Message> {
    let path = args.get_str("public_key_file").ok_or_else(|| {
        Error::required_argument("PUBLIC_KEY_FILE", "A public key file is required.")
    })?;
    let data = generate_public_key_data_from_file(path)?;
    request.set_field(
        "uploadServiceAccountKeyRequest.publicKeyData",
        STANDARD.encode(data),
    );
    Ok(request)
}

/// Upload a public key for `--iam-account`. The key file is read before
/// anything is sent.
pub fn upload(transport: &dyn Transport, args: &ArgNamespace, out: &mut dyn Write) -> Result<Value> {
    let account = resource::service_account(args.get_str("iam_account").unwrap_or_default())?;
    ApiCommand::new(iam::KEYS_UPLOAD)
        .modify_request(set_service_account_resource)
        .modify_request(set_public_key_data)
        .print_response()
        .execute(transport, &account, args, Message::new(), out)
}
