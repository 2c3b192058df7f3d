//! Workforce pool OIDC provider commands.
//!
//! Argument names read here: `provider`, `workforce_pool`, `location`,
//! `display_name`, `description`, `disabled`, `attribute_mapping` (a
//! structured object), `attribute_condition`, `issuer_uri`, `client_id`,
//! `client_secret_value`, `web_sso_response_type`,
//! `web_sso_assertion_claims_behavior`, `web_sso_additional_scopes`, plus the
//! extra/extended attributes flags handled by [`crate::hooks::workforce`].

use serde_json::Value;
use std::io::Write;

use super::ApiCommand;
use crate::api::iam;
use crate::args::ArgNamespace;
use crate::errors::{Error, Result};
use crate::field_mask::UpdateMask;
use crate::hooks::{self, MaskedField};
use crate::message::Message;
use crate::resource::{self, ResourceRef};
use crate::transport::Transport;

/// Provider fields settable from flags, relative to `workforcePoolProvider`.
const PROVIDER_FIELDS: &[MaskedField] = &[
    MaskedField::new("display_name", "workforcePoolProvider.displayName", "displayName"),
    MaskedField::new("description", "workforcePoolProvider.description", "description"),
    MaskedField::new("disabled", "workforcePoolProvider.disabled", "disabled"),
    MaskedField::new(
        "attribute_mapping",
        "workforcePoolProvider.attributeMapping",
        "attributeMapping",
    ),
    MaskedField::new(
        "attribute_condition",
        "workforcePoolProvider.attributeCondition",
        "attributeCondition",
    ),
    MaskedField::new("issuer_uri", "workforcePoolProvider.oidc.issuerUri", "oidc.issuerUri"),
    MaskedField::new("client_id", "workforcePoolProvider.oidc.clientId", "oidc.clientId"),
    MaskedField::new(
        "client_secret_value",
        "workforcePoolProvider.oidc.clientSecret.value.plainText",
        "oidc.clientSecret.value.plainText",
    ),
    MaskedField::new(
        "web_sso_response_type",
        "workforcePoolProvider.oidc.webSsoConfig.responseType",
        "oidc.webSsoConfig.responseType",
    ),
    MaskedField::new(
        "web_sso_assertion_claims_behavior",
        "workforcePoolProvider.oidc.webSsoConfig.assertionClaimsBehavior",
        "oidc.webSsoConfig.assertionClaimsBehavior",
    ),
    MaskedField::new(
        "web_sso_additional_scopes",
        "workforcePoolProvider.oidc.webSsoConfig.additionalScopes",
        "oidc.webSsoConfig.additionalScopes",
    ),
];

/// Flags offered by `update-oidc`, for the empty-update error.
const UPDATE_FLAGS: &[&str] = &[
    "--display-name",
    "--description",
    "--disabled",
    "--attribute-mapping",
    "--attribute-condition",
    "--issuer-uri",
    "--client-id",
    "--client-secret-value",
    "--web-sso-response-type",
    "--web-sso-assertion-claims-behavior",
    "--web-sso-additional-scopes",
    "--extra-attributes-type",
    "--extra-attributes-client-id",
    "--extra-attributes-client-secret-value",
    "--extra-attributes-issuer-uri",
    "--extra-attributes-filter",
    "--clear-extra-attributes-config",
];

fn provider_ref(args: &ArgNamespace) -> Result<ResourceRef> {
    let provider = args
        .get_str("provider")
        .ok_or_else(|| Error::required_argument("PROVIDER", "A provider id is required."))?;
    resource::workforce_pool_provider(
        provider,
        args.get_str("workforce_pool"),
        args.get_str("location"),
    )
}

/// `locations/L/workforcePools/P` and the provider id, split from the full name.
fn parent_and_id(provider: &ResourceRef) -> (&str, &str) {
    provider
        .relative_name()
        .rsplit_once("/providers/")
        .unwrap_or((provider.relative_name(), provider.name()))
}

fn set_create_target(provider: &ResourceRef, _: &ArgNamespace, mut request: Message) -> Result<Message> {
    let (parent, id) = parent_and_id(provider);
    request.set_field("parent", parent);
    request.set_field("workforcePoolProviderId", id);
    Ok(request)
}

fn set_provider_fields(_: &ResourceRef, args: &ArgNamespace, mut request: Message) -> Result<Message> {
    // Create requests carry no mask.
    for binding in PROVIDER_FIELDS {
        if let Some(value) = args.get_json(binding.flag) {
            request.set_field(binding.field, value);
        }
    }
    Ok(request)
}

pub fn create_oidc(
    transport: &dyn Transport,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> Result<Value> {
    let provider = provider_ref(args)?;
    ApiCommand::new(iam::WORKFORCE_PROVIDERS_CREATE)
        .modify_request(set_create_target)
        .modify_request(set_provider_fields)
        .modify_request(hooks::add_create_extra_and_extended_attributes_config_to_request)
        .print_response()
        .execute(transport, &provider, args, Message::new(), out)
}

fn set_update_target(provider: &ResourceRef, _: &ArgNamespace, mut request: Message) -> Result<Message> {
    request.set_field("name", provider.relative_name());
    Ok(request)
}

fn set_masked_provider_fields(
    _: &ResourceRef,
    args: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    hooks::set_masked_fields(&mut request, args, "updateMask", PROVIDER_FIELDS);
    Ok(request)
}

fn validate_provider_update_mask(
    _: &ResourceRef,
    _: &ArgNamespace,
    request: Message,
) -> Result<Message> {
    if UpdateMask::from_message(&request, "updateMask").is_empty() {
        return Err(Error::one_of_required(
            UPDATE_FLAGS.iter().copied(),
            "Specify at least one field to update.",
        ));
    }
    Ok(request)
}

/// Patch an OIDC provider. Only fields named by flags are sent and masked.
pub fn update_oidc(
    transport: &dyn Transport,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> Result<Value> {
    let provider = provider_ref(args)?;
    ApiCommand::new(iam::WORKFORCE_PROVIDERS_PATCH)
        .modify_request(set_update_target)
        .modify_request(set_masked_provider_fields)
        .modify_request(hooks::add_clearable_extra_attributes_config_to_request)
        .modify_request(hooks::add_extra_attributes_config_field_mask)
        .modify_request(validate_provider_update_mask)
        .print_response()
        .execute(transport, &provider, args, Message::new(), out)
}
