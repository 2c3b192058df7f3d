//! Workforce pool provider hooks for the extra and extended attributes
//! OAuth 2.0 clients.
//!
//! Both sub-objects share one layout under `workforcePoolProvider`:
//!
//! ```text
//! extraAttributesOauth2Client
//!   attributesType
//!   clientId
//!   clientSecret.value.plainText
//!   issuerUri
//!   queryParameters.filter
//! ```

use serde::{Deserialize, Serialize};

use crate::args::ArgNamespace;
use crate::errors::Result;
use crate::field_mask::UpdateMask;
use crate::message::Message;
use crate::resource::ResourceRef;

const EXTRA_CLIENT: &str = "workforcePoolProvider.extraAttributesOauth2Client";
const EXTENDED_CLIENT: &str = "workforcePoolProvider.extendedAttributesOauth2Client";

/// Which directory attributes the OAuth client fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributesType {
    AzureAdGroupsMail,
    AzureAdGroupsId,
    AzureAdGroupsDisplayName,
}

impl AttributesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributesType::AzureAdGroupsMail => "AZURE_AD_GROUPS_MAIL",
            AttributesType::AzureAdGroupsId => "AZURE_AD_GROUPS_ID",
            AttributesType::AzureAdGroupsDisplayName => "AZURE_AD_GROUPS_DISPLAY_NAME",
        }
    }

    /// Flag value to enum for extra attributes. First match wins.
    fn for_extra_attributes(flag: &str) -> Option<Self> {
        if flag.contains("azure-ad-groups-mail") {
            Some(AttributesType::AzureAdGroupsMail)
        } else if flag.contains("azure-ad-groups-id") {
            Some(AttributesType::AzureAdGroupsId)
        } else if flag.contains("azure-ad-groups-display-name") {
            Some(AttributesType::AzureAdGroupsDisplayName)
        } else {
            None
        }
    }

    /// Extended attributes only support group ids.
    fn for_extended_attributes(flag: &str) -> Option<Self> {
        flag.contains("azure-ad-groups-id")
            .then_some(AttributesType::AzureAdGroupsId)
    }
}

/// Flags for one OAuth client sub-object, by destination name.
struct ClientFlags {
    prefix: &'static str,
    attributes_type: &'static str,
    client_id: &'static str,
    client_secret_value: &'static str,
    issuer_uri: &'static str,
    filter: &'static str,
}

const EXTRA_FLAGS: ClientFlags = ClientFlags {
    prefix: EXTRA_CLIENT,
    attributes_type: "extra_attributes_type",
    client_id: "extra_attributes_client_id",
    client_secret_value: "extra_attributes_client_secret_value",
    issuer_uri: "extra_attributes_issuer_uri",
    filter: "extra_attributes_filter",
};

const EXTENDED_FLAGS: ClientFlags = ClientFlags {
    prefix: EXTENDED_CLIENT,
    attributes_type: "extended_attributes_type",
    client_id: "extended_attributes_client_id",
    client_secret_value: "extended_attributes_client_secret_value",
    issuer_uri: "extended_attributes_issuer_uri",
    filter: "extended_attributes_filter",
};

/// Relative paths under a client sub-object, paired with the flag that fills them.
fn detail_fields(flags: &ClientFlags) -> [(&'static str, &'static str); 4] {
    [
        (flags.client_id, "clientId"),
        (flags.client_secret_value, "clientSecret.value.plainText"),
        (flags.issuer_uri, "issuerUri"),
        (flags.filter, "queryParameters.filter"),
    ]
}

fn set_client_fields(
    request: &mut Message,
    args: &ArgNamespace,
    flags: &ClientFlags,
    resolve_type: fn(&str) -> Option<AttributesType>,
) {
    if let Some(kind) = args.get_str(flags.attributes_type).and_then(resolve_type) {
        request.set_field(
            &format!("{}.attributesType", flags.prefix),
            kind.as_str(),
        );
    }
    for (flag, relative) in detail_fields(flags) {
        if let Some(value) = args.get_str(flag) {
            request.set_field(&format!("{}.{}", flags.prefix, relative), value);
        }
    }
}

fn set_extra_attributes_oauth2_client_fields(request: &mut Message, args: &ArgNamespace) {
    set_client_fields(
        request,
        args,
        &EXTRA_FLAGS,
        AttributesType::for_extra_attributes,
    );
}

fn set_extended_attributes_oauth2_client_fields(request: &mut Message, args: &ArgNamespace) {
    set_client_fields(
        request,
        args,
        &EXTENDED_FLAGS,
        AttributesType::for_extended_attributes,
    );
}

fn clearing_extra_attributes(args: &ArgNamespace) -> bool {
    args.get_bool("clear_extra_attributes_config")
}

/// Fill both OAuth client sub-objects of a create request.
pub fn add_create_extra_and_extended_attributes_config_to_request(
    _resource: &ResourceRef,
    args: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    set_extra_attributes_oauth2_client_fields(&mut request, args);
    set_extended_attributes_oauth2_client_fields(&mut request, args);
    Ok(request)
}

/// Fill or clear the extra attributes client of an update request.
/// Clearing wins over any detail flag given alongside it.
pub fn add_clearable_extra_attributes_config_to_request(
    _resource: &ResourceRef,
    args: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    if clearing_extra_attributes(args) {
        request.clear_field(EXTRA_CLIENT);
    } else {
        set_extra_attributes_oauth2_client_fields(&mut request, args);
    }
    Ok(request)
}

/// Append the extra attributes paths touched by this call to `updateMask`.
pub fn add_extra_attributes_config_field_mask(
    _resource: &ResourceRef,
    args: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    let mut mask = UpdateMask::from_message(&request, "updateMask");
    if clearing_extra_attributes(args) {
        mask.push("extraAttributesOauth2Client");
    } else {
        if args.is_specified(EXTRA_FLAGS.attributes_type) {
            mask.push("extraAttributesOauth2Client.attributesType");
        }
        for (flag, relative) in detail_fields(&EXTRA_FLAGS) {
            if args.is_specified(flag) {
                mask.push(format!("extraAttributesOauth2Client.{relative}"));
            }
        }
    }
    mask.write_to(&mut request, "updateMask");
    Ok(request)
}
