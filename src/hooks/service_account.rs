//! Service account request hooks.

use crate::args::ArgNamespace;
use crate::errors::{Error, Result};
use crate::message::Message;
use crate::resource::ResourceRef;

use super::read_file_contents;

/// Mask location of a service account patch request.
pub const PATCH_UPDATE_MASK: &str = "patchServiceAccountRequest.updateMask";

/// Put the service account's relative name into `request.name`.
pub fn set_service_account_resource(
    resource: &ResourceRef,
    _args: &ArgNamespace,
    mut request: Message,
) -> Result<Message> {
    request.set_field("name", resource.relative_name());
    Ok(request)
}

/// Reject a patch request whose update mask names no field.
pub fn validate_update_field_mask(
    _resource: &ResourceRef,
    _args: &ArgNamespace,
    request: Message,
) -> Result<Message> {
    let has_paths = request
        .get_str(PATCH_UPDATE_MASK)
        .is_some_and(|mask| !mask.trim().is_empty());
    if !has_paths {
        return Err(Error::one_of_required(
            ["--display-name", "--description"],
            "Specify at least one field to update.",
        ));
    }
    Ok(request)
}

/// `projects/-/serviceAccounts/{id}` for a numeric unique id.
pub fn create_full_service_account_name_from_id(account_id: &str) -> Result<String> {
    // ASCII only: unique ids are decimal and full-width digits are never valid.
    if account_id.is_empty() || !account_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::invalid_argument(
            "account_id",
            "Account unique ID should be a number. Please double check your input and try again.",
        ));
    }
    Ok(format!("projects/-/serviceAccounts/{account_id}"))
}

/// Read a public key file, trimmed, as UTF-8 bytes.
pub fn generate_public_key_data_from_file(path: &str) -> Result<Vec<u8>> {
    let contents = read_file_contents(path).map_err(|reason| {
        Error::invalid_argument(
            "public_key_file",
            format!("{reason}. Please double check your input and try again."),
        )
    })?;
    Ok(contents.trim().as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{self, collections};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_digit_ids_become_names() {
        for id in ["0", "1234567890", "109876543210987654321"] {
            assert_eq!(
                create_full_service_account_name_from_id(id).unwrap(),
                format!("projects/-/serviceAccounts/{id}")
            );
        }
    }

    #[test]
    fn test_non_digit_ids_rejected() {
        for id in ["", "12a", "sa@p.iam.gserviceaccount.com", " 12", "-5", "１２"] {
            let err = create_full_service_account_name_from_id(id).unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument { ref argument, .. } if argument == "account_id"),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_set_service_account_resource() {
        let r = resource::service_account("sa@p.iam.gserviceaccount.com").unwrap();
        let args = ArgNamespace::new(["gsurface"]);
        let request = set_service_account_resource(&r, &args, Message::new()).unwrap();
        assert_eq!(
            request.get_str("name"),
            Some("projects/-/serviceAccounts/sa@p.iam.gserviceaccount.com")
        );
    }

    #[test]
    fn test_empty_mask_rejected() {
        let r = ResourceRef::new(collections::SERVICE_ACCOUNTS, "projects/-/serviceAccounts/a");
        let args = ArgNamespace::new(["gsurface"]);
        for request in [
            Message::new(),
            Message::from_value(json!({"patchServiceAccountRequest": {"updateMask": ""}})),
        ] {
            let err = validate_update_field_mask(&r, &args, request).unwrap_err();
            let message = err.to_string();
            assert!(message.contains("--display-name"));
            assert!(message.contains("--description"));
        }

        let ok = Message::from_value(json!({"patchServiceAccountRequest": {"updateMask": "description"}}));
        assert!(validate_update_field_mask(&r, &args, ok).is_ok());
    }

    #[test]
    fn test_public_key_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key.pem");
        fs::write(&path, "\n  -----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n\n").unwrap();
        let data = generate_public_key_data_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(
            data,
            b"-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----".to_vec()
        );
    }

    #[test]
    fn test_public_key_missing_file() {
        let err = generate_public_key_data_from_file("/no/such/key.pem").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid value for [public_key_file]: Unable to read file [/no/such/key.pem]"));
        assert!(message.ends_with("Please double check your input and try again."));
    }
}
