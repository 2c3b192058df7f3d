//! Set fields from flags and record each one in an update mask.

use crate::args::ArgNamespace;
use crate::field_mask::UpdateMask;
use crate::message::Message;

/// Binds a flag to the request field it fills and the mask path that
/// announces the change.
#[derive(Debug, Clone, Copy)]
pub struct MaskedField {
    pub flag: &'static str,
    pub field: &'static str,
    pub mask_path: &'static str,
}

impl MaskedField {
    pub const fn new(flag: &'static str, field: &'static str, mask_path: &'static str) -> Self {
        Self {
            flag,
            field,
            mask_path,
        }
    }
}

/// For every specified flag in `bindings`, copy its value into the request
/// and append its mask path to the mask stored at `mask_field`. The mask
/// keeps its existing entries first. Returns the number of fields set.
pub fn set_masked_fields(
    request: &mut Message,
    args: &ArgNamespace,
    mask_field: &str,
    bindings: &[MaskedField],
) -> usize {
    let mut mask = UpdateMask::from_message(request, mask_field);
    let mut changed = 0;
    for binding in bindings {
        if let Some(value) = args.get_json(binding.flag) {
            request.set_field(binding.field, value);
            if !mask.contains(binding.mask_path) {
                mask.push(binding.mask_path);
            }
            changed += 1;
        }
    }
    mask.write_to(request, mask_field);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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

    #[test]
    fn test_appends_to_existing_mask() {
        let mut request = Message::from_value(json!({
            "patchServiceAccountRequest": {"updateMask": "displayName"}
        }));
        let args = ArgNamespace::new(["gsurface"]).with("description", "new description");
        let changed = set_masked_fields(
            &mut request,
            &args,
            "patchServiceAccountRequest.updateMask",
            PATCH_FIELDS,
        );
        assert_eq!(changed, 1);
        assert_eq!(
            request.get_str("patchServiceAccountRequest.updateMask"),
            Some("displayName,description")
        );
        assert_eq!(
            request.get_str("patchServiceAccountRequest.serviceAccount.description"),
            Some("new description")
        );
    }

    #[test]
    fn test_nothing_specified_leaves_mask_absent() {
        let mut request = Message::new();
        let args = ArgNamespace::new(["gsurface"]);
        let changed = set_masked_fields(
            &mut request,
            &args,
            "patchServiceAccountRequest.updateMask",
            PATCH_FIELDS,
        );
        assert_eq!(changed, 0);
        assert!(request.is_empty());
    }

    #[test]
    fn test_does_not_duplicate_mask_entries() {
        let mut request = Message::from_value(json!({"updateMask": "displayName"}));
        let args = ArgNamespace::new(["gsurface"]).with("display_name", "x");
        set_masked_fields(
            &mut request,
            &args,
            "updateMask",
            &[MaskedField::new("display_name", "provider.displayName", "displayName")],
        );
        assert_eq!(request.get_str("updateMask"), Some("displayName"));
    }
}
