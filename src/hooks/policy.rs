//! IAM policy version handling.

use crate::args::ArgNamespace;
use crate::errors::Result;
use crate::field_mask::UpdateMask;
use crate::message::Message;
use crate::resource::ResourceRef;

/// Highest policy version this client understands (conditional bindings).
pub const MAX_LIBRARY_IAM_SUPPORTED_VERSION: i64 = 3;

/// Hook that always requests the highest supported policy version at `api_field`.
pub fn use_max_requested_policy_version(
    api_field: &'static str,
) -> impl Fn(&ResourceRef, &ArgNamespace, Message) -> Result<Message> {
    move |_resource, _args, mut request| {
        request.set_field(api_field, MAX_LIBRARY_IAM_SUPPORTED_VERSION);
        Ok(request)
    }
}

/// Hook that appends `version` to the mask at `update_mask_path` unless it
/// is already one of the mask's paths.
pub fn add_version_to_update_mask_if_not_present(
    update_mask_path: &'static str,
) -> impl Fn(&ResourceRef, &ArgNamespace, Message) -> Result<Message> {
    move |_resource, _args, mut request| {
        let mut mask = UpdateMask::from_message(&request, update_mask_path);
        if !mask.contains("version") {
            mask.push("version");
            mask.write_to(&mut request, update_mask_path);
        }
        Ok(request)
    }
}
