//! Request and response hooks.
//!
//! A request hook receives the resource reference, the parsed arguments and
//! the request built so far, and returns the request with some fields set,
//! cleared or merged. Hooks run in order through a [`HookChain`] before the
//! call is sent. Response hooks run after a successful call and only write
//! status output.
//!
//! Every argument error a hook can raise is raised here, before anything
//! touches the network.

use serde_json::Value;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::args::ArgNamespace;
use crate::errors::Result;
use crate::message::Message;
use crate::resource::ResourceRef;

pub mod condition;
pub mod confirmation;
pub mod masked;
pub mod policy;
pub mod service_account;
pub mod workforce;

pub use condition::{parse_condition_from_file, update_request_with_condition_from_file, Condition};
pub use confirmation::{
    disable_iam_account_confirmation, disable_iam_key_confirmation,
    enable_iam_account_confirmation, enable_iam_key_confirmation,
};
pub use masked::{set_masked_fields, MaskedField};
pub use policy::{
    add_version_to_update_mask_if_not_present, use_max_requested_policy_version,
    MAX_LIBRARY_IAM_SUPPORTED_VERSION,
};
pub use service_account::{
    create_full_service_account_name_from_id, generate_public_key_data_from_file,
    set_service_account_resource, validate_update_field_mask,
};
pub use workforce::{
    add_clearable_extra_attributes_config_to_request,
    add_create_extra_and_extended_attributes_config_to_request,
    add_extra_attributes_config_field_mask, AttributesType,
};

/// Adjusts a request before it is sent.
pub trait RequestHook {
    fn process(&self, resource: &ResourceRef, args: &ArgNamespace, request: Message)
        -> Result<Message>;
}

impl<F> RequestHook for F
where
    F: Fn(&ResourceRef, &ArgNamespace, Message) -> Result<Message>,
{
    fn process(
        &self,
        resource: &ResourceRef,
        args: &ArgNamespace,
        request: Message,
    ) -> Result<Message> {
        self(resource, args, request)
    }
}

/// Reports on a response once it has arrived.
pub trait ResponseHook {
    fn report(&self, response: &Value, args: &ArgNamespace, out: &mut dyn Write)
        -> io::Result<()>;
}

impl<F> ResponseHook for F
where
    F: Fn(&Value, &ArgNamespace, &mut dyn Write) -> io::Result<()>,
{
    fn report(&self, response: &Value, args: &ArgNamespace, out: &mut dyn Write) -> io::Result<()> {
        self(response, args, out)
    }
}

/// Ordered request hooks for one command.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn RequestHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, hook: impl RequestHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook in order. The first error stops the chain.
    pub fn run(
        &self,
        resource: &ResourceRef,
        args: &ArgNamespace,
        mut request: Message,
    ) -> Result<Message> {
        for hook in &self.hooks {
            request = hook.process(resource, args, request)?;
        }
        Ok(request)
    }
}

/// Read a whole file as UTF-8. A path of `-` reads standard input.
pub(crate) fn read_file_contents(path: &str) -> std::result::Result<String, String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Unable to read from standard input: {}", e))?;
        return Ok(buf);
    }
    let bytes = std::fs::read(Path::new(path))
        .map_err(|e| format!("Unable to read file [{}]: {}", path, e))?;
    String::from_utf8(bytes).map_err(|_| format!("File [{}] is not valid UTF-8", path))
}
