//! Shared business logic layer for commands.
//!
//! Each command is an [`ApiCommand`]: one API method, the request hooks that
//! shape its request, and the response hooks that report on the result.
//! The CLI layer only turns flags into an [`ArgNamespace`] and calls in here.

use serde_json::Value;
use std::io::Write;
use tracing::debug;

use crate::api::ApiMethod;
use crate::args::ArgNamespace;
use crate::errors::Result;
use crate::hooks::{HookChain, RequestHook, ResponseHook};
use crate::message::Message;
use crate::resource::ResourceRef;
use crate::transport::Transport;
use crate::ui;

pub mod gateway_operation;
pub mod key;
pub mod policy_binding;
pub mod service_account;
pub mod workforce_provider;

pub use gateway_operation::{cancel_operation, describe_operation, OperationsClient};

/// One API call with its hooks.
pub struct ApiCommand {
    method: ApiMethod,
    hooks: HookChain,
    response_hooks: Vec<Box<dyn ResponseHook>>,
    print_response: bool,
}

impl ApiCommand {
    pub fn new(method: ApiMethod) -> Self {
        Self {
            method,
            hooks: HookChain::new(),
            response_hooks: Vec::new(),
            print_response: false,
        }
    }

    pub fn modify_request(mut self, hook: impl RequestHook + 'static) -> Self {
        self.hooks = self.hooks.then(hook);
        self
    }

    pub fn on_response(mut self, hook: impl ResponseHook + 'static) -> Self {
        self.response_hooks.push(Box::new(hook));
        self
    }

    /// Also print the response body as YAML.
    pub fn print_response(mut self) -> Self {
        self.print_response = true;
        self
    }

    /// Run hooks over `request`, send it, then run response hooks.
    /// Nothing is sent if a hook fails.
    pub fn execute(
        &self,
        transport: &dyn Transport,
        resource: &ResourceRef,
        args: &ArgNamespace,
        request: Message,
        out: &mut dyn Write,
    ) -> Result<Value> {
        let request = self.hooks.run(resource, args, request)?;
        let call = self.method.prepare(request)?;
        debug!(method = call.method_id, resource = %resource, "request prepared");

        let response = transport.send(&call)?;

        for hook in &self.response_hooks {
            hook.report(&response, args, out)?;
        }
        if self.print_response {
            ui::print_response(out, &response)?;
        }
        Ok(response)
    }
}
