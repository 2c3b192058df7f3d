//! API Gateway long-running operations: cancel and describe.

use serde_json::Value;
use std::io::Write;
use tracing::debug;

use super::ApiCommand;
use crate::api::api_gateway;
use crate::args::ArgNamespace;
use crate::console::{prompt_continue, PromptOptions, Prompter};
use crate::errors::Result;
use crate::message::Message;
use crate::resource::ResourceRef;
use crate::transport::Transport;

/// Thin client over the API Gateway operations collection.
pub struct OperationsClient<'a> {
    transport: &'a dyn Transport,
}

impl<'a> OperationsClient<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    fn call(
        &self,
        command: ApiCommand,
        operation: &ResourceRef,
        args: &ArgNamespace,
        out: &mut dyn Write,
    ) -> Result<Value> {
        let mut request = Message::new();
        request.set_field("name", operation.relative_name());
        command.execute(self.transport, operation, args, request, out)
    }

    /// Request cancellation. The response body is not printed.
    pub fn cancel(&self, operation: &ResourceRef) -> Result<Value> {
        let args = ArgNamespace::new(["gsurface", "api-gateway", "operations", "cancel"]);
        self.call(
            ApiCommand::new(api_gateway::OPERATIONS_CANCEL),
            operation,
            &args,
            &mut std::io::sink(),
        )
    }

    pub fn get(&self, operation: &ResourceRef, out: &mut dyn Write) -> Result<Value> {
        let args = ArgNamespace::new(["gsurface", "api-gateway", "operations", "describe"]);
        self.call(
            ApiCommand::new(api_gateway::OPERATIONS_GET).print_response(),
            operation,
            &args,
            out,
        )
    }
}

/// Confirm, cancel once, then point at `describe` for the outcome.
///
/// A declined or unattended prompt fails before anything is sent.
pub fn cancel_operation(
    client: &OperationsClient<'_>,
    prompter: &dyn Prompter,
    operation: &ResourceRef,
    prompts_disabled: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let name = operation.relative_name();
    prompt_continue(
        prompter,
        &format!("The operation [{name}] will be cancelled."),
        PromptOptions {
            default: true,
            throw_if_unattended: true,
            cancel_on_no: true,
            disabled: prompts_disabled,
        },
    )?;

    client.cancel(operation)?;
    debug!(operation = name, "cancellation requested");

    writeln!(
        out,
        "Operation cancellation requested [{name}]. Use the following command to check its status:"
    )?;
    writeln!(out)?;
    writeln!(out, "  gsurface api-gateway operations describe {name}")?;
    Ok(())
}

pub fn describe_operation(
    client: &OperationsClient<'_>,
    operation: &ResourceRef,
    out: &mut dyn Write,
) -> Result<Value> {
    client.get(operation, out)
}
