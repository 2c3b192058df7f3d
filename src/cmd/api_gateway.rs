//! `gsurface api-gateway ...` handlers.

use anyhow::Result;
use std::io;

use gsurface::console::ConsolePrompter;
use gsurface::operations::{cancel_operation, describe_operation, OperationsClient};
use gsurface::resource::{self, ResourceRef};

use super::dispatch::Execute;
use super::Context;
use crate::cli::{ApiGatewayCommands, OperationArgs, OperationCommands};

/// Resolve the operation before any prompt; `--location` wins over config.
fn operation_ref(ctx: &Context, args: &OperationArgs) -> Result<ResourceRef> {
    let location = args
        .location
        .as_deref()
        .or(ctx.config.api_gateway_location.as_deref());
    Ok(resource::api_gateway_operation(
        &args.operation,
        location,
        ctx.project(),
    )?)
}

impl Execute for ApiGatewayCommands {
    fn execute(self, ctx: &Context) -> Result<()> {
        let ApiGatewayCommands::Operations { command } = self;
        let transport = ctx.transport();
        let client = OperationsClient::new(&transport);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match command {
            OperationCommands::Cancel { operation } => {
                let operation = operation_ref(ctx, &operation)?;
                cancel_operation(&client, &ConsolePrompter, &operation, ctx.quiet, &mut out)?;
            }
            OperationCommands::Describe { operation } => {
                let operation = operation_ref(ctx, &operation)?;
                describe_operation(&client, &operation, &mut out)?;
            }
        }
        Ok(())
    }
}
