//! Command dispatch trait for keeping main.rs small
//!
//! Each level of the command tree implements `Execute` and forwards to the
//! level below, so `main` only calls `cli.command.execute(&ctx)`.

use anyhow::Result;

use super::{util, Context};
use crate::cli::Commands;

/// Trait for executing CLI commands
pub trait Execute {
    fn execute(self, ctx: &Context) -> Result<()>;
}

impl Execute for Commands {
    fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            Commands::Iam { command } => command.execute(ctx),
            Commands::ApiGateway { command } => command.execute(ctx),
            Commands::Version { verbose } => util::cmd_version(ctx, verbose),
            Commands::Completion { shell } => util::cmd_completion(shell),
            Commands::Man { out_dir } => util::cmd_man(out_dir.as_ref()),
        }
    }
}
