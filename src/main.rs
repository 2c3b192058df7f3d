//! CLI entry point for gsurface.

mod cli;
mod cmd;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gsurface::config::Config;
use gsurface::ui;

use cli::Cli;
use cmd::dispatch::Execute;
use cmd::Context;

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbosity: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| verbosity.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.verbosity);

    if let Err(err) = run(cli) {
        ui::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.quiet {
        std::env::set_var("GSURFACE_QUIET", "1");
    }
    let config = Config::load()?;
    let ctx = Context {
        config,
        project: cli.project,
        quiet: ui::is_quiet(),
    };
    cli.command.execute(&ctx)
}
