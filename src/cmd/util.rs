//! `version`, `man` and `completion`.

use anyhow::{Context as _, Result};
use clap::{Command, CommandFactory};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use gsurface::config;
use gsurface::transport::Endpoints;

use super::Context;
use crate::cli::Cli;

pub fn cmd_version(ctx: &Context, verbose: bool) -> Result<()> {
    let stdout = io::stdout();
    write_version(ctx, verbose, &mut stdout.lock())
}

/// With `verbose`, also reports where requests go and which config file was read.
fn write_version(ctx: &Context, verbose: bool, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "gsurface {}", env!("CARGO_PKG_VERSION"))?;
    if !verbose {
        return Ok(());
    }

    writeln!(out, "commit: {}", env!("GSURFACE_GIT_SHA"))?;
    writeln!(out, "built: {}", env!("GSURFACE_BUILD_DATE"))?;
    match config::config_path() {
        Some(path) if path.exists() => writeln!(out, "config: {}", path.display())?,
        Some(path) => writeln!(out, "config: {} (not found, using defaults)", path.display())?,
        None => writeln!(out, "config: none")?,
    }
    let endpoints = Endpoints::from_config(&ctx.config);
    writeln!(out, "iam endpoint: {}", endpoints.iam)?;
    writeln!(out, "api gateway endpoint: {}", endpoints.api_gateway)?;
    writeln!(out, "project: {}", ctx.project().unwrap_or("(unset)"))?;
    let credentials = match ctx.config.access_token {
        Some(_) => "configured access token",
        None => "gcloud auth print-access-token",
    };
    writeln!(out, "credentials: {credentials}")?;
    Ok(())
}

/// Write `gsurface.1` plus one page per subcommand, e.g.
/// `gsurface-api-gateway-operations-cancel.1`.
pub fn cmd_man(out_dir: Option<&PathBuf>) -> Result<()> {
    let out_dir = out_dir.cloned().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let written = write_man_pages(&Cli::command(), &out_dir)?;
    println!("Wrote {} man pages to {}", written.len(), out_dir.display());
    Ok(())
}

fn write_man_pages(root: &Command, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    render_page(root, root.get_name(), out_dir, &mut written)?;
    Ok(written)
}

fn render_page(
    cmd: &Command,
    title: &str,
    out_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .title(title.to_string())
        .render(&mut buffer)?;
    let path = out_dir.join(format!("{title}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    written.push(path);

    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" || sub.is_hide_set() {
            continue;
        }
        render_page(sub, &format!("{title}-{}", sub.get_name()), out_dir, written)?;
    }
    Ok(())
}

pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
