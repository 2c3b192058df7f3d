//! Terminal output helpers
//!
//! Command results (responses, confirmation lines) go to stdout. Warnings
//! and errors go to stderr; warnings respect quiet mode.

use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("GSURFACE_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Render an API response the way results are shown: YAML, nothing for `{}`.
pub fn render_response(response: &Value) -> String {
    match response {
        Value::Null => String::new(),
        Value::Object(map) if map.is_empty() => String::new(),
        other => serde_yaml::to_string(other).unwrap_or_else(|_| other.to_string()),
    }
}

pub fn print_response(out: &mut dyn Write, response: &Value) -> io::Result<()> {
    let rendered = render_response(response);
    if !rendered.is_empty() {
        write!(out, "{}", rendered)?;
        if !rendered.ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print a warning on stderr unless quiet.
pub fn warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "WARNING:".yellow().bold(), message);
    }
}

/// Print an error on stderr. Never suppressed.
pub fn error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}
