//! Status lines printed after enable/disable calls succeed.

use serde_json::Value;
use std::io::{self, Write};

use crate::args::ArgNamespace;

const ENABLE_ACCOUNT_PATH: [&str; 3] = ["iam", "service-accounts", "enable"];
const DISABLE_ACCOUNT_PATH: [&str; 3] = ["iam", "service-accounts", "disable"];

fn arg<'a>(args: &'a ArgNamespace, name: &str) -> &'a str {
    args.get_str(name).unwrap_or_default()
}

/// `Enabled service account [..].`, only for `iam service-accounts enable`.
pub fn enable_iam_account_confirmation(
    _response: &Value,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> io::Result<()> {
    if args.command_path_ends_with(&ENABLE_ACCOUNT_PATH) {
        writeln!(
            out,
            "Enabled service account [{}].",
            arg(args, "service_account")
        )?;
    }
    Ok(())
}

/// `Disabled service account [..].`, only for `iam service-accounts disable`.
pub fn disable_iam_account_confirmation(
    _response: &Value,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> io::Result<()> {
    if args.command_path_ends_with(&DISABLE_ACCOUNT_PATH) {
        writeln!(
            out,
            "Disabled service account [{}].",
            arg(args, "service_account")
        )?;
    }
    Ok(())
}

pub fn enable_iam_key_confirmation(
    _response: &Value,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(
        out,
        "Enabled key [{}] for service account [{}].",
        arg(args, "iam_key"),
        arg(args, "iam_account")
    )
}

pub fn disable_iam_key_confirmation(
    _response: &Value,
    args: &ArgNamespace,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(
        out,
        "Disabled key [{}] for service account [{}].",
        arg(args, "iam_key"),
        arg(args, "iam_account")
    )
}
