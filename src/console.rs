//! Confirmation prompts.
//!
//! Prompting goes through the [`Prompter`] trait so commands can be driven
//! without a terminal in tests.

use std::io;

use crate::errors::{Error, Result};

/// Answers yes/no questions.
pub trait Prompter {
    /// Whether a human can answer right now.
    fn is_interactive(&self) -> bool;

    /// Ask `message`, offering `default` on empty input.
    fn confirm(&self, message: &str, default: bool) -> io::Result<bool>;
}

/// Prompts on the controlling terminal with dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn is_interactive(&self) -> bool {
        atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stderr)
    }

    fn confirm(&self, message: &str, default: bool) -> io::Result<bool> {
        eprintln!("{}\n", message);
        dialoguer::Confirm::new()
            .with_prompt("Do you want to continue")
            .default(default)
            .interact()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptOptions {
    /// Answer used for empty input and when prompts are disabled.
    pub default: bool,
    /// Fail instead of assuming the default without a terminal.
    pub throw_if_unattended: bool,
    /// Turn a "no" into [`Error::Cancelled`].
    pub cancel_on_no: bool,
    /// Prompts disabled (`--quiet`): take the default without asking.
    pub disabled: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            default: true,
            throw_if_unattended: false,
            cancel_on_no: false,
            disabled: false,
        }
    }
}

/// Ask whether to continue.
///
/// Order of checks: disabled prompts take the default; a missing terminal
/// either fails (`throw_if_unattended`) or takes the default; otherwise the
/// user answers, and a "no" fails with [`Error::Cancelled`] when
/// `cancel_on_no` is set.
pub fn prompt_continue(
    prompter: &dyn Prompter,
    message: &str,
    options: PromptOptions,
) -> Result<bool> {
    if options.disabled {
        return Ok(options.default);
    }
    if !prompter.is_interactive() {
        if options.throw_if_unattended {
            return Err(Error::UnattendedPrompt);
        }
        return Ok(options.default);
    }
    let answer = prompter.confirm(message, options.default)?;
    if !answer && options.cancel_on_no {
        return Err(Error::Cancelled);
    }
    Ok(answer)
}
