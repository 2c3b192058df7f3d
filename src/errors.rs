//! Error types shared by hooks, commands and the transport.
//!
//! Hooks only ever fail with argument errors, which are raised before any
//! network call. Backend failures are carried through [`Error::Backend`]
//! without being rewritten.

use thiserror::Error;

use crate::transport::TransportError;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A flag or positional value was present but unusable.
    #[error("Invalid value for [{argument}]: {message}")]
    InvalidArgument { argument: String, message: String },

    /// None of a group of flags was supplied.
    #[error("One of [{}] must be supplied: {message}", arguments.join(", "))]
    OneOfArgumentsRequired {
        arguments: Vec<String>,
        message: String,
    },

    /// A value needed to build a resource name or request was missing.
    #[error("Missing required argument [{argument}]: {message}")]
    RequiredArgument { argument: String, message: String },

    #[error(
        "This prompt could not be answered because you are not in an interactive session. \
         You can re-run the command with the --quiet flag to accept default answers for all prompts."
    )]
    UnattendedPrompt,

    #[error("Aborted by user.")]
    Cancelled,

    #[error(transparent)]
    Backend(#[from] TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    pub fn one_of_required<I, S>(arguments: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::OneOfArgumentsRequired {
            arguments: arguments.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    pub fn required_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Error::RequiredArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// True for errors detected locally from user input.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. }
                | Error::OneOfArgumentsRequired { .. }
                | Error::RequiredArgument { .. }
        )
    }
}
