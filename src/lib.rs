//! # gsurface - command surface for cloud IAM and API Gateway
//!
//! The library holds everything behind the `gsurface` binary: request
//! hooks that turn parsed flags into API request messages, the API method
//! descriptors those messages are sent through, and the confirm-then-cancel
//! flow for API Gateway operations.
//!
//! ## Modules
//!
//! - [`args`] - Parsed command arguments as seen by hooks
//! - [`message`] - JSON-backed request messages with dotted field paths
//! - [`field_mask`] - Comma-separated update masks
//! - [`hooks`] - Request and response hooks
//! - [`api`] - API method descriptors and request preparation
//! - [`transport`] - Sending prepared calls over HTTP
//! - [`operations`] - One function per command, shared by the CLI and tests
//! - [`console`] - Confirmation prompts
//! - [`config`] - User configuration
//!
//! ## Example
//!
//! ```no_run
//! use gsurface::args::ArgNamespace;
//! use gsurface::config::Config;
//! use gsurface::operations::service_account;
//! use gsurface::transport::HttpTransport;
//!
//! let config = Config::load().expect("Failed to load config");
//! let transport = HttpTransport::from_config(&config);
//! let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "describe"])
//!     .with("service_account", "robot@my-project.iam.gserviceaccount.com");
//!
//! service_account::describe(&transport, &args, &mut std::io::stdout())
//!     .expect("describe failed");
//! ```

pub mod api;
pub mod args;
pub mod config;
pub mod console;
pub mod errors;
pub mod field_mask;
pub mod hooks;
pub mod message;
pub mod operations;
pub mod resource;
pub mod transport;
pub mod ui;

pub use errors::{Error, Result};
