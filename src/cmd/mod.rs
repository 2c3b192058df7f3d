//! Command handlers for the gsurface CLI

use gsurface::config::Config;
use gsurface::transport::HttpTransport;

pub mod api_gateway;
pub mod dispatch;
pub mod iam;
pub mod util;

/// What every handler needs beyond its own flags.
pub struct Context {
    pub config: Config,
    /// `--project`, before falling back to the configured project.
    pub project: Option<String>,
    /// Prompts disabled (`--quiet` or `GSURFACE_QUIET`).
    pub quiet: bool,
}

impl Context {
    pub fn project(&self) -> Option<&str> {
        self.config.resolve_project(self.project.as_deref())
    }

    /// The access token is only fetched on the first request.
    pub fn transport(&self) -> HttpTransport {
        HttpTransport::from_config(&self.config)
    }
}
