//! Blocking HTTP transport for prepared API calls.

use serde_json::Value;
use std::cell::OnceCell;
use std::process::Command;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use ureq::Agent;

use crate::api::{PreparedCall, Service};
use crate::config::Config;

/// Failures reported by the backend or the network. These reach the user
/// exactly as produced here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("No access token available: {0}")]
    Credentials(String),
}

/// Sends prepared calls to a backend service.
pub trait Transport {
    fn send(&self, call: &PreparedCall) -> Result<Value, TransportError>;
}

/// Service root URLs, always ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub iam: String,
    pub api_gateway: String,
}

impl Endpoints {
    pub fn from_config(config: &Config) -> Self {
        Self {
            iam: with_trailing_slash(&config.iam_endpoint),
            api_gateway: with_trailing_slash(&config.api_gateway_endpoint),
        }
    }

    pub fn root(&self, service: Service) -> &str {
        match service {
            Service::Iam => &self.iam,
            Service::ApiGateway => &self.api_gateway,
        }
    }

    pub fn url(&self, call: &PreparedCall) -> String {
        format!("{}{}", self.root(call.service), call.path)
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Where bearer tokens come from.
#[derive(Debug, Clone)]
pub enum TokenSource {
    Static(String),
    /// Ask the installed `gcloud` for a token, once per process.
    GcloudCli,
}

pub struct HttpTransport {
    agent: Agent,
    endpoints: Endpoints,
    token_source: TokenSource,
    token: OnceCell<String>,
}

impl HttpTransport {
    pub fn new(endpoints: Endpoints, token_source: TokenSource, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("gsurface/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            endpoints,
            token_source,
            token: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let token_source = match &config.access_token {
            Some(token) => TokenSource::Static(token.clone()),
            None => TokenSource::GcloudCli,
        };
        Self::new(
            Endpoints::from_config(config),
            token_source,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn access_token(&self) -> Result<&str, TransportError> {
        if let Some(token) = self.token.get() {
            return Ok(token);
        }
        let token = match &self.token_source {
            TokenSource::Static(token) => token.clone(),
            TokenSource::GcloudCli => gcloud_access_token()?,
        };
        Ok(self.token.get_or_init(|| token))
    }
}

fn gcloud_access_token() -> Result<String, TransportError> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .map_err(|e| {
            TransportError::Credentials(format!(
                "failed to run gcloud ({}). Set GSURFACE_ACCESS_TOKEN or `access_token` in the config file",
                e
            ))
        })?;
    if !output.status.success() {
        return Err(TransportError::Credentials(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(TransportError::Credentials(
            "gcloud printed an empty token".to_string(),
        ));
    }
    Ok(token)
}

impl Transport for HttpTransport {
    fn send(&self, call: &PreparedCall) -> Result<Value, TransportError> {
        let url = self.endpoints.url(call);
        debug!(method = call.method_id, http = call.http_method.as_str(), %url, "sending request");

        let mut request = self
            .agent
            .request(call.http_method.as_str(), &url)
            .set("Authorization", &format!("Bearer {}", self.access_token()?))
            .set("Accept", "application/json");
        for (key, value) in &call.query {
            request = request.query(key, value);
        }

        let result = match &call.body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|e| TransportError::Decode(e.to_string()))?;
                parse_body(&text)
            }
            Err(ureq::Error::Status(code, response)) => {
                let text = response.into_string().unwrap_or_default();
                debug!(code, body = %text, "request failed");
                Err(TransportError::Status {
                    code,
                    message: error_message(&text),
                })
            }
            Err(ureq::Error::Transport(e)) => Err(TransportError::Transport(e.to_string())),
        }
    }
}

fn parse_body(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(text).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Pull `error.message` out of a Google API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
