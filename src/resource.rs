//! Resource references and the parsers that build them from flags.

use std::fmt;
use tracing::warn;

use crate::errors::{Error, Result};
use crate::ui;

/// A fully-qualified relative resource name within one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    collection: &'static str,
    relative_name: String,
}

impl ResourceRef {
    pub fn new(collection: &'static str, relative_name: impl Into<String>) -> Self {
        Self {
            collection,
            relative_name: relative_name.into(),
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn relative_name(&self) -> &str {
        &self.relative_name
    }

    /// Last path segment, e.g. the operation id.
    pub fn name(&self) -> &str {
        self.relative_name
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_name)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_name)
    }
}

pub mod collections {
    pub const SERVICE_ACCOUNTS: &str = "iam.projects.serviceAccounts";
    pub const SERVICE_ACCOUNT_KEYS: &str = "iam.projects.serviceAccounts.keys";
    pub const WORKFORCE_POOL_PROVIDERS: &str = "iam.locations.workforcePools.providers";
    pub const POLICY_BINDING_PARENTS: &str = "iam.projects.locations";
    pub const API_GATEWAY_OPERATIONS: &str = "apigateway.projects.locations.operations";
}

/// Split `name` against a pattern like `projects/*/locations/*/operations/*`.
/// Returns the wildcard segments in order.
fn match_pattern<'a>(name: &'a str, pattern: &str) -> Option<Vec<&'a str>> {
    let parts: Vec<&str> = name.split('/').collect();
    let expected: Vec<&str> = pattern.split('/').collect();
    if parts.len() != expected.len() {
        return None;
    }
    let mut captured = Vec::new();
    for (part, want) in parts.iter().zip(&expected) {
        if *want == "*" {
            if part.is_empty() {
                return None;
            }
            captured.push(*part);
        } else if part != want {
            return None;
        }
    }
    Some(captured)
}

/// Service account from an email, a unique id, or a full resource name.
/// The project segment is always the `-` wildcard.
pub fn service_account(identifier: &str) -> Result<ResourceRef> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(Error::required_argument(
            "SERVICE_ACCOUNT",
            "A service account email or unique ID is required.",
        ));
    }
    if let Some(parts) = match_pattern(identifier, "projects/*/serviceAccounts/*") {
        return Ok(ResourceRef::new(
            collections::SERVICE_ACCOUNTS,
            format!("projects/{}/serviceAccounts/{}", parts[0], parts[1]),
        ));
    }
    if identifier.contains('/') {
        return Err(Error::invalid_argument(
            "SERVICE_ACCOUNT",
            format!("[{identifier}] is not a service account email, unique ID or resource name."),
        ));
    }
    Ok(ResourceRef::new(
        collections::SERVICE_ACCOUNTS,
        format!("projects/-/serviceAccounts/{identifier}"),
    ))
}

/// Service account key from a key id plus `--iam-account`, or a full key name.
pub fn service_account_key(key: &str, account: Option<&str>) -> Result<ResourceRef> {
    if let Some(parts) = match_pattern(key, "projects/*/serviceAccounts/*/keys/*") {
        return Ok(ResourceRef::new(
            collections::SERVICE_ACCOUNT_KEYS,
            format!(
                "projects/{}/serviceAccounts/{}/keys/{}",
                parts[0], parts[1], parts[2]
            ),
        ));
    }
    let account = account.ok_or_else(|| {
        Error::required_argument("--iam-account", "The service account owning the key is required.")
    })?;
    let account = service_account(account)?;
    if key.contains('/') {
        warn!(key, "key id is not a full key name but contains '/'");
        ui::warning(&format!(
            "[{key}] is not of the form projects/PROJECT/serviceAccounts/ACCOUNT/keys/KEY; \
             treating it as a key id."
        ));
    }
    Ok(ResourceRef::new(
        collections::SERVICE_ACCOUNT_KEYS,
        format!("{}/keys/{}", account.relative_name(), key),
    ))
}

/// Workforce pool provider, from its id plus pool and location, or a full name.
pub fn workforce_pool_provider(
    provider: &str,
    workforce_pool: Option<&str>,
    location: Option<&str>,
) -> Result<ResourceRef> {
    if let Some(parts) = match_pattern(provider, "locations/*/workforcePools/*/providers/*") {
        return Ok(ResourceRef::new(
            collections::WORKFORCE_POOL_PROVIDERS,
            format!(
                "locations/{}/workforcePools/{}/providers/{}",
                parts[0], parts[1], parts[2]
            ),
        ));
    }
    let pool = workforce_pool.ok_or_else(|| {
        Error::required_argument("--workforce-pool", "The workforce pool is required.")
    })?;
    let location = location
        .ok_or_else(|| Error::required_argument("--location", "The location is required."))?;
    Ok(ResourceRef::new(
        collections::WORKFORCE_POOL_PROVIDERS,
        format!("locations/{location}/workforcePools/{pool}/providers/{provider}"),
    ))
}

/// Parent of a policy binding: `projects/{project}/locations/{location}`.
pub fn policy_binding_parent(project: Option<&str>, location: Option<&str>) -> Result<ResourceRef> {
    let project = project.ok_or_else(|| {
        Error::required_argument(
            "--project",
            "Set --project or the `project` configuration value.",
        )
    })?;
    let location = location
        .ok_or_else(|| Error::required_argument("--location", "The location is required."))?;
    Ok(ResourceRef::new(
        collections::POLICY_BINDING_PARENTS,
        format!("projects/{project}/locations/{location}"),
    ))
}

/// API Gateway operation from a full name, or an id plus location and project.
pub fn api_gateway_operation(
    operation: &str,
    location: Option<&str>,
    project: Option<&str>,
) -> Result<ResourceRef> {
    if let Some(parts) = match_pattern(operation, "projects/*/locations/*/operations/*") {
        return Ok(ResourceRef::new(
            collections::API_GATEWAY_OPERATIONS,
            format!(
                "projects/{}/locations/{}/operations/{}",
                parts[0], parts[1], parts[2]
            ),
        ));
    }
    if operation.is_empty() || operation.contains('/') {
        return Err(Error::invalid_argument(
            "OPERATION",
            format!(
                "[{operation}] must be an operation ID or a name of the form \
                 projects/PROJECT/locations/LOCATION/operations/OPERATION."
            ),
        ));
    }
    let location = location.ok_or_else(|| {
        Error::required_argument(
            "--location",
            "Set --location or the `api_gateway_location` configuration value.",
        )
    })?;
    let project = project.ok_or_else(|| {
        Error::required_argument(
            "--project",
            "Set --project or the `project` configuration value.",
        )
    })?;
    Ok(ResourceRef::new(
        collections::API_GATEWAY_OPERATIONS,
        format!("projects/{project}/locations/{location}/operations/{operation}"),
    ))
}
