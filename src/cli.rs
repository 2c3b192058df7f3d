//! CLI argument definitions for gsurface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gsurface")]
#[command(version)]
#[command(about = "Manage cloud IAM resources and API Gateway operations", long_about = None)]
pub struct Cli {
    /// Disable prompts (taking their defaults) and suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project for project-scoped resources (overrides the configured project)
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub verbosity: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identity and Access Management
    Iam {
        #[command(subcommand)]
        command: IamCommands,
    },
    /// API Gateway
    ApiGateway {
        #[command(subcommand)]
        command: ApiGatewayCommands,
    },
    /// Show version information
    Version {
        /// Show build details
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Directory to write the man page to
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum IamCommands {
    /// Service accounts
    ServiceAccounts {
        #[command(subcommand)]
        command: ServiceAccountCommands,
    },
    /// Workforce identity pools
    WorkforcePools {
        #[command(subcommand)]
        command: WorkforcePoolCommands,
    },
    /// Policy bindings
    PolicyBindings {
        #[command(subcommand)]
        command: PolicyBindingCommands,
    },
}

#[derive(Subcommand)]
pub enum ServiceAccountCommands {
    /// Enable a service account
    Enable {
        /// Service account email or full name
        service_account: String,
    },
    /// Disable a service account
    Disable {
        /// Service account email or full name
        service_account: String,
    },
    /// Update the display name or description of a service account
    Update {
        /// Service account email or full name
        service_account: String,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show a service account
    Describe {
        /// Service account email or full name
        #[arg(required_unless_present = "unique_id")]
        service_account: Option<String>,
        /// Numeric unique id of the service account
        #[arg(long, conflicts_with = "service_account")]
        unique_id: Option<String>,
    },
    /// Show the IAM policy of a service account
    GetIamPolicy {
        service_account: String,
    },
    /// Replace the IAM policy of a service account
    SetIamPolicy {
        service_account: String,
        /// YAML or JSON file containing the policy (`-` for stdin)
        policy_file: String,
    },
    /// Service account keys
    Keys {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Enable a key
    Enable {
        /// Key id or full key name
        iam_key: String,
        /// Service account owning the key
        #[arg(long)]
        iam_account: Option<String>,
    },
    /// Disable a key
    Disable {
        /// Key id or full key name
        iam_key: String,
        /// Service account owning the key
        #[arg(long)]
        iam_account: Option<String>,
    },
    /// Upload a public key
    Upload {
        /// PEM or X.509 public key file (`-` for stdin)
        public_key_file: String,
        /// Service account to add the key to
        #[arg(long)]
        iam_account: String,
    },
}

#[derive(Subcommand)]
pub enum WorkforcePoolCommands {
    /// Workforce pool providers
    Providers {
        #[command(subcommand)]
        command: ProviderCommands,
    },
}

#[derive(Subcommand)]
pub enum ProviderCommands {
    /// Create an OIDC workforce pool provider
    CreateOidc {
        #[command(flatten)]
        provider: ProviderArgs,
        #[command(flatten)]
        oidc: OidcArgs,
        #[command(flatten)]
        extra: ExtraAttributesArgs,
        #[command(flatten)]
        extended: ExtendedAttributesArgs,
    },
    /// Update an OIDC workforce pool provider
    UpdateOidc {
        #[command(flatten)]
        provider: ProviderArgs,
        #[command(flatten)]
        oidc: OidcArgs,
        #[command(flatten)]
        extra: ExtraAttributesArgs,
        /// Remove the extra attributes OAuth 2.0 client (wins over the detail flags)
        #[arg(long)]
        clear_extra_attributes_config: bool,
    },
}

#[derive(Args)]
pub struct ProviderArgs {
    /// Provider id or full provider name
    pub provider: String,
    #[arg(long)]
    pub workforce_pool: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Disable the provider (`--disabled=false` to re-enable)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub disabled: Option<bool>,
    /// Attribute mapping as KEY=VALUE pairs separated by commas
    #[arg(long, value_name = "KEY=VALUE,...", value_parser = parse_key_value_map)]
    pub attribute_mapping: Option<Value>,
    /// CEL expression applied to the mapped attributes
    #[arg(long)]
    pub attribute_condition: Option<String>,
}

#[derive(Args)]
pub struct OidcArgs {
    #[arg(long)]
    pub issuer_uri: Option<String>,
    #[arg(long)]
    pub client_id: Option<String>,
    #[arg(long)]
    pub client_secret_value: Option<String>,
    #[arg(long, value_enum)]
    pub web_sso_response_type: Option<ResponseType>,
    #[arg(long, value_enum)]
    pub web_sso_assertion_claims_behavior: Option<AssertionClaimsBehavior>,
    #[arg(long, value_delimiter = ',')]
    pub web_sso_additional_scopes: Option<Vec<String>>,
}

#[derive(Args)]
pub struct ExtraAttributesArgs {
    /// Directory attributes to fetch for the extra attributes client
    #[arg(long, value_parser = ["azure-ad-groups-mail", "azure-ad-groups-id", "azure-ad-groups-display-name"])]
    pub extra_attributes_type: Option<String>,
    #[arg(long)]
    pub extra_attributes_client_id: Option<String>,
    #[arg(long)]
    pub extra_attributes_client_secret_value: Option<String>,
    #[arg(long)]
    pub extra_attributes_issuer_uri: Option<String>,
    #[arg(long)]
    pub extra_attributes_filter: Option<String>,
}

#[derive(Args)]
pub struct ExtendedAttributesArgs {
    /// Directory attributes to fetch for the extended attributes client
    #[arg(long, value_parser = ["azure-ad-groups-id"])]
    pub extended_attributes_type: Option<String>,
    #[arg(long)]
    pub extended_attributes_client_id: Option<String>,
    #[arg(long)]
    pub extended_attributes_client_secret_value: Option<String>,
    #[arg(long)]
    pub extended_attributes_issuer_uri: Option<String>,
    #[arg(long)]
    pub extended_attributes_filter: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResponseType {
    Code,
    IdToken,
}

impl ResponseType {
    pub fn api_value(self) -> &'static str {
        match self {
            ResponseType::Code => "CODE",
            ResponseType::IdToken => "ID_TOKEN",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AssertionClaimsBehavior {
    MergeUserInfoOverIdTokenClaims,
    OnlyIdTokenClaims,
}

impl AssertionClaimsBehavior {
    pub fn api_value(self) -> &'static str {
        match self {
            AssertionClaimsBehavior::MergeUserInfoOverIdTokenClaims => {
                "MERGE_USER_INFO_OVER_ID_TOKEN_CLAIMS"
            }
            AssertionClaimsBehavior::OnlyIdTokenClaims => "ONLY_ID_TOKEN_CLAIMS",
        }
    }
}

#[derive(Subcommand)]
pub enum PolicyBindingCommands {
    /// Create a policy binding in a project
    Create {
        /// Policy binding id
        policy_binding: String,
        #[arg(long)]
        location: Option<String>,
        /// Principal set the binding targets
        #[arg(long)]
        target_principal_set: Option<String>,
        /// Full name of the policy to bind
        #[arg(long)]
        policy: Option<String>,
        /// Policy kind (defaults to PRINCIPAL_ACCESS_BOUNDARY)
        #[arg(long)]
        policy_kind: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
        /// YAML or JSON file with `expression`, `title` and optional `description`
        #[arg(long)]
        condition_from_file: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ApiGatewayCommands {
    /// Long-running operations
    Operations {
        #[command(subcommand)]
        command: OperationCommands,
    },
}

#[derive(Subcommand)]
pub enum OperationCommands {
    /// Cancel an operation
    Cancel {
        #[command(flatten)]
        operation: OperationArgs,
    },
    /// Show an operation
    Describe {
        #[command(flatten)]
        operation: OperationArgs,
    },
}

#[derive(Args)]
pub struct OperationArgs {
    /// Operation id or full operation name
    pub operation: String,
    /// Location of the operation (overrides the configured location)
    #[arg(long)]
    pub location: Option<String>,
}

/// Parse `k1=v1,k2=v2` into a JSON object.
pub fn parse_key_value_map(input: &str) -> Result<Value, String> {
    let mut map = Map::new();
    for pair in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", pair))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty key in '{}'", pair));
        }
        map.insert(key.to_string(), Value::String(value.trim().to_string()));
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_value_map() {
        let value = parse_key_value_map("google.subject=assertion.sub, attribute.tid=assertion.tid")
            .unwrap();
        assert_eq!(
            value,
            json!({"google.subject": "assertion.sub", "attribute.tid": "assertion.tid"})
        );
    }

    #[test]
    fn test_parse_key_value_map_rejects_bare_key() {
        assert!(parse_key_value_map("google.subject").is_err());
    }

    #[test]
    fn test_parse_describe_by_unique_id() {
        let cli = Cli::try_parse_from([
            "gsurface",
            "iam",
            "service-accounts",
            "describe",
            "--unique-id",
            "1234",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Iam {
                command: IamCommands::ServiceAccounts {
                    command: ServiceAccountCommands::Describe { unique_id: Some(_), .. }
                }
            }
        ));
    }

    #[test]
    fn test_clear_accepted_with_extra_type() {
        let cli = Cli::try_parse_from([
            "gsurface",
            "iam",
            "workforce-pools",
            "providers",
            "update-oidc",
            "p",
            "--clear-extra-attributes-config",
            "--extra-attributes-type",
            "azure-ad-groups-id",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Iam {
                command: IamCommands::WorkforcePools {
                    command: WorkforcePoolCommands::Providers {
                        command: ProviderCommands::UpdateOidc {
                            clear_extra_attributes_config: true,
                            ..
                        }
                    }
                }
            }
        ));
    }
}
