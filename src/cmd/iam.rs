//! `gsurface iam ...` handlers.
//!
//! Each handler copies its flags into an [`ArgNamespace`] and hands it to the
//! matching function in [`gsurface::operations`].

use anyhow::{Context as _, Result};
use serde_json::Value;
use std::io::{self, Write};

use gsurface::args::ArgNamespace;
use gsurface::hooks::parse_condition_from_file;
use gsurface::operations::{key, policy_binding, service_account, workforce_provider};
use gsurface::transport::Transport;

use super::dispatch::Execute;
use super::Context;
use crate::cli::{
    ExtendedAttributesArgs, ExtraAttributesArgs, IamCommands, KeyCommands, OidcArgs,
    PolicyBindingCommands, ProviderArgs, ProviderCommands, ServiceAccountCommands,
    WorkforcePoolCommands,
};

type Operation =
    fn(&dyn Transport, &ArgNamespace, &mut dyn Write) -> gsurface::Result<Value>;

fn namespace(path: &[&str]) -> ArgNamespace {
    ArgNamespace::new(["gsurface", "iam"].iter().chain(path).copied())
}

fn run(ctx: &Context, args: ArgNamespace, operation: Operation) -> Result<()> {
    let transport = ctx.transport();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    operation(&transport, &args, &mut out)?;
    Ok(())
}

impl Execute for IamCommands {
    fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            IamCommands::ServiceAccounts { command } => command.execute(ctx),
            IamCommands::WorkforcePools {
                command: WorkforcePoolCommands::Providers { command },
            } => command.execute(ctx),
            IamCommands::PolicyBindings { command } => command.execute(ctx),
        }
    }
}

impl Execute for ServiceAccountCommands {
    fn execute(self, ctx: &Context) -> Result<()> {
        const SA: &str = "service-accounts";
        match self {
            ServiceAccountCommands::Enable { service_account } => run(
                ctx,
                namespace(&[SA, "enable"]).with("service_account", service_account),
                service_account::enable,
            ),
            ServiceAccountCommands::Disable { service_account } => run(
                ctx,
                namespace(&[SA, "disable"]).with("service_account", service_account),
                service_account::disable,
            ),
            ServiceAccountCommands::Update {
                service_account,
                display_name,
                description,
            } => run(
                ctx,
                namespace(&[SA, "update"])
                    .with("service_account", service_account)
                    .with_opt("display_name", display_name)
                    .with_opt("description", description),
                service_account::update,
            ),
            ServiceAccountCommands::Describe {
                service_account,
                unique_id,
            } => run(
                ctx,
                namespace(&[SA, "describe"])
                    .with_opt("service_account", service_account)
                    .with_opt("unique_id", unique_id),
                service_account::describe,
            ),
            ServiceAccountCommands::GetIamPolicy { service_account } => run(
                ctx,
                namespace(&[SA, "get-iam-policy"]).with("service_account", service_account),
                service_account::get_iam_policy,
            ),
            ServiceAccountCommands::SetIamPolicy {
                service_account,
                policy_file,
            } => run(
                ctx,
                namespace(&[SA, "set-iam-policy"])
                    .with("service_account", service_account)
                    .with("policy_file", policy_file),
                service_account::set_iam_policy,
            ),
            ServiceAccountCommands::Keys { command } => command.execute(ctx),
        }
    }
}

impl Execute for KeyCommands {
    fn execute(self, ctx: &Context) -> Result<()> {
        const SA: &str = "service-accounts";
        match self {
            KeyCommands::Enable {
                iam_key,
                iam_account,
            } => run(
                ctx,
                namespace(&[SA, "keys", "enable"])
                    .with("iam_key", iam_key)
                    .with_opt("iam_account", iam_account),
                key::enable,
            ),
            KeyCommands::Disable {
                iam_key,
                iam_account,
            } => run(
                ctx,
                namespace(&[SA, "keys", "disable"])
                    .with("iam_key", iam_key)
                    .with_opt("iam_account", iam_account),
                key::disable,
            ),
            KeyCommands::Upload {
                public_key_file,
                iam_account,
            } => run(
                ctx,
                namespace(&[SA, "keys", "upload"])
                    .with("public_key_file", public_key_file)
                    .with("iam_account", iam_account),
                key::upload,
            ),
        }
    }
}

fn provider_namespace(
    leaf: &str,
    provider: ProviderArgs,
    oidc: OidcArgs,
    extra: ExtraAttributesArgs,
) -> ArgNamespace {
    namespace(&["workforce-pools", "providers", leaf])
        .with("provider", provider.provider)
        .with_opt("workforce_pool", provider.workforce_pool)
        .with_opt("location", provider.location)
        .with_opt("display_name", provider.display_name)
        .with_opt("description", provider.description)
        .with_opt("disabled", provider.disabled)
        .with_opt("attribute_mapping", provider.attribute_mapping)
        .with_opt("attribute_condition", provider.attribute_condition)
        .with_opt("issuer_uri", oidc.issuer_uri)
        .with_opt("client_id", oidc.client_id)
        .with_opt("client_secret_value", oidc.client_secret_value)
        .with_opt(
            "web_sso_response_type",
            oidc.web_sso_response_type.map(|t| t.api_value()),
        )
        .with_opt(
            "web_sso_assertion_claims_behavior",
            oidc.web_sso_assertion_claims_behavior.map(|b| b.api_value()),
        )
        .with_opt("web_sso_additional_scopes", oidc.web_sso_additional_scopes)
        .with_opt("extra_attributes_type", extra.extra_attributes_type)
        .with_opt("extra_attributes_client_id", extra.extra_attributes_client_id)
        .with_opt(
            "extra_attributes_client_secret_value",
            extra.extra_attributes_client_secret_value,
        )
        .with_opt("extra_attributes_issuer_uri", extra.extra_attributes_issuer_uri)
        .with_opt("extra_attributes_filter", extra.extra_attributes_filter)
}

fn with_extended_attributes(args: ArgNamespace, extended: ExtendedAttributesArgs) -> ArgNamespace {
    args.with_opt("extended_attributes_type", extended.extended_attributes_type)
        .with_opt("extended_attributes_client_id", extended.extended_attributes_client_id)
        .with_opt(
            "extended_attributes_client_secret_value",
            extended.extended_attributes_client_secret_value,
        )
        .with_opt("extended_attributes_issuer_uri", extended.extended_attributes_issuer_uri)
        .with_opt("extended_attributes_filter", extended.extended_attributes_filter)
}

impl Execute for ProviderCommands {
    fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            ProviderCommands::CreateOidc {
                provider,
                oidc,
                extra,
                extended,
            } => run(
                ctx,
                with_extended_attributes(
                    provider_namespace("create-oidc", provider, oidc, extra),
                    extended,
                ),
                workforce_provider::create_oidc,
            ),
            ProviderCommands::UpdateOidc {
                provider,
                oidc,
                extra,
                clear_extra_attributes_config,
            } => run(
                ctx,
                provider_namespace("update-oidc", provider, oidc, extra)
                    .with_flag("clear_extra_attributes_config", clear_extra_attributes_config),
                workforce_provider::update_oidc,
            ),
        }
    }
}

impl Execute for PolicyBindingCommands {
    fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            PolicyBindingCommands::Create {
                policy_binding,
                location,
                target_principal_set,
                policy,
                policy_kind,
                display_name,
                condition_from_file,
            } => {
                let condition = match condition_from_file {
                    Some(path) => {
                        let condition = parse_condition_from_file(&path)?;
                        Some(serde_json::to_value(condition).context("Failed to encode condition")?)
                    }
                    None => None,
                };
                let args = namespace(&["policy-bindings", "create"])
                    .with("policy_binding", policy_binding)
                    .with_opt("project", ctx.project())
                    .with_opt("location", location)
                    .with_opt("target_principal_set", target_principal_set)
                    .with_opt("policy", policy)
                    .with_opt("policy_kind", policy_kind)
                    .with_opt("display_name", display_name)
                    .with_opt("condition_from_file", condition);
                run(ctx, args, policy_binding::create)
            }
        }
    }
}
