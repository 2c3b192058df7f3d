//! Integration tests for policy binding creation and condition files

mod support;

use gsurface::args::ArgNamespace;
use gsurface::hooks::parse_condition_from_file;
use gsurface::operations::policy_binding;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use support::fakes::RecordingTransport;

fn create_args() -> ArgNamespace {
    ArgNamespace::new(["gsurface", "iam", "policy-bindings", "create"])
        .with("policy_binding", "pab-binding")
        .with("project", "my-project")
        .with("location", "global")
        .with("target_principal_set", "//cloudresourcemanager.googleapis.com/projects/my-project")
        .with(
            "policy",
            "organizations/123/locations/global/principalAccessBoundaryPolicies/pab",
        )
}

fn condition_arg(dir: &TempDir, contents: &str) -> serde_json::Value {
    let path = dir.path().join("condition.yaml");
    fs::write(&path, contents).unwrap();
    let condition = parse_condition_from_file(path.to_str().unwrap()).unwrap();
    serde_json::to_value(condition).unwrap()
}

#[test]
fn test_create_sends_binding() {
    let transport = RecordingTransport::responding(json!({"name": "operations/op-1"}));
    let mut out = Vec::new();

    policy_binding::create(&transport, &create_args(), &mut out).unwrap();

    let call = transport.single_call();
    assert_eq!(call.path, "v3/projects/my-project/locations/global/policyBindings");
    assert_eq!(
        call.query,
        vec![("policyBindingId".to_string(), "pab-binding".to_string())]
    );
    assert_eq!(
        call.body,
        Some(json!({
            "target": {"principalSet": "//cloudresourcemanager.googleapis.com/projects/my-project"},
            "policy": "organizations/123/locations/global/principalAccessBoundaryPolicies/pab",
            "policyKind": "PRINCIPAL_ACCESS_BOUNDARY"
        }))
    );
    assert_eq!(String::from_utf8(out).unwrap(), "name: operations/op-1\n");
}

#[test]
fn test_condition_with_description() {
    let dir = TempDir::new().unwrap();
    let condition = condition_arg(
        &dir,
        "expression: request.time < timestamp('2030-01-01T00:00:00Z')\n\
         title: expires\n\
         description: Temporary access\n",
    );
    let transport = RecordingTransport::new();
    let args = create_args().with("condition_from_file", condition);

    policy_binding::create(&transport, &args, &mut Vec::new()).unwrap();

    let body = transport.single_call().body.unwrap();
    assert_eq!(
        body["condition"],
        json!({
            "expression": "request.time < timestamp('2030-01-01T00:00:00Z')",
            "title": "expires",
            "description": "Temporary access"
        })
    );
}

#[test]
fn test_condition_without_description() {
    let dir = TempDir::new().unwrap();
    let condition = condition_arg(
        &dir,
        r#"{"expression": "resource.name.startsWith('projects/p')", "title": "scoped"}"#,
    );
    let transport = RecordingTransport::new();
    let args = create_args().with("condition_from_file", condition);

    policy_binding::create(&transport, &args, &mut Vec::new()).unwrap();

    let body = transport.single_call().body.unwrap();
    assert_eq!(
        body["condition"],
        json!({"expression": "resource.name.startsWith('projects/p')", "title": "scoped"})
    );
}

#[test]
fn test_condition_without_expression_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("condition.yaml");
    fs::write(&path, "title: missing expression\n").unwrap();
    let path = path.to_str().unwrap();

    let err = parse_condition_from_file(path).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "Invalid value for [condition-from-file]: {path} must be a path to a YAML or JSON \
             file containing the condition. `expression` and `title` are required keys. \
             `description` is optional."
        )
    );
}

#[test]
fn test_missing_project_fails_before_send() {
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "iam", "policy-bindings", "create"])
        .with("policy_binding", "pab-binding")
        .with("location", "global");

    let err = policy_binding::create(&transport, &args, &mut Vec::new()).unwrap_err();

    assert!(err.to_string().contains("--project"));
    assert!(transport.calls().is_empty());
}
