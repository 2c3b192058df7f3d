//! Integration tests for service account and key commands

mod support;

use gsurface::api::HttpMethod;
use gsurface::args::ArgNamespace;
use gsurface::operations::{key, service_account};
use gsurface::Error;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use support::fakes::RecordingTransport;

const SA: &str = "robot@my-project.iam.gserviceaccount.com";

fn sa_args(leaf: &str) -> ArgNamespace {
    ArgNamespace::new(["gsurface", "iam", "service-accounts", leaf]).with("service_account", SA)
}

fn printed(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[test]
fn test_enable_prints_confirmation() {
    let transport = RecordingTransport::new();
    let mut out = Vec::new();

    service_account::enable(&transport, &sa_args("enable"), &mut out).unwrap();

    let call = transport.single_call();
    assert_eq!(call.http_method, HttpMethod::Post);
    assert_eq!(call.path, format!("v1/projects/-/serviceAccounts/{}:enable", SA));
    assert_eq!(call.body, Some(json!({})));
    assert_eq!(printed(out), format!("Enabled service account [{}].\n", SA));
}

#[test]
fn test_disable_prints_confirmation() {
    let transport = RecordingTransport::new();
    let mut out = Vec::new();

    service_account::disable(&transport, &sa_args("disable"), &mut out).unwrap();

    assert!(transport.single_call().path.ends_with(":disable"));
    assert_eq!(printed(out), format!("Disabled service account [{}].\n", SA));
}

#[test]
fn test_confirmation_needs_matching_command_path() {
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "alpha", "service-accounts", "enable"])
        .with("service_account", SA);
    let mut out = Vec::new();

    service_account::enable(&transport, &args, &mut out).unwrap();

    assert_eq!(transport.calls().len(), 1);
    assert!(out.is_empty());
}

#[test]
fn test_update_masks_fields_in_flag_order() {
    let transport = RecordingTransport::responding(json!({"email": SA, "displayName": "Robot"}));
    let args = sa_args("update")
        .with("display_name", "Robot")
        .with("description", "Builds things");
    let mut out = Vec::new();

    service_account::update(&transport, &args, &mut out).unwrap();

    let call = transport.single_call();
    assert_eq!(call.http_method, HttpMethod::Patch);
    assert_eq!(
        call.body,
        Some(json!({
            "serviceAccount": {"displayName": "Robot", "description": "Builds things"},
            "updateMask": "displayName,description"
        }))
    );
    assert!(printed(out).contains("displayName: Robot"));
}

#[test]
fn test_update_without_fields_fails_before_send() {
    let transport = RecordingTransport::new();

    let err = service_account::update(&transport, &sa_args("update"), &mut Vec::new()).unwrap_err();

    match &err {
        Error::OneOfArgumentsRequired { arguments, .. } => {
            assert_eq!(arguments, &["--display-name", "--description"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Specify at least one field to update."));
    assert!(transport.calls().is_empty());
}

#[test]
fn test_describe_by_unique_id() {
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "describe"])
        .with("unique_id", "109876543210");

    service_account::describe(&transport, &args, &mut Vec::new()).unwrap();

    assert_eq!(
        transport.single_call().path,
        "v1/projects/-/serviceAccounts/109876543210"
    );
}

#[test]
fn test_describe_rejects_non_numeric_unique_id() {
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "describe"])
        .with("unique_id", "12ab");

    let err = service_account::describe(&transport, &args, &mut Vec::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid value for [account_id]: Account unique ID should be a number. \
         Please double check your input and try again."
    );
    assert!(transport.calls().is_empty());
}

#[test]
fn test_get_iam_policy_requests_max_version() {
    let transport = RecordingTransport::responding(json!({"etag": "BwX", "version": 3}));

    service_account::get_iam_policy(&transport, &sa_args("get-iam-policy"), &mut Vec::new())
        .unwrap();

    let call = transport.single_call();
    assert_eq!(
        call.path,
        format!("v1/projects/-/serviceAccounts/{}:getIamPolicy", SA)
    );
    assert_eq!(
        call.body,
        Some(json!({"options": {"requestedPolicyVersion": 3}}))
    );
}

#[test]
fn test_set_iam_policy_adds_version_to_mask() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("policy.yaml");
    fs::write(
        &path,
        "bindings:\n- role: roles/iam.serviceAccountUser\n  members:\n  - user:a@example.com\netag: BwX\n",
    )
    .unwrap();
    let transport = RecordingTransport::new();
    let args = sa_args("set-iam-policy").with("policy_file", path.to_str().unwrap());

    service_account::set_iam_policy(&transport, &args, &mut Vec::new()).unwrap();

    let body = transport.single_call().body.unwrap();
    assert_eq!(body["updateMask"], json!("bindings,etag,version"));
    assert_eq!(body["policy"]["etag"], json!("BwX"));
}

#[test]
fn test_key_enable_and_disable_confirmations() {
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "keys", "enable"])
        .with("iam_key", "abc123")
        .with("iam_account", SA);
    let mut out = Vec::new();

    key::enable(&transport, &args, &mut out).unwrap();
    key::disable(&transport, &args, &mut out).unwrap();

    let calls = transport.calls();
    assert_eq!(
        calls[0].path,
        format!("v1/projects/-/serviceAccounts/{}/keys/abc123:enable", SA)
    );
    assert!(calls[1].path.ends_with("/keys/abc123:disable"));
    assert_eq!(
        printed(out),
        format!(
            "Enabled key [abc123] for service account [{SA}].\n\
             Disabled key [abc123] for service account [{SA}].\n"
        )
    );
}

#[test]
fn test_key_confirmation_with_full_key_name() {
    let transport = RecordingTransport::new();
    let name = format!("projects/my-project/serviceAccounts/{}/keys/abc123", SA);
    let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "keys", "enable"])
        .with("iam_key", name.as_str());
    let mut out = Vec::new();

    key::enable(&transport, &args, &mut out).unwrap();

    assert_eq!(transport.single_call().path, format!("v1/{}:enable", name));
    assert_eq!(
        printed(out),
        format!("Enabled key [{name}] for service account [{SA}].\n")
    );
}

#[test]
fn test_key_upload_encodes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("key.pem");
    fs::write(&path, "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n").unwrap();
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "keys", "upload"])
        .with("public_key_file", path.to_str().unwrap())
        .with("iam_account", SA);

    key::upload(&transport, &args, &mut Vec::new()).unwrap();

    let call = transport.single_call();
    assert_eq!(
        call.path,
        format!("v1/projects/-/serviceAccounts/{}/keys:upload", SA)
    );
    assert_eq!(
        call.body,
        Some(json!({
            "publicKeyData": "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0tCk1JSUIKLS0tLS1FTkQgQ0VSVElGSUNBVEUtLS0tLQ=="
        }))
    );
}

#[test]
fn test_key_upload_missing_file_fails_before_send() {
    let transport = RecordingTransport::new();
    let args = ArgNamespace::new(["gsurface", "iam", "service-accounts", "keys", "upload"])
        .with("public_key_file", "/nonexistent/key.pem")
        .with("iam_account", SA);

    let err = key::upload(&transport, &args, &mut Vec::new()).unwrap_err();

    assert!(err.is_argument_error());
    assert!(err.to_string().contains("Please double check your input and try again."));
    assert!(transport.calls().is_empty());
}
