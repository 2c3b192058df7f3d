use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_config() {
    let content = r#"
project: my-project
api_gateway_location: us-central1
timeout_secs: 5
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.project.as_deref(), Some("my-project"));
    assert_eq!(config.api_gateway_location.as_deref(), Some("us-central1"));
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.iam_endpoint, "https://iam.googleapis.com/"); // default
}

#[test]
fn test_parse_empty_config() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
    assert_eq!(Config::parse("\n  \n").unwrap(), Config::default());
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse("projcet: typo\n");
    assert!(result.is_err());
}

#[test]
fn test_load_from_names_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "project: [unterminated\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.yaml"));
}

#[test]
fn test_apply_env_overrides() {
    let env: HashMap<&str, &str> = [
        (PROJECT_ENV, "env-project"),
        (ACCESS_TOKEN_ENV, "tok"),
        (IAM_ENDPOINT_ENV, "http://localhost:8080/"),
        (API_GATEWAY_ENDPOINT_ENV, ""),
    ]
    .into_iter()
    .collect();

    let mut config = Config::parse("project: file-project\n").unwrap();
    config.apply_env(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.project.as_deref(), Some("env-project"));
    assert_eq!(config.access_token.as_deref(), Some("tok"));
    assert_eq!(config.iam_endpoint, "http://localhost:8080/");
    // Blank values do not override
    assert_eq!(
        config.api_gateway_endpoint,
        "https://apigateway.googleapis.com/"
    );
}

#[test]
fn test_resolve_project_prefers_flag() {
    let config = Config::parse("project: file-project\n").unwrap();
    assert_eq!(config.resolve_project(Some("flag")), Some("flag"));
    assert_eq!(config.resolve_project(None), Some("file-project"));
    assert_eq!(Config::default().resolve_project(None), None);
}

#[test]
#[serial]
fn test_load_uses_config_env_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("alt.yaml");
    fs::write(&path, "project: from-alt\napi_gateway_location: europe-west1\n").unwrap();

    std::env::set_var(CONFIG_PATH_ENV, &path);
    std::env::remove_var(PROJECT_ENV);
    let config = Config::load();
    std::env::remove_var(CONFIG_PATH_ENV);

    let config = config.unwrap();
    assert_eq!(config.project.as_deref(), Some("from-alt"));
    assert_eq!(config.api_gateway_location.as_deref(), Some("europe-west1"));
}

#[test]
#[serial]
fn test_load_missing_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    std::env::set_var(CONFIG_PATH_ENV, tmp.path().join("nope.yaml"));
    std::env::remove_var(PROJECT_ENV);
    std::env::remove_var(ACCESS_TOKEN_ENV);
    std::env::remove_var(IAM_ENDPOINT_ENV);
    std::env::remove_var(API_GATEWAY_ENDPOINT_ENV);
    let config = Config::load();
    std::env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(config.unwrap(), Config::default());
}
