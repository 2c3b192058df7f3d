//! Default values for configuration fields.

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(
    default_iam_endpoint,
    String,
    "https://iam.googleapis.com/".to_string()
);
default_fn!(
    default_api_gateway_endpoint,
    String,
    "https://apigateway.googleapis.com/".to_string()
);
default_fn!(default_timeout_secs, u64, 60);

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "GSURFACE_CONFIG";
pub const PROJECT_ENV: &str = "GSURFACE_PROJECT";
pub const ACCESS_TOKEN_ENV: &str = "GSURFACE_ACCESS_TOKEN";
pub const IAM_ENDPOINT_ENV: &str = "GSURFACE_IAM_ENDPOINT";
pub const API_GATEWAY_ENDPOINT_ENV: &str = "GSURFACE_API_GATEWAY_ENDPOINT";
