//! API method descriptors.
//!
//! Each REST method is a static [`ApiMethod`] describing how a request
//! [`Message`] maps onto an HTTP call: which fields fill the path template,
//! which become query parameters, and what is sent as the JSON body.

use serde_json::Value;

use crate::errors::{Error, Result};
use crate::message::Message;

/// The backend a method belongs to. Endpoints are resolved by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Iam,
    ApiGateway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// What the JSON body of a call is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// No body.
    Empty,
    /// A single request field, e.g. `patchServiceAccountRequest`. An absent
    /// field sends `{}`.
    Field(&'static str),
    /// Every field not consumed by the path or query.
    Remainder,
}

#[derive(Debug, Clone, Copy)]
pub struct ApiMethod {
    pub id: &'static str,
    pub service: Service,
    pub http_method: HttpMethod,
    /// Path relative to the service root with `{+field}` placeholders.
    pub path: &'static str,
    pub query_params: &'static [&'static str],
    pub body: Body,
}

/// A method bound to a concrete request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall {
    pub method_id: &'static str,
    pub service: Service,
    pub http_method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiMethod {
    /// Bind `request` to this method. Fails if a path field is missing.
    pub fn prepare(&self, mut request: Message) -> Result<PreparedCall> {
        let path = self.expand_path(&mut request)?;

        let mut query = Vec::new();
        for param in self.query_params {
            if let Some(value) = request.take_field(param) {
                if let Some(rendered) = render_scalar(&value) {
                    query.push((param.to_string(), rendered));
                }
            }
        }

        let body = match self.body {
            Body::Empty => None,
            Body::Field(field) => Some(
                request
                    .take_field(field)
                    .unwrap_or_else(|| Value::Object(Default::default())),
            ),
            Body::Remainder => Some(request.into_value()),
        };

        Ok(PreparedCall {
            method_id: self.id,
            service: self.service,
            http_method: self.http_method,
            path,
            query,
            body,
        })
    }

    fn expand_path(&self, request: &mut Message) -> Result<String> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let end = rest[start..]
                .find('}')
                .map(|i| start + i)
                .unwrap_or(rest.len());
            let field = rest[start + 1..end].trim_start_matches('+');
            let value = request
                .take_field(field)
                .and_then(|v| render_scalar(&v))
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    Error::required_argument(
                        field,
                        format!("Request for {} is missing the [{}] field.", self.id, field),
                    )
                })?;
            out.push_str(&value);
            rest = rest.get(end + 1..).unwrap_or("");
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// IAM v1 service account methods.
pub mod iam {
    use super::*;

    pub const SERVICE_ACCOUNTS_ENABLE: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.enable",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+name}:enable",
        query_params: &[],
        body: Body::Field("enableServiceAccountRequest"),
    };

    pub const SERVICE_ACCOUNTS_DISABLE: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.disable",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+name}:disable",
        query_params: &[],
        body: Body::Field("disableServiceAccountRequest"),
    };

    pub const SERVICE_ACCOUNTS_GET: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.get",
        service: Service::Iam,
        http_method: HttpMethod::Get,
        path: "v1/{+name}",
        query_params: &[],
        body: Body::Empty,
    };

    pub const SERVICE_ACCOUNTS_PATCH: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.patch",
        service: Service::Iam,
        http_method: HttpMethod::Patch,
        path: "v1/{+name}",
        query_params: &[],
        body: Body::Field("patchServiceAccountRequest"),
    };

    pub const SERVICE_ACCOUNTS_GET_IAM_POLICY: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.getIamPolicy",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+resource}:getIamPolicy",
        query_params: &[],
        body: Body::Field("getIamPolicyRequest"),
    };

    pub const SERVICE_ACCOUNTS_SET_IAM_POLICY: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.setIamPolicy",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+resource}:setIamPolicy",
        query_params: &[],
        body: Body::Field("setIamPolicyRequest"),
    };

    pub const KEYS_ENABLE: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.keys.enable",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+name}:enable",
        query_params: &[],
        body: Body::Field("enableServiceAccountKeyRequest"),
    };

    pub const KEYS_DISABLE: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.keys.disable",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+name}:disable",
        query_params: &[],
        body: Body::Field("disableServiceAccountKeyRequest"),
    };

    pub const KEYS_UPLOAD: ApiMethod = ApiMethod {
        id: "iam.projects.serviceAccounts.keys.upload",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+name}/keys:upload",
        query_params: &[],
        body: Body::Field("uploadServiceAccountKeyRequest"),
    };

    pub const WORKFORCE_PROVIDERS_CREATE: ApiMethod = ApiMethod {
        id: "iam.locations.workforcePools.providers.create",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v1/{+parent}/providers",
        query_params: &["workforcePoolProviderId"],
        body: Body::Field("workforcePoolProvider"),
    };

    pub const WORKFORCE_PROVIDERS_PATCH: ApiMethod = ApiMethod {
        id: "iam.locations.workforcePools.providers.patch",
        service: Service::Iam,
        http_method: HttpMethod::Patch,
        path: "v1/{+name}",
        query_params: &["updateMask"],
        body: Body::Field("workforcePoolProvider"),
    };

    pub const POLICY_BINDINGS_CREATE: ApiMethod = ApiMethod {
        id: "iam.projects.locations.policyBindings.create",
        service: Service::Iam,
        http_method: HttpMethod::Post,
        path: "v3/{+parent}/policyBindings",
        query_params: &["policyBindingId", "validateOnly"],
        body: Body::Remainder,
    };
}

/// API Gateway v1 operation methods.
pub mod api_gateway {
    use super::*;

    pub const OPERATIONS_CANCEL: ApiMethod = ApiMethod {
        id: "apigateway.projects.locations.operations.cancel",
        service: Service::ApiGateway,
        http_method: HttpMethod::Post,
        path: "v1/{+name}:cancel",
        query_params: &[],
        body: Body::Field("cancelOperationRequest"),
    };

    pub const OPERATIONS_GET: ApiMethod = ApiMethod {
        id: "apigateway.projects.locations.operations.get",
        service: Service::ApiGateway,
        http_method: HttpMethod::Get,
        path: "v1/{+name}",
        query_params: &[],
        body: Body::Empty,
    };
}
