//! Shared request template
//!
//! One [`RequestSpec`] is built from the [`Config`] and cloned into every
//! resource client. Clones share the same connection pool and never change
//! after construction, so clients on different threads can use it freely.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

use super::step::Step;
use super::ResponseHandle;
use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::AccessToken;

/// Base URI, default headers and transport shared by all clients
#[derive(Debug, Clone)]
pub struct RequestSpec {
    inner: Arc<SpecInner>,
}

#[derive(Debug)]
struct SpecInner {
    client: Client,
    api_root: Url,
    log_requests: bool,
    log_responses: bool,
}

/// One request ready to be executed through a [`RequestSpec`]
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    authorization: Option<AccessToken>,
    body: Option<JsonValue>,
}

impl ApiRequest {
    /// Attach the token as the `Authorization` header
    pub fn bearer(mut self, token: &AccessToken) -> Self {
        self.authorization = Some(token.clone());
        self
    }

    /// Serialize `body` as the JSON payload
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_authorized(&self) -> bool {
        self.authorization.is_some()
    }

    pub fn body(&self) -> Option<&JsonValue> {
        self.body.as_ref()
    }
}

impl RequestSpec {
    /// Build the template from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let content_type = HeaderValue::from_str(&config.content_type).map_err(|_| {
            Error::config(format!("Invalid content type '{}'", config.content_type))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, content_type.clone());
        headers.insert(ACCEPT, content_type);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            inner: Arc::new(SpecInner {
                client,
                api_root: config.api_root()?,
                log_requests: config.log_requests,
                log_responses: config.log_responses,
            }),
        })
    }

    /// Absolute URL of an endpoint path such as `auth/login`
    pub fn url(&self, path: &str) -> Result<Url> {
        self.inner
            .api_root
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    pub fn api_root(&self) -> &Url {
        &self.inner.api_root
    }

    pub fn request(&self, method: Method, path: &str) -> Result<ApiRequest> {
        Ok(ApiRequest {
            method,
            url: self.url(path)?,
            authorization: None,
            body: None,
        })
    }

    pub fn get(&self, path: &str) -> Result<ApiRequest> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<ApiRequest> {
        self.request(Method::POST, path)
    }

    pub fn patch(&self, path: &str) -> Result<ApiRequest> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> Result<ApiRequest> {
        self.request(Method::DELETE, path)
    }

    /// Send `request` inside the trace span of `step`
    ///
    /// Any HTTP status is a successful return; only transport failures
    /// (refused connection, timeout, broken body stream) are errors.
    pub fn execute(&self, step: &Step, request: ApiRequest) -> Result<ResponseHandle> {
        step.run(|| self.send(request))
    }

    fn send(&self, request: ApiRequest) -> Result<ResponseHandle> {
        debug!(
            method = %request.method,
            url = %request.url,
            authorized = request.is_authorized(),
            "sending request"
        );
        if self.inner.log_requests {
            if let Some(body) = &request.body {
                debug!(body = %redact(body), "request body");
            }
        }

        let mut builder = self.inner.client.request(request.method, request.url);
        if let Some(token) = &request.authorization {
            builder = builder.header(AUTHORIZATION, token.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(Error::from_request)?;
        let handle = ResponseHandle::read(response)?;

        debug!(status = handle.status_code(), "received response");
        if self.inner.log_responses {
            debug!(body = handle.body_text(), "response body");
        }
        Ok(handle)
    }
}

/// Copy of a payload with password fields masked
fn redact(body: &JsonValue) -> JsonValue {
    match body {
        JsonValue::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = if key == "password" {
                        JsonValue::from("***")
                    } else {
                        redact(value)
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(redact).collect()),
        other => other.clone(),
    }
}
