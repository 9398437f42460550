//! Endpoint descriptors and the requests built from them

use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::error::ApiError;

/// How an endpoint's outcome is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
    /// `true` only for this exact status; everything else is `false`.
    Sentinel(StatusCode),
    /// Decoded body on any 2xx, typed error (or a fallback) otherwise.
    Payload,
    /// Status and body handed back as-is, whatever the status.
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Required,
    Public,
}

/// Static description of one remote endpoint.
///
/// `path` is relative to the API root and may hold `{name}` placeholders that
/// a [`Request`] fills in.
#[derive(Debug)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub auth: Auth,
    pub contract: Contract,
}

impl Endpoint {
    pub const fn sentinel(
        name: &'static str,
        method: Method,
        path: &'static str,
        success: StatusCode,
    ) -> Self {
        Self { name, method, path, auth: Auth::Required, contract: Contract::Sentinel(success) }
    }

    pub const fn payload(name: &'static str, method: Method, path: &'static str) -> Self {
        Self { name, method, path, auth: Auth::Required, contract: Contract::Payload }
    }

    pub const fn public_payload(name: &'static str, method: Method, path: &'static str) -> Self {
        Self { name, method, path, auth: Auth::Public, contract: Contract::Payload }
    }

    pub const fn raw(name: &'static str, method: Method, path: &'static str, auth: Auth) -> Self {
        Self { name, method, path, auth, contract: Contract::Raw }
    }

    pub fn requires_auth(&self) -> bool {
        self.auth == Auth::Required
    }
}

/// One call to an [`Endpoint`]: path parameters, query and body.
#[derive(Debug, Clone)]
pub struct Request {
    endpoint: &'static Endpoint,
    params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl Request {
    pub fn new(endpoint: &'static Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Fill the `{name}` placeholder of the path template.
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidRequest(format!("unserializable body: {e}")))?;
        Ok(self.body(value))
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn json_body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Path segments with every placeholder substituted, not yet encoded.
    pub fn segments(&self) -> Result<Vec<String>, ApiError> {
        self.endpoint
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| match placeholder(segment) {
                Some(name) => self
                    .params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.clone())
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| {
                        ApiError::InvalidRequest(format!(
                            "{}: missing path parameter `{name}`",
                            self.endpoint.name
                        ))
                    }),
                None => Ok(segment.to_string()),
            })
            .collect()
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
