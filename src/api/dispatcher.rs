//! Request execution and outcome normalization

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::request::{Contract, Request};
use crate::auth::CredentialProvider;
use crate::config::ClientConfig;
use crate::error::{ApiError, Unauthenticated};
use crate::{log_api_request, log_api_result};

/// Status and body of a raw-contract call, untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    /// Parsed JSON when the body is JSON, a string otherwise, `null` if empty.
    pub body: serde_json::Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone()).map_err(ApiError::InvalidPayload)
    }
}

/// Builds and sends requests, one network call per invocation.
#[derive(Clone)]
pub struct RequestDispatcher {
    http: Client,
    api_root: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("api_root", &self.api_root.as_str())
            .finish_non_exhaustive()
    }
}

impl RequestDispatcher {
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ApiError> {
        // One network call per invocation: a 3xx is an outcome, not a hop.
        let mut builder = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(
                config
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| concat!("spotify-client/", env!("CARGO_PKG_VERSION")).to_string()),
            );
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Transport)?;

        let api_root = config.api_root()?;
        tracing::info!(api_root = %api_root, "API dispatcher ready");
        Ok(Self::with_client(http, api_root, credentials))
    }

    pub fn with_client(http: Client, api_root: Url, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { http, api_root, credentials }
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn url_for(&self, request: &Request) -> Result<Url, ApiError> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("{} cannot be a base URL", self.api_root)))?
            .pop_if_empty()
            .extend(request.segments()?);
        if !request.query_pairs().is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query_pairs().iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Resolve credentials and assemble the HTTP request. No I/O happens here,
    /// so a missing session fails before anything reaches the network.
    fn build(&self, request: &Request) -> Result<RequestBuilder, ApiError> {
        let endpoint = request.endpoint();
        let url = self.url_for(request)?;

        let mut builder = self.http.request(endpoint.method.clone(), url);
        if endpoint.requires_auth() {
            let session = self.credentials.current()?;
            builder = builder.header(AUTHORIZATION, session.bearer());
        }
        if let Some(body) = request.json_body() {
            builder = builder.json(body);
        }
        Ok(builder)
    }

    async fn send(&self, request: &Request) -> Result<Response, ApiError> {
        let endpoint = request.endpoint();
        let builder = self.build(request)?;
        log_api_request!(endpoint.name, method = %endpoint.method, path = endpoint.path);
        builder.send().await.map_err(ApiError::Transport)
    }

    /// Payload contract: decode the body of a 2xx response into `T`.
    ///
    /// An empty body decodes as JSON `null`, so `Option<T>` targets come back
    /// as `None` for 204 responses.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        debug_assert_contract(&request, |c| matches!(c, Contract::Payload));
        let operation = request.endpoint().name;

        let result: Result<T, ApiError> = async {
            let response = self.send(&request).await?;
            let status = response.status();
            let body = response.bytes().await.map_err(ApiError::Transport)?;
            if !status.is_success() {
                return Err(ApiError::from_status(status, &body));
            }
            decode(&body)
        }
        .await;

        log_api_result!(operation, result);
        result
    }

    /// Payload contract with a documented fallback for every failure except
    /// a missing session.
    pub async fn execute_or<T: DeserializeOwned>(
        &self,
        request: Request,
        fallback: T,
    ) -> Result<T, Unauthenticated> {
        match self.execute(request).await {
            Ok(value) => Ok(value),
            Err(ApiError::Unauthenticated(e)) => Err(e),
            Err(_) => Ok(fallback),
        }
    }

    /// Boolean-sentinel contract: `true` only for the endpoint's success
    /// status. Any other status or a transport failure is `false`; only an
    /// authentication failure is reported as an error.
    pub async fn execute_sentinel(&self, request: Request) -> Result<bool, Unauthenticated> {
        let endpoint = request.endpoint();
        let expected = match endpoint.contract {
            Contract::Sentinel(status) => Some(status),
            _ => {
                debug_assert!(false, "{} is not a sentinel endpoint", endpoint.name);
                None
            }
        };

        let status = match self.send(&request).await {
            Ok(response) => response.status(),
            Err(ApiError::Unauthenticated(e)) => {
                tracing::warn!(operation = endpoint.name, "No session for sentinel call");
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(operation = endpoint.name, error = %e, "Sentinel call failed");
                return Ok(false);
            }
        };

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(operation = endpoint.name, "Session rejected by server");
            return Err(Unauthenticated);
        }

        let ok = match expected {
            Some(expected) => status == expected,
            None => status.is_success(),
        };
        if ok {
            tracing::debug!(operation = endpoint.name, %status, "API request successful");
        } else {
            tracing::warn!(operation = endpoint.name, %status, "Unexpected status for sentinel call");
        }
        Ok(ok)
    }

    /// Raw contract: hand back whatever the server answered.
    pub async fn execute_raw(&self, request: Request) -> Result<RawResponse, ApiError> {
        debug_assert_contract(&request, |c| matches!(c, Contract::Raw));
        let operation = request.endpoint().name;

        let result: Result<RawResponse, ApiError> = async {
            let response = self.send(&request).await?;
            let status = response.status();
            let body = response.bytes().await.map_err(ApiError::Transport)?;
            Ok(RawResponse { status, body: raw_body(&body) })
        }
        .await;

        log_api_result!(operation, result);
        result
    }
}

fn debug_assert_contract(request: &Request, expected: impl Fn(&Contract) -> bool) {
    let endpoint = request.endpoint();
    debug_assert!(
        expected(&endpoint.contract),
        "{} declares {:?}",
        endpoint.name,
        endpoint.contract
    );
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let body = if body.iter().all(u8::is_ascii_whitespace) { b"null".as_slice() } else { body };
    serde_json::from_slice(body).map_err(ApiError::InvalidPayload)
}

fn raw_body(body: &[u8]) -> serde_json::Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(body).into_owned()))
}
