//! Deterministic vault transports for pipeline-level tests.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Request, Response};

use dsv_gitlab::core::http::HttpSend;
use dsv_gitlab::error::BoxError;

/// Routes token and secret requests to canned responses.
///
/// Requests for `/v1/token` answer with the configured token response;
/// requests under `/v1/secrets/` answer per registered secret path. Any
/// unregistered path gets a 404.
pub struct VaultStub {
    token_status: u16,
    token_body: String,
    secrets: HashMap<String, (u16, String)>,
}

impl VaultStub {
    /// A stub that hands out `stub-token` and knows no secrets yet.
    pub fn new() -> Self {
        Self {
            token_status: 200,
            token_body: r#"{"accessToken":"stub-token"}"#.to_string(),
            secrets: HashMap::new(),
        }
    }

    /// Replace the token-exchange response.
    pub fn with_token_response(mut self, status: u16, body: &str) -> Self {
        self.token_status = status;
        self.token_body = body.to_string();
        self
    }

    /// Register a response for `/v1/secrets/{path}`.
    pub fn with_secret(mut self, path: &str, status: u16, body: &str) -> Self {
        self.secrets
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    fn respond(status: u16, body: String) -> Response {
        let response = http::Response::builder()
            .status(status)
            .body(body)
            .expect("failed to build stub response");
        Response::from(response)
    }
}

impl Default for VaultStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpSend for VaultStub {
    async fn send(&self, request: Request) -> Result<Response, BoxError> {
        let path = request.url().path().to_string();

        if path == "/v1/token" {
            return Ok(Self::respond(self.token_status, self.token_body.clone()));
        }

        if let Some(secret_path) = path.strip_prefix("/v1/secrets/") {
            if let Some((status, body)) = self.secrets.get(secret_path) {
                return Ok(Self::respond(*status, body.clone()));
            }
        }

        Ok(Self::respond(404, r#"{"message":"not found"}"#.to_string()))
    }
}

/// Fails every request at the transport level with the given message.
pub struct FailTransport(pub &'static str);

#[async_trait]
impl HttpSend for FailTransport {
    async fn send(&self, _request: Request) -> Result<Response, BoxError> {
        Err(self.0.into())
    }
}
