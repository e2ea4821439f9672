//! Client-credentials token exchange.
//!
//! One POST to `{endpoint}/token` per run; the returned token authorizes
//! every secret fetch that follows. No caching, no refresh.

use reqwest::{Method, Request};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::http::{send_json, HttpSend};
use crate::error::{ApiError, Result, TokenError};

/// Short-lived bearer credential obtained from the token exchange.
///
/// Held only in memory and redacted from any `Debug` output.
pub type AccessToken = SecretString;

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Decoded token-exchange response.
///
/// Only `accessToken` matters; the rest of the response is ignored. The
/// field stays a raw JSON value so that an absent field and a non-string
/// field fail the same way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<serde_json::Value>,
}

impl TokenResponse {
    fn into_token(self) -> Result<AccessToken> {
        match self.access_token {
            Some(serde_json::Value::String(token)) => Ok(AccessToken::from(token)),
            _ => Err(TokenError::Missing.into()),
        }
    }
}

/// Exchange client credentials for an access token.
///
/// # Errors
///
/// Returns `ApiError` variants for transport, status, and decode failures,
/// and `TokenError::Missing` when the response carries no usable
/// `accessToken` string.
pub async fn get_token(
    http: &dyn HttpSend,
    api_endpoint: &str,
    client_id: &str,
    client_secret: &SecretString,
) -> Result<AccessToken> {
    debug!("requesting access token");

    let body = serde_json::to_vec(&TokenRequest {
        grant_type: constants::GRANT_TYPE,
        client_id,
        client_secret: client_secret.expose_secret(),
    })
    .map_err(|source| ApiError::BuildRequest(Box::new(source)))?;

    let url = format!("{api_endpoint}/token")
        .parse()
        .map_err(|source: url::ParseError| ApiError::BuildRequest(Box::new(source)))?;

    let mut request = Request::new(Method::POST, url);
    *request.body_mut() = Some(body.into());

    let response: TokenResponse = send_json(http, request).await?;

    response.into_token()
}
