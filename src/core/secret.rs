//! Secret retrieval and field extraction.
//!
//! Fetching stays a pure transport concern returning the decoded response;
//! locating the requested field inside it is a separate, typed step driven
//! by the pipeline.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Request};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::core::http::{send_json, HttpSend};
use crate::core::retrieve::SecretRequest;
use crate::core::token::AccessToken;
use crate::error::{ApiError, Result, SecretError};

/// Raw decoded secret response: top-level keys to arbitrary values.
///
/// Only the nested `data` mapping is ever read, but the full response is
/// kept dynamic since the vault attaches varying metadata around it.
pub type SecretRecord = serde_json::Map<String, Value>;

/// Build `{endpoint}/secrets/{path}`.
///
/// Slashes inside the secret path separate segments; everything else is
/// escaped per segment. Empty segments (doubled or trailing slashes)
/// collapse.
fn build_secret_url(api_endpoint: &str, secret_path: &str) -> Result<Url> {
    let mut url = Url::parse(api_endpoint).map_err(ApiError::BuildUrl)?;

    url.path_segments_mut()
        .map_err(|()| ApiError::BuildUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .push("secrets")
        .extend(secret_path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url)
}

/// Fetch one secret, authorized by the raw token value.
///
/// The vault API expects the bare token in `Authorization`, without a
/// `Bearer ` prefix.
///
/// # Errors
///
/// Returns `ApiError` variants for URL, transport, status, and decode
/// failures.
pub async fn get_secret(
    http: &dyn HttpSend,
    api_endpoint: &str,
    token: &AccessToken,
    item: &SecretRequest,
) -> Result<SecretRecord> {
    debug!(path = %item.secret_path, "fetching secret");

    let url = build_secret_url(api_endpoint, &item.secret_path)?;

    let mut auth = HeaderValue::from_str(token.expose_secret())
        .map_err(|source| ApiError::BuildRequest(Box::new(source)))?;
    auth.set_sensitive(true);

    let mut request = Request::new(Method::GET, url);
    request.headers_mut().insert(AUTHORIZATION, auth);

    send_json(http, request).await
}

/// Look up `secret_key` inside the record's `data` mapping.
///
/// # Errors
///
/// Returns `SecretError::DataShape` when `data` is missing or not an
/// object, and `SecretError::FieldNotFound` when the key is absent or its
/// value is not a string.
pub fn extract_field(record: &SecretRecord, secret_key: &str) -> Result<String> {
    let data = record
        .get("data")
        .and_then(Value::as_object)
        .ok_or(SecretError::DataShape)?;

    let value = data
        .get(secret_key)
        .and_then(Value::as_str)
        .ok_or(SecretError::FieldNotFound)?;

    Ok(value.to_string())
}
