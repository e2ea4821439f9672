//! HTTP transport seam.
//!
//! The vault conversation goes through the [`HttpSend`] capability so the
//! pipeline never depends on a live network; tests substitute deterministic
//! transports.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::core::constants;
use crate::error::{ApiError, BoxError, Result};

/// Send one request, get one response or a transport error.
#[async_trait]
pub trait HttpSend: Send + Sync {
    async fn send(&self, request: Request) -> std::result::Result<Response, BoxError>;
}

#[async_trait]
impl HttpSend for Client {
    async fn send(&self, request: Request) -> std::result::Result<Response, BoxError> {
        Ok(self.execute(request).await?)
    }
}

/// Build the client used for every vault call.
///
/// A single fixed timeout covers the token exchange and each secret fetch;
/// exceeding it surfaces as a transport failure.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(constants::DEFAULT_TIMEOUT)
        .build()
        .map_err(ApiError::BuildClient)?;

    Ok(client)
}

/// Send `request` and decode the JSON body into `T`.
///
/// Adds the `Content-Type` and `Delinea-DSV-Client` headers every vault call
/// carries. A non-200 status fails without the body ever being read into an
/// error, so failure paths cannot leak credential material.
///
/// # Errors
///
/// Returns `ApiError::Transport` for connection-level failures,
/// `ApiError::Status` for non-200 responses, and `ApiError::Unmarshal` when
/// the body is not valid JSON.
pub(crate) async fn send_json<T>(http: &dyn HttpSend, mut request: Request) -> Result<T>
where
    T: DeserializeOwned,
{
    let headers = request.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        constants::DSV_CLIENT_HEADER,
        HeaderValue::from_static(constants::DSV_CLIENT_VALUE),
    );

    let method = request.method().clone();
    let url = request.url().clone();

    let response = http.send(request).await.map_err(|source| {
        error!(%method, %url, "request failed before a response arrived");
        ApiError::Transport(source)
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ApiError::Status {
            method,
            url,
            status,
        }
        .into());
    }

    let body = response.text().await.map_err(ApiError::ReadBody)?;
    let decoded = serde_json::from_str(&body).map_err(ApiError::Unmarshal)?;

    debug!(%method, %url, "request succeeded");

    Ok(decoded)
}
