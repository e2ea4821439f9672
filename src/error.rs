use std::path::PathBuf;

use reqwest::{Method, StatusCode, Url};
use thiserror::Error;

/// Boxed error for transport-level failures where the concrete type is
/// decided by the HTTP implementation behind [`crate::core::http::HttpSend`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Retrieve(#[from] RetrieveError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Failures decoding the retrieval specification.
#[derive(Error, Debug)]
pub enum RetrieveError {
    #[error("unable to unmarshal: {0}")]
    Unmarshal(#[from] serde_json::Error),
}

/// Failures in the HTTP conversation with the vault API.
///
/// Status and transport errors never carry the response body, so a failed
/// call cannot leak credential material into logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("could not build http client: {0}")]
    BuildClient(reqwest::Error),

    #[error("could not build request: {0}")]
    BuildRequest(BoxError),

    #[error("unable to build url: {0}")]
    BuildUrl(#[from] url::ParseError),

    /// Connection, TLS, or timeout failure before a status line arrived.
    #[error("API call failed: {0}")]
    Transport(BoxError),

    #[error("API call failed: {method} {url}: {status}")]
    Status {
        method: Method,
        url: Url,
        status: StatusCode,
    },

    #[error("API call failed: could not read response body: {0}")]
    ReadBody(reqwest::Error),

    #[error("API call failed: could not unmarshal response body: {0}")]
    Unmarshal(serde_json::Error),
}

/// Failures extracting a usable token from the exchange response.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("could not read access token from response")]
    Missing,
}

/// Failures interpreting a fetched secret.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("cannot parse secret")]
    DataShape,

    #[error("specified field was not found in data")]
    FieldNotFound,
}

/// Failures opening or appending to the export file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("envfile doesn't exist or has denied permission {}: {source}", path.display())]
    Access {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("general error cannot open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not update {} environment file: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
