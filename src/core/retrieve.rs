//! Retrieval specification parsing.
//!
//! Decodes the JSON array supplied through `DSV_RETRIEVE` into typed
//! requests, one per secret field to fetch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RetrieveError};

/// One field to extract from one secret.
///
/// `output_variable` is the environment variable name the value is exported
/// under; it is upper-cased at export time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretRequest {
    /// Hierarchical path locating the secret resource.
    pub secret_path: String,
    /// Field name inside the secret's `data` mapping.
    pub secret_key: String,
    /// Desired environment variable name.
    pub output_variable: String,
}

/// Parse the retrieval specification into an ordered list of requests.
///
/// Missing fields default to the empty string, unknown fields are ignored.
/// The empty string is not valid JSON and fails like any other malformed
/// input; `"[]"` parses to an empty list.
///
/// # Errors
///
/// Returns `RetrieveError::Unmarshal` when the input is not a JSON array of
/// objects or a field has the wrong type.
pub fn parse_retrieve(retrieve: &str) -> Result<Vec<SecretRequest>> {
    let requests: Vec<SecretRequest> =
        serde_json::from_str(retrieve).map_err(RetrieveError::Unmarshal)?;

    debug!(requests = requests.len(), "parsed retrieval spec");

    Ok(requests)
}
