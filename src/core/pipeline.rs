//! Run orchestration.
//!
//! Strictly linear: parse the retrieval spec, exchange credentials for a
//! token, then fetch, extract, and export each request in order. The first
//! failure aborts the run; lines exported for earlier requests stay on
//! disk.

use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::core::config::RunConfig;
use crate::core::export::EnvFile;
use crate::core::http::HttpSend;
use crate::core::retrieve::parse_retrieve;
use crate::core::secret::{extract_field, get_secret};
use crate::core::token::get_token;
use crate::error::Result;

/// Execute one retrieval run against the given transport.
///
/// Outside CI the export file is never opened and nothing is written, but
/// every secret is still fetched and its field extracted so configuration
/// errors surface from any environment.
///
/// # Errors
///
/// Propagates the first failure from any stage; no retries, no recovery.
pub async fn run(http: &dyn HttpSend, config: &RunConfig) -> Result<()> {
    if config.is_debug {
        debug!(
            is_ci = config.is_ci,
            domain = %config.domain,
            retrieve = %config.retrieve,
            "configuration"
        );
        debug!("client credentials: ** values exist, but not exposing in logs **");
    }

    let requests = parse_retrieve(&config.retrieve)?;

    let api_endpoint = config.api_endpoint();
    let token = get_token(http, &api_endpoint, &config.client_id, &config.client_secret).await?;

    // Opened before the loop so the handle lives for the whole run and is
    // released on every exit path.
    let mut env_file = if config.is_ci {
        Some(EnvFile::open(config.env_file_name())?)
    } else {
        debug!("not running inside GitLab CI, skipping export");
        None
    };

    for item in &requests {
        debug!(
            path = %item.secret_path,
            key = %item.secret_key,
            "processing retrieval request"
        );

        let secret = match get_secret(http, &api_endpoint, &token, item).await {
            Ok(secret) => secret,
            Err(err) => {
                error!(path = %item.secret_path, error = %err, "failed to fetch secret");
                return Err(err);
            }
        };

        let value = match extract_field(&secret, &item.secret_key) {
            Ok(value) => Zeroizing::new(value),
            Err(err) => {
                error!(
                    path = %item.secret_path,
                    key = %item.secret_key,
                    error = %err,
                    "could not extract field from secret data"
                );
                return Err(err);
            }
        };

        info!(
            path = %item.secret_path,
            key = %item.secret_key,
            "retrieved successfully"
        );

        let Some(env_file) = env_file.as_mut() else {
            continue;
        };

        env_file.export_variable(&item.output_variable, &value)?;

        info!(
            variable = %item.output_variable.to_uppercase(),
            key = %item.secret_key,
            "exported variable"
        );
    }

    Ok(())
}
