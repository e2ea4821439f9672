//! Run configuration.
//!
//! Everything the pipeline needs, assembled from the environment before the
//! core runs. Values arrive already validated as non-empty; the core never
//! re-checks them.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

/// Configuration for one pipeline run.
#[derive(Debug)]
pub struct RunConfig {
    /// Tenant domain, e.g. `example.secretsvaultcloud.com`.
    pub domain: String,
    /// Client ID for the credentials exchange.
    pub client_id: String,
    /// Client secret for the credentials exchange. Redacted in `Debug`.
    pub client_secret: SecretString,
    /// JSON retrieval specification, as supplied.
    pub retrieve: String,
    /// Whether this run is inside a GitLab CI job.
    pub is_ci: bool,
    /// Whether GitLab debug tracing is enabled for the job.
    pub is_debug: bool,
    /// Fully qualified project directory (`CI_PROJECT_DIR`).
    pub project_dir: PathBuf,
    /// Job name (`CI_JOB_NAME`), the export file's name within the project
    /// directory.
    pub job_name: String,
}

impl RunConfig {
    /// Base URL of the vault API for this tenant.
    pub fn api_endpoint(&self) -> String {
        format!("https://{}/v1", self.domain)
    }

    /// Path of the export file secrets are appended to.
    ///
    /// See [GitLab - Passing an environment variable to another job](https://docs.gitlab.com/ee/ci/variables/#pass-an-environment-variable-to-another-job).
    pub fn env_file_name(&self) -> PathBuf {
        self.project_dir.join(&self.job_name)
    }

    /// Project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}
