//! Command-line interface.
//!
//! Every argument doubles as an environment variable, matching the names
//! GitLab injects into job environments. Under GitLab the binary runs with
//! no arguments at all.

pub mod output;

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use secrecy::SecretString;

use crate::core::config::RunConfig;
use crate::core::{http, pipeline};
use crate::error::Result;

/// Inject Delinea DevOps Secrets Vault secrets into a GitLab CI job.
#[derive(Parser)]
#[command(
    name = "dsv-gitlab",
    about = "Inject Delinea DevOps Secrets Vault secrets into a GitLab CI job",
    version
)]
pub struct Cli {
    /// Tenant domain name (e.g. example.secretsvaultcloud.com)
    #[arg(long, env = "DSV_DOMAIN", value_parser = NonEmptyStringValueParser::new())]
    pub domain: String,

    /// Client ID for authentication
    #[arg(long, env = "DSV_CLIENT_ID", value_parser = NonEmptyStringValueParser::new())]
    pub client_id: String,

    /// Client secret for authentication
    #[arg(
        long,
        env = "DSV_CLIENT_SECRET",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub client_secret: String,

    /// JSON array of secrets to retrieve
    #[arg(long, env = "DSV_RETRIEVE", value_parser = NonEmptyStringValueParser::new())]
    pub retrieve: String,

    /// Whether this run is inside a GitLab CI job
    #[arg(long, env = "GITLAB_CI", action = ArgAction::Set, default_value_t = false)]
    pub gitlab_ci: bool,

    /// Whether GitLab debug tracing is enabled for the job
    #[arg(long, env = "CI_DEBUG_TRACE", action = ArgAction::Set, default_value_t = false)]
    pub ci_debug_trace: bool,

    /// Fully qualified path to the project directory
    #[arg(long, env = "CI_PROJECT_DIR", value_parser = NonEmptyStringValueParser::new())]
    pub project_dir: String,

    /// Name of the running job
    #[arg(long, env = "CI_JOB_NAME", value_parser = NonEmptyStringValueParser::new())]
    pub job_name: String,
}

impl Cli {
    /// Convert parsed arguments into the pipeline's run configuration.
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            domain: self.domain,
            client_id: self.client_id,
            client_secret: SecretString::from(self.client_secret),
            retrieve: self.retrieve,
            is_ci: self.gitlab_ci,
            is_debug: self.ci_debug_trace,
            project_dir: PathBuf::from(self.project_dir),
            job_name: self.job_name,
        }
    }
}

/// Execute one retrieval run with the parsed arguments.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.into_config();
    let http = http::build_client()?;

    pipeline::run(&http, &config).await
}
