//! dsv-gitlab - Inject Delinea DevOps Secrets Vault secrets into GitLab CI jobs.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dsv_gitlab::cli::output;
use dsv_gitlab::cli::{execute, Cli};
use dsv_gitlab::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DSV_GITLAB_LOG").unwrap_or_else(|_| {
        if cli.ci_debug_trace {
            EnvFilter::new("dsv_gitlab=debug")
        } else {
            EnvFilter::new("dsv_gitlab=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli).await {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Retrieve(_) => Some(
                r#"DSV_RETRIEVE must be a JSON array like [{"secretPath":"ci/deploy","secretKey":"api-key","outputVariable":"API_KEY"}]"#,
            ),
            Error::Export(_) => {
                Some("check that CI_PROJECT_DIR points at an existing, writable directory")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }

    output::success("run complete");
}
