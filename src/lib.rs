//! dsv-gitlab - Inject Delinea DevOps Secrets Vault secrets into GitLab CI jobs.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Run configuration consumed by the pipeline
//!     ├── constants     # Timeouts, headers, permissions
//!     ├── http          # HttpSend transport seam + shared JSON call helper
//!     ├── retrieve      # Retrieval specification parsing
//!     ├── token         # Client-credentials token exchange
//!     ├── secret        # Secret fetch and field extraction
//!     ├── export        # GitLab dotenv export file
//!     └── pipeline      # Linear run orchestration
//! ```
//!
//! # Behavior
//!
//! - One token exchange per run, one sequential pass over the requests
//! - First failure aborts the run; earlier exported lines stay on disk
//! - Export only happens inside CI; elsewhere secrets are still fetched so
//!   configuration errors surface early
//! - Secret values never appear in logs or error messages

pub mod cli;
pub mod core;
pub mod error;
