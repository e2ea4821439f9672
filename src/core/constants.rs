//! Constants used throughout dsv-gitlab.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Timeout applied to every HTTP call, token exchange and secret fetch alike.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Octal permission for read/write by the file owner only.
pub const PERMISSION_READ_WRITE_OWNER: u32 = 0o600;

/// Header identifying this client to the DSV API.
pub const DSV_CLIENT_HEADER: &str = "Delinea-DSV-Client";

/// Value sent in the [`DSV_CLIENT_HEADER`] header.
pub const DSV_CLIENT_VALUE: &str = "gitlab-action";

/// OAuth2 grant type used for the token exchange.
pub const GRANT_TYPE: &str = "client_credentials";
