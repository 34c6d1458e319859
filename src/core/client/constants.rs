//! Centralized constants for the default endpoint, UA and token lifetimes.

use std::time::Duration;

/// User agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("jquants-rs/", env!("CARGO_PKG_VERSION"));

/// J-Quants API v1 base (endpoint paths are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.jquants.com/v1/";

/// Login endpoint: mail address + password in, refresh token out.
pub(crate) const AUTH_USER_PATH: &str = "token/auth_user";

/// Exchange endpoint: refresh token in, id token out.
pub(crate) const AUTH_REFRESH_PATH: &str = "token/auth_refresh";

/// Per-request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Concurrent per-date fetches in range operations.
pub(crate) const DEFAULT_MAX_WORKERS: usize = 5;

/// Idle connections kept on top of the worker count.
pub(crate) const POOL_HEADROOM: usize = 10;

/// A refresh token is usable for one week; six days leaves a margin.
pub(crate) const REFRESH_TOKEN_TTL_HOURS: i64 = 6 * 24;

/// An id token is usable for 24 hours; 23 leaves a margin.
pub(crate) const ID_TOKEN_TTL_HOURS: i64 = 23;
