//! Public client surface + builder.
//! Internals are split into `auth` (token lifecycle), `constants` (UA + defaults) and
//! `retry` (transport and token-exchange retry policies).

mod auth;
mod constants;
mod retry;

pub use auth::TokenLifetimes;
pub use retry::{AuthRetryConfig, Backoff, RetryConfig};

use crate::core::JqError;
use crate::core::config::{ConfigLoader, Credentials, Settings};
use auth::TokenManager;
use constants::{DEFAULT_BASE_URL, DEFAULT_MAX_WORKERS, DEFAULT_TIMEOUT, POOL_HEADROOM, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the J-Quants API.
///
/// Cloning is cheap: clones share the connection pool and the cached tokens.
///
/// # Example
///
/// ```no_run
/// # use jquants_rs::JqClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), jquants_rs::JqError> {
/// // credentials come from jquants-api.toml files and JQUANTS_API_* variables
/// let client = JqClient::builder().build()?;
/// let quotes = jquants_rs::prices::DailyQuotesBuilder::new(&client)
///     .code("7203")
///     .fetch()
///     .await?;
/// println!("{} rows", quotes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JqClient {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
    max_workers: usize,
    tokens: Arc<TokenManager>,
}

impl JqClient {
    /// Create a new builder.
    pub fn builder() -> JqClientBuilder {
        JqClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Number of concurrent per-date fetches used by range operations.
    #[must_use]
    pub const fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// The validated credentials this client logs in with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        self.tokens.credentials()
    }
}

/* ----------------------- Builder ----------------------- */

/// A builder for [`JqClient`].
#[derive(Default)]
pub struct JqClientBuilder {
    mail_address: Option<String>,
    password: Option<String>,
    refresh_token: Option<String>,
    config: Option<ConfigLoader>,

    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    max_workers: Option<usize>,
    retry: Option<RetryConfig>,
    auth_retry: Option<AuthRetryConfig>,
    lifetimes: Option<TokenLifetimes>,
}

impl JqClientBuilder {
    /// Login mail address. Overrides config files and environment variables.
    #[must_use]
    pub fn mail_address(mut self, mail: impl Into<String>) -> Self {
        self.mail_address = Some(mail.into());
        self
    }

    /// Login password. Overrides config files and environment variables.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Refresh token. Overrides config files and environment variables.
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Where to look for credentials. Default: [`ConfigLoader::from_environment`].
    #[must_use]
    pub fn config_loader(mut self, loader: ConfigLoader) -> Self {
        self.config = Some(loader);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://api.jquants.com/v1/`). Endpoint paths are
    /// joined onto it, so it should end with `/`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the per-request timeout. Default: 30 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Concurrent per-date fetches in range operations. Default: 5.
    #[must_use]
    pub const fn max_workers(mut self, n: usize) -> Self {
        self.max_workers = Some(n);
        self
    }

    /// Transport-level retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Retry policy for a rejected id-token exchange.
    #[must_use]
    pub fn auth_retry(mut self, cfg: AuthRetryConfig) -> Self {
        self.auth_retry = Some(cfg);
        self
    }

    /// How long tokens are trusted before being refreshed.
    #[must_use]
    pub const fn token_lifetimes(mut self, lifetimes: TokenLifetimes) -> Self {
        self.lifetimes = Some(lifetimes);
        self
    }

    /// Resolves credentials and builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Config`] if the resolved credentials are incomplete or invalid,
    /// or an error if a config file cannot be read or the HTTP client cannot be built.
    pub fn build(self) -> Result<JqClient, JqError> {
        let loader = self.config.unwrap_or_else(ConfigLoader::from_environment);
        let settings = loader.load()?.merge(Settings {
            mail_address: self.mail_address,
            password: self.password,
            refresh_token: self.refresh_token,
        });
        let credentials = Credentials::new(settings)?;

        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let max_workers = self.max_workers.unwrap_or(DEFAULT_MAX_WORKERS).max(1);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .pool_max_idle_per_host(max_workers + POOL_HEADROOM);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(JqClient {
            http,
            base_url,
            retry: self.retry.unwrap_or_default(),
            max_workers,
            tokens: Arc::new(TokenManager::new(
                credentials,
                self.lifetimes.unwrap_or_default(),
                self.auth_retry.unwrap_or_default(),
            )),
        })
    }
}
