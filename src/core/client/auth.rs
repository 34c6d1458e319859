//! Refresh-token / id-token lifecycle.
//!
//! A refresh token comes from logging in (or is supplied up front) and lives six days.
//! It is exchanged for an id token that lives 23 hours and is attached to every
//! authenticated request. Both are cached per client and shared by its clones.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};

use super::constants::{AUTH_REFRESH_PATH, AUTH_USER_PATH, ID_TOKEN_TTL_HOURS, REFRESH_TOKEN_TTL_HOURS};
use super::retry::AuthRetryConfig;
use crate::core::config::{Credentials, validate_mail};
use crate::core::services::TokenEndpoint;
use crate::core::{JqError, net};

/// How long freshly obtained tokens are trusted.
#[derive(Debug, Clone, Copy)]
pub struct TokenLifetimes {
    /// Lifetime of a refresh token, from login (or from client construction when supplied).
    pub refresh: Duration,
    /// Lifetime of an id token, from exchange.
    pub id: Duration,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            refresh: Duration::hours(REFRESH_TOKEN_TTL_HOURS),
            id: Duration::hours(ID_TOKEN_TTL_HOURS),
        }
    }
}

#[derive(Clone)]
struct Token {
    value: String,
    expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

impl Token {
    fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
struct TokenState {
    refresh: Option<Token>,
    id: Option<Token>,
}

/// Owns both cached tokens. Nothing else writes them.
#[derive(Debug)]
pub(crate) struct TokenManager {
    credentials: Credentials,
    state: RwLock<TokenState>,
    // Serializes refreshes so that concurrent callers share one login/exchange.
    refresh_lock: Mutex<()>,
    lifetimes: TokenLifetimes,
    retry: AuthRetryConfig,
}

impl TokenManager {
    pub(crate) fn new(
        credentials: Credentials,
        lifetimes: TokenLifetimes,
        retry: AuthRetryConfig,
    ) -> Self {
        let refresh = credentials.refresh_token().map(|value| Token {
            value: value.to_string(),
            expires_at: Utc::now() + lifetimes.refresh,
        });
        Self {
            credentials,
            state: RwLock::new(TokenState { refresh, id: None }),
            refresh_lock: Mutex::new(()),
            lifetimes,
            retry,
        }
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn cached_id(&self) -> Option<String> {
        let state = self.state.read().await;
        state
            .id
            .as_ref()
            .filter(|t| t.is_valid(Utc::now()))
            .map(|t| t.value.clone())
    }

    async fn cached_refresh(&self) -> Option<String> {
        let state = self.state.read().await;
        state
            .refresh
            .as_ref()
            .filter(|t| t.is_valid(Utc::now()))
            .map(|t| t.value.clone())
    }

    async fn clear(&self) {
        let mut state = self.state.write().await;
        state.refresh = None;
        state.id = None;
    }

    /// Returns a valid refresh token, logging in when the cached one has expired.
    ///
    /// `login_override` replaces the configured mail address and password for this call.
    pub(crate) async fn refresh_token(
        &self,
        endpoint: &(impl TokenEndpoint + ?Sized),
        login_override: Option<(&str, &str)>,
    ) -> Result<String, JqError> {
        if let Some(t) = self.cached_refresh().await {
            return Ok(t);
        }
        let _guard = self.refresh_lock.lock().await;
        self.refresh_token_locked(endpoint, login_override).await
    }

    // Caller holds `refresh_lock`.
    async fn refresh_token_locked(
        &self,
        endpoint: &(impl TokenEndpoint + ?Sized),
        login_override: Option<(&str, &str)>,
    ) -> Result<String, JqError> {
        if let Some(t) = self.cached_refresh().await {
            return Ok(t);
        }

        let (mail, password) = login_override
            .or_else(|| self.credentials.login_pair())
            .filter(|(m, p)| !m.is_empty() && !p.is_empty())
            .ok_or_else(|| JqError::Config("mail_address/password are required".into()))?;
        validate_mail(mail)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("logging in for a new refresh token");

        let value = endpoint.login(mail, password).await?;
        let mut state = self.state.write().await;
        state.refresh = Some(Token {
            value: value.clone(),
            expires_at: Utc::now() + self.lifetimes.refresh,
        });
        Ok(value)
    }

    /// Returns a valid id token, exchanging a refresh token when the cached one has expired.
    ///
    /// When `explicit_refresh` is given it is exchanged instead of the managed refresh
    /// token, and a rejected exchange is never retried.
    pub(crate) async fn id_token(
        &self,
        endpoint: &(impl TokenEndpoint + ?Sized),
        explicit_refresh: Option<&str>,
    ) -> Result<String, JqError> {
        if let Some(t) = self.cached_id().await {
            return Ok(t);
        }

        let _guard = self.refresh_lock.lock().await;
        if let Some(t) = self.cached_id().await {
            return Ok(t);
        }

        let mut attempt = 1;
        loop {
            match self.exchange_once(endpoint, explicit_refresh).await {
                Ok(token) => return Ok(token),
                Err(JqError::TokenExchange { .. }) if attempt < self.retry.max_attempts => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, "refresh token rejected, logging in again");
                    tokio::time::sleep(self.retry.backoff.delay(attempt - 1)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into_fatal()),
            }
        }
    }

    // Caller holds `refresh_lock`.
    async fn exchange_once(
        &self,
        endpoint: &(impl TokenEndpoint + ?Sized),
        explicit_refresh: Option<&str>,
    ) -> Result<String, JqError> {
        let refresh = match explicit_refresh {
            Some(t) => t.to_string(),
            None => self.refresh_token_locked(endpoint, None).await?,
        };

        match endpoint.exchange(&refresh).await {
            Ok(value) => {
                let mut state = self.state.write().await;
                state.id = Some(Token {
                    value: value.clone(),
                    expires_at: Utc::now() + self.lifetimes.id,
                });
                Ok(value)
            }
            Err(JqError::Status { status: 400, url, body })
                if explicit_refresh.is_none() && self.credentials.login_pair().is_some() =>
            {
                self.clear().await;
                Err(JqError::TokenExchange {
                    status: 400,
                    url,
                    body,
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    refresh_token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeResponse {
    id_token: String,
}

impl TokenEndpoint for super::JqClient {
    fn login<'a>(
        &'a self,
        mail_address: &'a str,
        password: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String, JqError>> + Send + 'a>>
    {
        Box::pin(async move {
            let url = self.base_url().join(AUTH_USER_PATH)?;
            let payload = serde_json::json!({
                "mailaddress": mail_address,
                "password": password,
            });
            let req = self.http().post(url).json(&payload);
            let resp = net::ensure_success(self.send_with_retry(req).await?).await?;
            let body: LoginResponse = net::read_json(resp).await?;
            Ok(body.refresh_token)
        })
    }

    fn exchange<'a>(
        &'a self,
        refresh_token: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String, JqError>> + Send + 'a>>
    {
        Box::pin(async move {
            let mut url = self.base_url().join(AUTH_REFRESH_PATH)?;
            url.query_pairs_mut().append_pair("refreshtoken", refresh_token);
            let req = self.http().post(url);
            let resp = net::ensure_success(self.send_with_retry(req).await?).await?;
            let body: ExchangeResponse = net::read_json(resp).await?;
            Ok(body.id_token)
        })
    }
}

impl super::JqClient {
    /// Returns a valid refresh token, logging in with the configured mail address and
    /// password if the cached one has expired.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Config`] if a login is needed but the credentials are missing or
    /// invalid, or an HTTP error if the login request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn refresh_token(&self) -> Result<String, JqError> {
        self.tokens.refresh_token(self, None).await
    }

    /// Like [`refresh_token`](Self::refresh_token), but logs in with the given credentials
    /// instead of the configured ones when a login is needed.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Config`] if a login is needed and either value is empty or the
    /// mail address lacks `@`, or an HTTP error if the login request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password), err))]
    pub async fn refresh_token_with(
        &self,
        mail_address: &str,
        password: &str,
    ) -> Result<String, JqError> {
        self.tokens
            .refresh_token(self, Some((mail_address, password)))
            .await
    }

    /// Returns a valid id token. Cached tokens are reused until they expire, so this is
    /// cheap to call before every request.
    ///
    /// If the refresh token is rejected (`400`) and a mail address and password are
    /// configured, both tokens are discarded and the login/exchange is retried with
    /// exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Status`] if the exchange keeps failing, or any error from
    /// [`refresh_token`](Self::refresh_token).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn id_token(&self) -> Result<String, JqError> {
        self.tokens.id_token(self, None).await
    }

    /// Returns a valid id token, exchanging `refresh_token` if a new one is needed.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Status`] if the exchange fails; it is never retried.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, refresh_token), err))]
    pub async fn id_token_with(&self, refresh_token: &str) -> Result<String, JqError> {
        self.tokens.id_token(self, Some(refresh_token)).await
    }
}
