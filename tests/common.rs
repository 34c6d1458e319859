#![allow(dead_code)]

use httpmock::{Method::GET, Method::POST, Mock, MockServer};
use jquants_rs::{AuthRetryConfig, Backoff, ConfigLoader, JqClient, JqClientBuilder, RetryConfig};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const MAIL: &str = "user@example.com";
pub const PASSWORD: &str = "hunter2";
pub const REFRESH: &str = "rt-1";
pub const ID: &str = "id-1";

pub fn setup_server() -> MockServer {
    #[cfg(feature = "tracing-subscriber")]
    init_tracing();
    MockServer::start()
}

/// Routes `tracing` output to the test harness; filter with `RUST_LOG`.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&server.url("/v1/")).unwrap()
}

/// A builder pointed at the mock server with no ambient config and millisecond backoffs.
pub fn builder(server: &MockServer) -> JqClientBuilder {
    JqClient::builder()
        .config_loader(ConfigLoader::empty())
        .base_url(base_url(server))
        .retry_config(RetryConfig {
            backoff: Backoff::Fixed(Duration::from_millis(1)),
            ..RetryConfig::default()
        })
        .auth_retry(AuthRetryConfig {
            max_attempts: 3,
            backoff: Backoff::Fixed(Duration::from_millis(1)),
        })
}

pub fn login_client(server: &MockServer) -> JqClient {
    builder(server).mail_address(MAIL).password(PASSWORD).build().unwrap()
}

pub fn mock_login(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/token/auth_user")
            .json_body(serde_json::json!({ "mailaddress": MAIL, "password": PASSWORD }));
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(r#"{{"refreshToken":"{REFRESH}"}}"#));
    })
}

pub fn mock_exchange(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/token/auth_refresh")
            .query_param("refreshtoken", REFRESH);
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(r#"{{"idToken":"{ID}"}}"#));
    })
}

/// Login and exchange mocks plus a client that will use them.
pub fn authed(server: &MockServer) -> (JqClient, Mock<'_>, Mock<'_>) {
    let login = mock_login(server);
    let exchange = mock_exchange(server);
    (login_client(server), login, exchange)
}

/// A GET of `path` (under `/v1/`) with the given query, answering `body`.
pub fn mock_get<'a>(
    server: &'a MockServer,
    path: &str,
    query: &[(&str, &str)],
    body: &Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        let when = when
            .method(GET)
            .path(format!("/v1/{path}"))
            .header("authorization", format!("Bearer {ID}"));
        let _ = query.iter().fold(when, |w, (k, v)| w.query_param(*k, *v));
        then.status(200)
            .header("content-type", "application/json")
            .body(body.to_string());
    })
}
