use crate::common::{self, setup_server};
use httpmock::Method::POST;
use jquants_rs::JqError;

#[tokio::test]
async fn rejected_exchange_logs_in_again_until_attempts_run_out() {
    let server = setup_server();
    let login = common::mock_login(&server);
    let exchange = server.mock(|when, then| {
        when.method(POST).path("/v1/token/auth_refresh");
        then.status(400)
            .header("content-type", "application/json")
            .body(r#"{"message":"'refreshtoken' is invalid."}"#);
    });

    let client = common::login_client(&server);
    let err = client.id_token().await.unwrap_err();

    match err {
        JqError::Status { status, url, body } => {
            assert_eq!(status, 400);
            assert!(url.ends_with("/v1/token/auth_refresh"), "url: {url}");
            assert!(!url.contains("refreshtoken"), "query leaked into {url}");
            assert!(body.contains("is invalid"));
        }
        other => panic!("expected Status, got {other:?}"),
    }

    login.assert_hits(3);
    exchange.assert_hits(3);
}

#[tokio::test]
async fn explicit_refresh_token_is_never_retried() {
    let server = setup_server();
    let login = common::mock_login(&server);
    let exchange = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/token/auth_refresh")
            .query_param("refreshtoken", "stale");
        then.status(400).body("bad token");
    });

    let client = common::login_client(&server);
    let err = client.id_token_with("stale").await.unwrap_err();

    assert!(matches!(err, JqError::Status { status: 400, .. }), "got {err:?}");
    exchange.assert_hits(1);
    login.assert_hits(0);
}

#[tokio::test]
async fn rejected_exchange_without_login_credentials_fails_once() {
    let server = setup_server();
    let exchange = server.mock(|when, then| {
        when.method(POST).path("/v1/token/auth_refresh");
        then.status(400).body("expired");
    });

    let client = common::builder(&server).refresh_token("old").build().unwrap();
    let err = client.id_token().await.unwrap_err();

    assert!(matches!(err, JqError::Status { status: 400, .. }), "got {err:?}");
    exchange.assert_hits(1);
}
