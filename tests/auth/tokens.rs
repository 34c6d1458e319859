use crate::common::{self, ID, MAIL, PASSWORD, REFRESH, setup_server};
use httpmock::Method::POST;
use jquants_rs::{JqError, TokenLifetimes};

#[tokio::test]
async fn tokens_are_cached_between_calls() {
    let server = setup_server();
    let (client, login, exchange) = common::authed(&server);

    assert_eq!(client.id_token().await.unwrap(), ID);
    assert_eq!(client.id_token().await.unwrap(), ID);
    assert_eq!(client.refresh_token().await.unwrap(), REFRESH);

    login.assert_hits(1);
    exchange.assert_hits(1);
}

#[tokio::test]
async fn clones_share_one_refresh() {
    let server = setup_server();
    let (client, login, exchange) = common::authed(&server);

    let calls = (0..4).map(|_| {
        let c = client.clone();
        async move { c.id_token().await }
    });
    for token in futures::future::join_all(calls).await {
        assert_eq!(token.unwrap(), ID);
    }

    login.assert_hits(1);
    exchange.assert_hits(1);
}

#[tokio::test]
async fn supplied_refresh_token_skips_login() {
    let server = setup_server();
    let login = common::mock_login(&server);
    let exchange = common::mock_exchange(&server);

    let client = common::builder(&server).refresh_token(REFRESH).build().unwrap();
    assert_eq!(client.id_token().await.unwrap(), ID);

    login.assert_hits(0);
    exchange.assert_hits(1);
}

#[tokio::test]
async fn expired_id_token_is_exchanged_again() {
    let server = setup_server();
    let login = common::mock_login(&server);
    let exchange = common::mock_exchange(&server);

    let client = common::builder(&server)
        .mail_address(MAIL)
        .password(PASSWORD)
        .token_lifetimes(TokenLifetimes {
            refresh: chrono::Duration::hours(1),
            id: chrono::Duration::zero(),
        })
        .build()
        .unwrap();

    client.id_token().await.unwrap();
    client.id_token().await.unwrap();

    login.assert_hits(1);
    exchange.assert_hits(2);
}

#[tokio::test]
async fn refresh_token_with_logs_in_with_the_given_credentials() {
    let server = setup_server();
    let login = common::mock_login(&server);

    let client = common::builder(&server)
        .mail_address("someone-else@example.com")
        .password("other")
        .build()
        .unwrap();

    let token = client.refresh_token_with(MAIL, PASSWORD).await.unwrap();
    assert_eq!(token, REFRESH);
    login.assert_hits(1);
}

#[tokio::test]
async fn refresh_token_with_rejects_a_mail_without_at_sign() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(POST).path("/v1/token/auth_user");
        then.status(200).body(r#"{"refreshToken":"never"}"#);
    });

    let client = common::login_client(&server);
    let err = client.refresh_token_with("not-a-mail", "pw").await.unwrap_err();

    assert!(matches!(err, JqError::Config(_)), "got {err:?}");
    login.assert_hits(0);
}

#[tokio::test]
async fn failed_login_surfaces_the_status() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(POST).path("/v1/token/auth_user");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"invalid mailaddress or password"}"#);
    });
    let exchange = common::mock_exchange(&server);

    let client = common::login_client(&server);
    match client.id_token().await.unwrap_err() {
        JqError::Status { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid mailaddress"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
    login.assert_hits(1);
    exchange.assert_hits(0);
}
