use crate::common::{self, setup_server};
use httpmock::Method::GET;
use jquants_rs::JqError;
use jquants_rs::prices::DailyQuotesBuilder;

#[tokio::test]
async fn status_error_embeds_the_body_and_drops_the_query() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let quotes = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/prices/daily_quotes")
            .query_param("code", "7203");
        then.status(403)
            .header("content-type", "application/json")
            .body(r#"{"message":"Your subscription covers the following dates"}"#);
    });

    let err = DailyQuotesBuilder::new(&client).code("7203").fetch().await.unwrap_err();

    quotes.assert_hits(1);
    match err {
        JqError::Status { status, url, body } => {
            assert_eq!(status, 403);
            assert!(url.ends_with("/v1/prices/daily_quotes"), "url: {url}");
            assert!(body.contains("subscription"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn transient_statuses_are_retried() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let quotes = server.mock(|when, then| {
        when.method(GET).path("/v1/prices/daily_quotes");
        then.status(503).body("maintenance");
    });

    let err = DailyQuotesBuilder::new(&client).code("7203").fetch().await.unwrap_err();

    assert!(matches!(err, JqError::Status { status: 503, .. }), "got {err:?}");
    quotes.assert_hits(3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let quotes = server.mock(|when, then| {
        when.method(GET).path("/v1/prices/daily_quotes");
        then.status(400).body(r#"{"message":"This API requires at least 1 parameter"}"#);
    });

    let err = DailyQuotesBuilder::new(&client).fetch().await.unwrap_err();

    assert!(matches!(err, JqError::Status { status: 400, .. }), "got {err:?}");
    quotes.assert_hits(1);
}

#[tokio::test]
async fn error_without_body_has_empty_body_text() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let quotes = server.mock(|when, then| {
        when.method(GET).path("/v1/prices/daily_quotes");
        then.status(404);
    });

    let err = DailyQuotesBuilder::new(&client).code("0000").fetch().await.unwrap_err();

    quotes.assert_hits(1);
    match err {
        JqError::Status { status, body, .. } => {
            assert_eq!(status, 404);
            assert!(body.is_empty(), "body: {body:?}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}
