use crate::common::{self, ID, setup_server};
use httpmock::Method::GET;
use jquants_rs::listed::ListedInfoBuilder;
use jquants_rs::{Cell, JqError};
use serde_json::json;

fn issue(code: &str) -> serde_json::Value {
    json!({ "Date": "2024-01-04", "Code": code, "CompanyName": format!("Company {code}") })
}

#[tokio::test]
async fn follows_pagination_keys_until_exhausted() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/listed/info")
            .query_param_missing("pagination_key");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({ "info": [issue("86970"), issue("13010")], "pagination_key": "A" }).to_string());
    });
    let second = common::mock_get(
        &server,
        "listed/info",
        &[("pagination_key", "A")],
        &json!({ "info": [issue("72030")], "pagination_key": "B" }),
    );
    let third = common::mock_get(
        &server,
        "listed/info",
        &[("pagination_key", "B")],
        &json!({ "info": [issue("99840")] }),
    );

    let table = ListedInfoBuilder::new(&client).fetch().await.unwrap();

    first.assert();
    second.assert();
    third.assert();
    let codes: Vec<_> = table.column("Code").unwrap().into_iter().cloned().collect();
    assert_eq!(
        codes,
        ["13010", "72030", "86970", "99840"].map(|c| Cell::Str(c.into()))
    );
}

#[tokio::test]
async fn empty_pagination_key_ends_the_loop() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);

    let only = common::mock_get(
        &server,
        "listed/info",
        &[("code", "7203")],
        &json!({ "info": [issue("72030")], "pagination_key": "" }),
    );

    let table = ListedInfoBuilder::new(&client).code("7203").fetch().await.unwrap();
    only.assert_hits(1);
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn repeated_pagination_key_is_an_error() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/listed/info")
            .query_param_missing("pagination_key");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({ "info": [issue("72030")], "pagination_key": "A" }).to_string());
    });
    let looping = common::mock_get(
        &server,
        "listed/info",
        &[("pagination_key", "A")],
        &json!({ "info": [issue("72030")], "pagination_key": "A" }),
    );

    let err = ListedInfoBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, JqError::Data(_)), "got {err:?}");
    looping.assert_hits(1);
}

#[tokio::test]
async fn requests_carry_the_id_token() {
    let server = setup_server();
    let (client, login, exchange) = common::authed(&server);

    let info = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/listed/info")
            .header("authorization", format!("Bearer {ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({ "info": [] }).to_string());
    });

    ListedInfoBuilder::new(&client).fetch().await.unwrap();
    ListedInfoBuilder::new(&client).fetch().await.unwrap();

    info.assert_hits(2);
    login.assert_hits(1);
    exchange.assert_hits(1);
}
