use crate::common::{self, setup_server};
use chrono::NaiveDate;
use httpmock::Method::GET;
use jquants_rs::prices::{self, DAILY_QUOTES_SCHEMA};
use jquants_rs::{Cell, JqError};
use serde_json::json;

const LEAP_WEEK: [&str; 5] = ["20240227", "20240228", "20240229", "20240301", "20240302"];

fn quotes(day: &str) -> serde_json::Value {
    let date = format!("{}-{}-{}", &day[..4], &day[4..6], &day[6..]);
    json!({ "daily_quotes": [
        { "Date": date, "Code": "72030", "Close": 2500 },
        { "Date": date, "Code": "13010", "Close": 3900 }
    ] })
}

#[tokio::test]
async fn price_range_fetches_every_calendar_day() {
    let server = setup_server();
    let (client, login, exchange) = common::authed(&server);
    let mocks: Vec<_> = LEAP_WEEK
        .iter()
        .map(|d| common::mock_get(&server, "prices/daily_quotes", &[("date", d)], &quotes(d)))
        .collect();

    let table = prices::price_range(&client, "2024-02-27", "2024/03/02")
        .await
        .unwrap();

    for m in &mocks {
        m.assert_hits(1);
    }
    login.assert_hits(1);
    exchange.assert_hits(1);

    assert_eq!(table.len(), 10);
    assert_eq!(table.columns(), DAILY_QUOTES_SCHEMA.columns);
    // Code first, then Date
    assert_eq!(table.get(0, "Code"), Some(&Cell::Str("13010".into())));
    assert_eq!(
        table.get(2, "Date"),
        Some(&Cell::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()))
    );
    assert_eq!(table.get(5, "Code"), Some(&Cell::Str("72030".into())));
}

#[tokio::test]
async fn days_without_quotes_contribute_nothing() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    common::mock_get(
        &server,
        "prices/daily_quotes",
        &[("date", "20240106")],
        &json!({ "daily_quotes": [] }),
    );
    common::mock_get(
        &server,
        "prices/daily_quotes",
        &[("date", "20240107")],
        &json!({ "daily_quotes": [] }),
    );

    let table = prices::price_range(&client, "20240106", "20240107").await.unwrap();

    assert!(table.is_empty());
    assert_eq!(table.columns(), DAILY_QUOTES_SCHEMA.columns);
}

#[tokio::test]
async fn one_failing_day_fails_the_range() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    common::mock_get(&server, "prices/daily_quotes", &[("date", "20240104")], &quotes("20240104"));
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/prices/daily_quotes")
            .query_param("date", "20240105");
        then.status(404).body(r#"{"message":"not found"}"#);
    });

    let err = prices::price_range(&client, "20240104", "20240105").await.unwrap_err();
    assert!(matches!(err, JqError::Status { status: 404, .. }), "got {err:?}");
}

#[tokio::test]
async fn reversed_range_is_rejected_before_any_request() {
    let server = setup_server();
    let (client, login, _exchange) = common::authed(&server);

    let err = prices::price_range(&client, "2024-01-10", "2024-01-04").await.unwrap_err();

    assert!(matches!(err, JqError::InvalidDates), "got {err:?}");
    login.assert_hits(0);
}

#[tokio::test]
async fn unparseable_bound_is_rejected() {
    let server = setup_server();
    let (client, login, _exchange) = common::authed(&server);

    let err = prices::price_range(&client, "next tuesday", "2024-01-04").await.unwrap_err();

    assert!(matches!(err, JqError::InvalidDate(_)), "got {err:?}");
    login.assert_hits(0);
}
