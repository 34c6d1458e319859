use crate::common::{self, setup_server};
use chrono::NaiveDate;
use jquants_rs::fins::{self, STATEMENTS_SCHEMA};
use jquants_rs::{Cell, CsvCache, TableCache};
use serde_json::json;

fn statement(date: &str, code: &str, number: &str) -> serde_json::Value {
    json!({
        "DisclosedDate": date,
        "DisclosedTime": "15:00:00",
        "LocalCode": code,
        "DisclosureNumber": number,
        "TypeOfDocument": "FYFinancialStatements_Consolidated_JP",
        "NetSales": "45095325000000"
    })
}

#[tokio::test]
async fn statements_range_fills_and_then_reads_the_cache() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let dir = tempfile::tempdir().unwrap();
    let cache = CsvCache::new(dir.path());

    let day1 = common::mock_get(
        &server,
        "fins/statements",
        &[("date", "20240508")],
        &json!({ "statements": [statement("2024-05-08", "72030", "20240508400001")] }),
    );
    let day2 = common::mock_get(
        &server,
        "fins/statements",
        &[("date", "20240509")],
        &json!({ "statements": [] }),
    );

    let first = fins::statements_range(&client, "2024-05-08", "2024-05-09", Some(&cache))
        .await
        .unwrap();
    assert_eq!(first.len(), 1);

    let may8 = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
    let path = cache.path_for("fins_statements", may8);
    assert!(path.is_file(), "{} not written", path.display());
    assert!(path.starts_with(dir.path().join("2024")));

    let second = fins::statements_range(&client, "2024-05-08", "2024-05-09", Some(&cache))
        .await
        .unwrap();

    day1.assert_hits(1);
    day2.assert_hits(1);
    assert_eq!(second.columns(), first.columns());
    assert_eq!(second.rows(), first.rows());
    assert_eq!(second.get(0, "DisclosedDate"), Some(&Cell::Date(may8)));
}

#[tokio::test]
async fn a_prefilled_cache_entry_replaces_the_request() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let dir = tempfile::tempdir().unwrap();
    let cache = CsvCache::new(dir.path());

    let may8 = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
    let stored = STATEMENTS_SCHEMA
        .to_table(vec![
            statement("2024-05-08", "99840", "20240508500001")
                .as_object()
                .unwrap()
                .clone(),
        ])
        .unwrap();
    cache.put("fins_statements", may8, &stored).unwrap();

    let network = common::mock_get(
        &server,
        "fins/statements",
        &[("date", "20240508")],
        &json!({ "statements": [] }),
    );

    let table = fins::statements_range(&client, may8, may8, Some(&cache)).await.unwrap();

    network.assert_hits(0);
    assert_eq!(table.get(0, "LocalCode"), Some(&Cell::Str("99840".into())));
}
