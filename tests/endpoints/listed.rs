use crate::common::{self, setup_server};
use chrono::NaiveDate;
use jquants_rs::{Cell, listed};
use serde_json::json;

#[tokio::test]
async fn list_joins_english_names() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let info = common::mock_get(
        &server,
        "listed/info",
        &[("date", "20240104")],
        &json!({ "info": [
            {
                "Date": "2024-01-04", "Code": "72030", "CompanyName": "トヨタ自動車",
                "Sector17Code": "6", "Sector33Code": "3700", "MarketCode": "0111"
            },
            {
                "Date": "2024-01-04", "Code": "13010", "CompanyName": "極洋",
                "Sector17Code": "1", "Sector33Code": "0050", "MarketCode": "111"
            }
        ] }),
    );

    let table = listed::list(&client, None, NaiveDate::from_ymd_opt(2024, 1, 4))
        .await
        .unwrap();

    info.assert();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "Code"), Some(&Cell::Str("13010".into())));
    assert_eq!(
        table.get(0, "Sector17CodeNameEnglish"),
        Some(&Cell::Str("FOODS".into()))
    );
    assert_eq!(
        table.get(0, "Sector33CodeNameEnglish"),
        Some(&Cell::Str("Fishery, Agriculture & Forestry".into()))
    );
    assert_eq!(table.get(0, "MarketCodeNameEnglish"), Some(&Cell::Str("Prime".into())));

    // "0111" is not a known market code
    assert_eq!(
        table.get(1, "Sector17CodeNameEnglish"),
        Some(&Cell::Str("AUTOMOBILES & TRANSPORTATION EQUIPMENT".into()))
    );
    assert_eq!(table.get(1, "MarketCodeNameEnglish"), Some(&Cell::Null));
}

#[tokio::test]
async fn list_of_nothing_still_has_the_joined_columns() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    common::mock_get(&server, "listed/info", &[("code", "0000")], &json!({ "info": [] }));

    let table = listed::list(&client, Some("0000"), None).await.unwrap();

    assert!(table.is_empty());
    for c in [
        "Sector17CodeNameEnglish",
        "Sector33CodeNameEnglish",
        "MarketCodeNameEnglish",
    ] {
        assert!(table.column_index(c).is_some(), "missing {c}");
    }
}

#[tokio::test]
async fn sections_are_sorted_by_code() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let sections = common::mock_get(
        &server,
        "listed/sections",
        &[],
        &json!({ "sections": [
            { "SectionCode": "0102", "SectionName": "TSE2nd" },
            { "SectionCode": "0101", "SectionName": "TSE1st" }
        ] }),
    );

    let table = listed::sections(&client).await.unwrap();

    sections.assert();
    assert_eq!(table.columns(), listed::SECTIONS_SCHEMA.columns);
    assert_eq!(table.get(0, "SectionCode"), Some(&Cell::Str("0101".into())));
    assert_eq!(table.get(1, "SectionName"), Some(&Cell::Str("TSE2nd".into())));
}

#[tokio::test]
async fn no_sections_still_has_columns() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    common::mock_get(&server, "listed/sections", &[], &json!({ "sections": [] }));

    let table = listed::sections(&client).await.unwrap();

    assert!(table.is_empty());
    assert_eq!(table.columns(), ["SectionCode", "SectionName"]);
}
