use crate::common::{self, setup_server};
use chrono::NaiveDate;
use jquants_rs::Cell;
use jquants_rs::markets::{self, HolidayDivision, MarketSection, TradesSpecBuilder};
use serde_json::json;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn trades_spec_sends_section_and_period() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let trades = common::mock_get(
        &server,
        "markets/trades_spec",
        &[("section", "TSEPrime"), ("from", "20240101"), ("to", "20240131")],
        &json!({ "trades_spec": [
            { "PublishedDate": "2024-01-25", "StartDate": "2024-01-15", "EndDate": "2024-01-19", "Section": "TSEPrime" },
            { "PublishedDate": "2024-01-11", "StartDate": "2024-01-04", "EndDate": "2024-01-05", "Section": "TSEPrime" }
        ] }),
    );

    let table = TradesSpecBuilder::new(&client)
        .section(MarketSection::TSEPrime)
        .from(ymd(2024, 1, 1))
        .to(ymd(2024, 1, 31))
        .fetch()
        .await
        .unwrap();

    trades.assert();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "PublishedDate"), Some(&Cell::Date(ymd(2024, 1, 11))));
}

#[tokio::test]
async fn trading_calendar_filters_by_division() {
    let server = setup_server();
    let (client, _login, _exchange) = common::authed(&server);
    let cal = common::mock_get(
        &server,
        "markets/trading_calendar",
        &[("holidaydivision", "0"), ("from", "20240101"), ("to", "20240105")],
        &json!({ "trading_calendar": [
            { "Date": "2024-01-03", "HolidayDivision": "0" },
            { "Date": "2024-01-01", "HolidayDivision": "0" },
            { "Date": "2024-01-02", "HolidayDivision": "0" }
        ] }),
    );

    let table = markets::trading_calendar(
        &client,
        Some(HolidayDivision::NonBusinessDay),
        Some(ymd(2024, 1, 1)),
        Some(ymd(2024, 1, 5)),
    )
    .await
    .unwrap();

    cal.assert();
    let dates: Vec<_> = table.column("Date").unwrap().into_iter().cloned().collect();
    assert_eq!(
        dates,
        [1, 2, 3].map(|d| Cell::Date(ymd(2024, 1, d)))
    );
}
