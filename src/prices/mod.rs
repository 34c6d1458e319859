//! Daily and morning-session stock prices.

mod schema;

use chrono::NaiveDate;

use crate::core::query::Query;
use crate::core::{CalendarDate, JqClient, JqError, RangeFetch, Schema, Table};

/// Output schema of [`DailyQuotesBuilder`].
pub const DAILY_QUOTES_SCHEMA: Schema = schema::DAILY_QUOTES;
/// Output schema of [`prices_am`].
pub const PRICES_AM_SCHEMA: Schema = schema::PRICES_AM;

/// A builder for daily OHLCV quotes (`/prices/daily_quotes`).
///
/// The API needs either a code or a date. A single [`date`](Self::date) takes precedence
/// over a [`from`](Self::from) / [`to`](Self::to) period.
#[derive(Clone)]
pub struct DailyQuotesBuilder {
    client: JqClient,
    code: Option<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DailyQuotesBuilder {
    /// Creates a new `DailyQuotesBuilder`.
    pub fn new(client: &JqClient) -> Self {
        Self {
            client: client.clone(),
            code: None,
            date: None,
            from: None,
            to: None,
        }
    }

    /// Restricts the result to one issue code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Quotes of every issue on one trading day.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// First day of the period (inclusive).
    #[must_use]
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Last day of the period (inclusive).
    #[must_use]
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Fetches the quotes, sorted by `Code` then `Date`.
    ///
    /// Premium accounts get the extended column set with the morning and afternoon
    /// sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(code = ?self.code, date = ?self.date))
    )]
    pub async fn fetch(self) -> Result<Table, JqError> {
        let mut q = Query::new();
        q.opt("code", self.code.as_deref())
            .date_or_period(self.date, self.from, self.to);
        self.client.fetch_table(&DAILY_QUOTES_SCHEMA, q.as_slice()).await
    }
}

/// Morning-session prices of the current day (`/prices/prices_am`), sorted by `Code`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn prices_am(client: &JqClient, code: Option<&str>) -> Result<Table, JqError> {
    let mut q = Query::new();
    q.opt("code", code);
    client.fetch_table(&PRICES_AM_SCHEMA, q.as_slice()).await
}

/// Daily quotes of every issue for each day from `start` to `end` inclusive, fetched
/// `client.max_workers()` days at a time and sorted by `Code` then `Date`.
///
/// Use [`crate::today_in_tokyo`] as `end` for a range that runs up to today.
///
/// # Errors
///
/// Fails on an invalid range, or with the first error of any day's fetch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn price_range(
    client: &JqClient,
    start: impl CalendarDate,
    end: impl CalendarDate,
) -> Result<Table, JqError> {
    let range = RangeFetch::new(start, end)?
        .workers(client.max_workers())
        .sort_keys(DAILY_QUOTES_SCHEMA.sort_keys)
        .base_columns(DAILY_QUOTES_SCHEMA.columns);

    client.id_token().await?;
    range
        .run(|date| DailyQuotesBuilder::new(client).date(date).fetch())
        .await
}
