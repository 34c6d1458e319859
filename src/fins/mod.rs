//! Financial statements, statement details, dividends and the announcement schedule.

mod schema;

use chrono::NaiveDate;

use crate::core::query::Query;
use crate::core::{CalendarDate, JqClient, JqError, RangeFetch, Schema, Table, TableCache};

/// Output schema of [`statements`].
pub const STATEMENTS_SCHEMA: Schema = schema::STATEMENTS;
/// Output schema of [`fs_details`].
pub const FS_DETAILS_SCHEMA: Schema = schema::FS_DETAILS;
/// Output schema of [`DividendBuilder`].
pub const DIVIDEND_SCHEMA: Schema = schema::DIVIDEND;
/// Output schema of [`announcement`].
pub const ANNOUNCEMENT_SCHEMA: Schema = schema::ANNOUNCEMENT;

/// Summary financial statements (`/fins/statements`) for an issue code or a disclosure
/// date, sorted by `DisclosedDate`, `DisclosedTime` and `DisclosureNumber`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn statements(
    client: &JqClient,
    code: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<Table, JqError> {
    let mut q = Query::new();
    q.opt("code", code).date("date", date);
    client.fetch_table(&STATEMENTS_SCHEMA, q.as_slice()).await
}

/// Full financial statement line items (`/fins/fs_details`).
///
/// `FinancialStatement` holds the per-filing map of items and is kept as a
/// [`crate::Cell::Json`] value.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fs_details(
    client: &JqClient,
    code: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<Table, JqError> {
    let mut q = Query::new();
    q.opt("code", code).date("date", date);
    client.fetch_table(&FS_DETAILS_SCHEMA, q.as_slice()).await
}

/// Announcement schedule of upcoming results (`/fins/announcement`), sorted by `Date`
/// then `Code`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn announcement(client: &JqClient) -> Result<Table, JqError> {
    client.fetch_table(&ANNOUNCEMENT_SCHEMA, &[]).await
}

/// A builder for cash dividend announcements (`/fins/dividend`).
#[derive(Clone)]
pub struct DividendBuilder {
    client: JqClient,
    code: Option<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DividendBuilder {
    /// Creates a new `DividendBuilder`.
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

    /// Announcements made on this date. Overrides `from` / `to`.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// First announcement date of the period (inclusive).
    #[must_use]
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Last announcement date of the period (inclusive).
    #[must_use]
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Fetches the announcements, sorted by `Code`, `AnnouncementDate` and
    /// `AnnouncementTime`.
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
        self.client.fetch_table(&DIVIDEND_SCHEMA, q.as_slice()).await
    }
}

/// Statements disclosed on each day from `start` to `end` inclusive.
///
/// With a `cache`, days already stored there are read back instead of fetched, and
/// every fetched day is stored under the `fins_statements` dataset name.
///
/// # Errors
///
/// Fails on an invalid range, a cache I/O error, or the first failing day's fetch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn statements_range(
    client: &JqClient,
    start: impl CalendarDate,
    end: impl CalendarDate,
    cache: Option<&dyn TableCache>,
) -> Result<Table, JqError> {
    let range = disclosure_range(client, &STATEMENTS_SCHEMA, start, end, cache)?;
    client.id_token().await?;
    range
        .run(|date| statements(client, None, Some(date)))
        .await
}

/// Statement details disclosed on each day from `start` to `end` inclusive, cached
/// like [`statements_range`] under the `fins_fs_details` dataset name.
///
/// # Errors
///
/// Fails on an invalid range, a cache I/O error, or the first failing day's fetch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn fs_details_range(
    client: &JqClient,
    start: impl CalendarDate,
    end: impl CalendarDate,
    cache: Option<&dyn TableCache>,
) -> Result<Table, JqError> {
    let range = disclosure_range(client, &FS_DETAILS_SCHEMA, start, end, cache)?;
    client.id_token().await?;
    range
        .run(|date| fs_details(client, None, Some(date)))
        .await
}

fn disclosure_range<'a>(
    client: &JqClient,
    schema: &'a Schema,
    start: impl CalendarDate,
    end: impl CalendarDate,
    cache: Option<&'a dyn TableCache>,
) -> Result<RangeFetch<'a>, JqError> {
    let range = RangeFetch::new(start, end)?
        .workers(client.max_workers())
        .sort_keys(schema.sort_keys)
        .base_columns(schema.columns);
    Ok(match cache {
        Some(c) => range.cache(c, schema),
        None => range,
    })
}
