//! Per-date fan-out over an inclusive calendar range.

use std::future::Future;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use futures::stream::{self, StreamExt};

use crate::core::JqError;
use crate::core::cache::TableCache;
use crate::core::schema::Schema;
use crate::core::table::Table;

/// Anything that names a calendar day.
///
/// Time of day and time zone are discarded: a zoned timestamp maps to the wall-clock
/// date in its own zone.
pub trait CalendarDate {
    /// The calendar date this value names.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidDate`] for text that is not a recognized date.
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError>;
}

impl CalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError> {
        Ok(*self)
    }
}

impl CalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError> {
        Ok(self.date_naive())
    }
}

impl CalendarDate for str {
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError> {
        parse_calendar_date(self)
    }
}

impl CalendarDate for String {
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError> {
        parse_calendar_date(self)
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn to_calendar_date(&self) -> Result<NaiveDate, JqError> {
        (**self).to_calendar_date()
    }
}

const DATE_FORMATS: &[&str] = &["%Y%m%d", "%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

fn parse_calendar_date(s: &str) -> Result<NaiveDate, JqError> {
    let s = s.trim();
    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
    {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| JqError::InvalidDate(s.to_string()))
}

/// Today's date on the exchange's calendar (Asia/Tokyo).
#[must_use]
pub fn today_in_tokyo() -> NaiveDate {
    Utc::now().with_timezone(&chrono_tz::Asia::Tokyo).date_naive()
}

/// Every date from `start` to `end`, both included.
///
/// # Errors
///
/// Returns [`JqError::InvalidDates`] if `start` is after `end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, JqError> {
    if start > end {
        return Err(JqError::InvalidDates);
    }
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// Fetches one table per date in parallel and merges them into one sorted table.
///
/// Dates found in the bound cache are loaded directly and never reach the worker pool;
/// fetched tables are stored in the cache as they complete. The first failing date
/// aborts the whole run and drops the fetches still in flight.
///
/// ```no_run
/// # use jquants_rs::{JqClient, JqError, RangeFetch, Table};
/// # async fn demo(client: &JqClient) -> Result<Table, JqError> {
/// RangeFetch::new("2024-01-04", "2024-01-10")?
///     .workers(client.max_workers())
///     .sort_keys(&["Code", "Date"])
///     .run(|date| {
///         jquants_rs::prices::DailyQuotesBuilder::new(client)
///             .date(date)
///             .fetch()
///     })
///     .await
/// # }
/// ```
pub struct RangeFetch<'a> {
    start: NaiveDate,
    end: NaiveDate,
    workers: usize,
    sort_keys: &'a [&'a str],
    base_columns: &'a [&'a str],
    cache: Option<(&'a dyn TableCache, &'a Schema)>,
}

impl<'a> RangeFetch<'a> {
    /// A range over `start..=end` with five workers, no sort keys and no cache.
    ///
    /// # Errors
    ///
    /// Fails if either bound is not a date, or if `start` is after `end`.
    pub fn new(start: impl CalendarDate, end: impl CalendarDate) -> Result<Self, JqError> {
        let start = start.to_calendar_date()?;
        let end = end.to_calendar_date()?;
        if start > end {
            return Err(JqError::InvalidDates);
        }
        Ok(Self {
            start,
            end,
            workers: 5,
            sort_keys: &[],
            base_columns: &[],
            cache: None,
        })
    }

    /// Maximum number of dates fetched at once.
    #[must_use]
    pub fn workers(mut self, n: usize) -> Self {
        self.workers = n.max(1);
        self
    }

    /// Columns the merged table is sorted by, in priority order.
    #[must_use]
    pub fn sort_keys(mut self, keys: &'a [&'a str]) -> Self {
        self.sort_keys = keys;
        self
    }

    /// Columns placed first in the merged table.
    #[must_use]
    pub fn base_columns(mut self, columns: &'a [&'a str]) -> Self {
        self.base_columns = columns;
        self
    }

    /// Reads and writes per-date tables through `cache`, keyed by `schema.name`.
    #[must_use]
    pub fn cache(mut self, cache: &'a dyn TableCache, schema: &'a Schema) -> Self {
        self.cache = Some((cache, schema));
        self
    }

    /// Inclusive first date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive last date.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Runs `fetch` for every date not served by the cache.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `fetch` or by the cache.
    pub async fn run<F, Fut>(self, fetch: F) -> Result<Table, JqError>
    where
        F: Fn(NaiveDate) -> Fut,
        Fut: Future<Output = Result<Table, JqError>>,
    {
        let dates = date_range(self.start, self.end)?;
        let mut tables = Vec::with_capacity(dates.len());
        let mut pending = Vec::with_capacity(dates.len());

        for date in dates {
            let hit = match self.cache {
                Some((cache, schema)) => cache.get(schema.name, date, schema)?,
                None => None,
            };
            match hit {
                Some(t) => tables.push(t),
                None => pending.push(date),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            start = %self.start,
            end = %self.end,
            cached = tables.len(),
            scheduled = pending.len(),
            workers = self.workers,
            "range fetch"
        );

        let fetch = &fetch;
        let mut in_flight = stream::iter(pending)
            .map(|date| async move { (date, fetch(date).await) })
            .buffer_unordered(self.workers);

        while let Some((date, result)) = in_flight.next().await {
            let table = result?;
            if let Some((cache, schema)) = self.cache {
                cache.put(schema.name, date, &table)?;
            }
            tables.push(table);
        }

        let mut merged = Table::concat(tables, self.base_columns);
        if !merged.is_empty() {
            merged.sort_by_columns(self.sort_keys)?;
        }
        Ok(merged)
    }
}
