//! Market-wide statistics: investor-type trading, margin interest, short selling,
//! trade breakdowns and the trading calendar.

mod schema;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::core::query::Query;
use crate::core::{CalendarDate, JqClient, JqError, RangeFetch, Schema, Table};

/// Output schema of [`TradesSpecBuilder`].
pub const TRADES_SPEC_SCHEMA: Schema = schema::TRADES_SPEC;
/// Output schema of [`WeeklyMarginInterestBuilder`].
pub const WEEKLY_MARGIN_INTEREST_SCHEMA: Schema = schema::WEEKLY_MARGIN_INTEREST;
/// Output schema of [`ShortSellingBuilder`].
pub const SHORT_SELLING_SCHEMA: Schema = schema::SHORT_SELLING;
/// Output schema of [`BreakdownBuilder`].
pub const BREAKDOWN_SCHEMA: Schema = schema::BREAKDOWN;
/// Output schema of [`trading_calendar`].
pub const TRADING_CALENDAR_SCHEMA: Schema = schema::TRADING_CALENDAR;

/// Market sections reported by the investor-type trading statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketSection {
    TSE1st,
    TSE2nd,
    TSEMothers,
    TSEJASDAQ,
    TSEPrime,
    TSEStandard,
    TSEGrowth,
    TokyoNagoya,
}

impl MarketSection {
    /// Every section, in API order.
    pub const ALL: [Self; 8] = [
        Self::TSE1st,
        Self::TSE2nd,
        Self::TSEMothers,
        Self::TSEJASDAQ,
        Self::TSEPrime,
        Self::TSEStandard,
        Self::TSEGrowth,
        Self::TokyoNagoya,
    ];

    /// The value sent as the `section` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TSE1st => "TSE1st",
            Self::TSE2nd => "TSE2nd",
            Self::TSEMothers => "TSEMothers",
            Self::TSEJASDAQ => "TSEJASDAQ",
            Self::TSEPrime => "TSEPrime",
            Self::TSEStandard => "TSEStandard",
            Self::TSEGrowth => "TSEGrowth",
            Self::TokyoNagoya => "TokyoNagoya",
        }
    }
}

impl fmt::Display for MarketSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketSection {
    type Err = JqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| JqError::InvalidParams(format!("unknown market section: {s}")))
    }
}

/// Day kinds of the trading calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayDivision {
    /// `0`: exchange closed.
    NonBusinessDay,
    /// `1`: regular business day.
    BusinessDay,
    /// `2`: half-day session on the Tokyo Stock Exchange.
    HalfDaySession,
    /// `3`: exchange holiday with holiday trading in derivatives.
    HolidayTrading,
}

impl HolidayDivision {
    /// The value sent as the `holidaydivision` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonBusinessDay => "0",
            Self::BusinessDay => "1",
            Self::HalfDaySession => "2",
            Self::HolidayTrading => "3",
        }
    }
}

impl FromStr for HolidayDivision {
    type Err = JqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::NonBusinessDay),
            "1" => Ok(Self::BusinessDay),
            "2" => Ok(Self::HalfDaySession),
            "3" => Ok(Self::HolidayTrading),
            other => Err(JqError::InvalidParams(format!("unknown holiday division: {other}"))),
        }
    }
}

/// A builder for weekly trading by type of investors (`/markets/trades_spec`).
#[derive(Clone)]
pub struct TradesSpecBuilder {
    client: JqClient,
    section: Option<MarketSection>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl TradesSpecBuilder {
    /// Creates a new `TradesSpecBuilder`.
    pub fn new(client: &JqClient) -> Self {
        Self {
            client: client.clone(),
            section: None,
            from: None,
            to: None,
        }
    }

    /// Restricts the result to one market section.
    #[must_use]
    pub fn section(mut self, section: MarketSection) -> Self {
        self.section = Some(section);
        self
    }

    /// Earliest publication date.
    #[must_use]
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Latest publication date.
    #[must_use]
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Fetches the statistics, sorted by `PublishedDate` then `Section`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(section = ?self.section))
    )]
    pub async fn fetch(self) -> Result<Table, JqError> {
        let mut q = Query::new();
        q.opt("section", self.section.map(MarketSection::as_str))
            .date("from", self.from)
            .date("to", self.to);
        self.client.fetch_table(&TRADES_SPEC_SCHEMA, q.as_slice()).await
    }
}

/// A builder for weekly margin trading outstanding (`/markets/weekly_margin_interest`).
#[derive(Clone)]
pub struct WeeklyMarginInterestBuilder {
    client: JqClient,
    code: Option<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl WeeklyMarginInterestBuilder {
    /// Creates a new `WeeklyMarginInterestBuilder`.
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

    /// Overrides `from` / `to`.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// First week date of the period (inclusive).
    #[must_use]
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Last week date of the period (inclusive).
    #[must_use]
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Fetches the balances, sorted by `Date` then `Code`.
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
        self.client
            .fetch_table(&WEEKLY_MARGIN_INTEREST_SCHEMA, q.as_slice())
            .await
    }
}

/// A builder for short-selling value by 33-sector (`/markets/short_selling`).
#[derive(Clone)]
pub struct ShortSellingBuilder {
    client: JqClient,
    sector33code: Option<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl ShortSellingBuilder {
    /// Creates a new `ShortSellingBuilder`.
    pub fn new(client: &JqClient) -> Self {
        Self {
            client: client.clone(),
            sector33code: None,
            date: None,
            from: None,
            to: None,
        }
    }

    /// Restricts the result to one 33-sector code (e.g. `"0050"`).
    #[must_use]
    pub fn sector33code(mut self, code: impl Into<String>) -> Self {
        self.sector33code = Some(code.into());
        self
    }

    /// Overrides `from` / `to`.
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

    /// Fetches the values, sorted by `Date` then `Sector33Code`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(sector = ?self.sector33code, date = ?self.date))
    )]
    pub async fn fetch(self) -> Result<Table, JqError> {
        let mut q = Query::new();
        q.opt("sector33code", self.sector33code.as_deref())
            .date_or_period(self.date, self.from, self.to);
        self.client.fetch_table(&SHORT_SELLING_SCHEMA, q.as_slice()).await
    }
}

/// A builder for the trade breakdown by issue (`/markets/breakdown`).
#[derive(Clone)]
pub struct BreakdownBuilder {
    client: JqClient,
    code: Option<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl BreakdownBuilder {
    /// Creates a new `BreakdownBuilder`.
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

    /// Overrides `from` / `to`.
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

    /// Fetches the breakdown, sorted by `Code` then `Date`.
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
        self.client.fetch_table(&BREAKDOWN_SCHEMA, q.as_slice()).await
    }
}

/// The exchange calendar (`/markets/trading_calendar`), sorted by `Date`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn trading_calendar(
    client: &JqClient,
    holiday_division: Option<HolidayDivision>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Table, JqError> {
    let mut q = Query::new();
    q.opt("holidaydivision", holiday_division.map(HolidayDivision::as_str))
        .date("from", from)
        .date("to", to);
    client.fetch_table(&TRADING_CALENDAR_SCHEMA, q.as_slice()).await
}

/// Short-selling values for each day from `start` to `end` inclusive, sorted by
/// `Date` then `Sector33Code`.
///
/// # Errors
///
/// Fails on an invalid range, or with the first error of any day's fetch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn short_selling_range(
    client: &JqClient,
    start: impl CalendarDate,
    end: impl CalendarDate,
) -> Result<Table, JqError> {
    let range = RangeFetch::new(start, end)?
        .workers(client.max_workers())
        .sort_keys(SHORT_SELLING_SCHEMA.sort_keys)
        .base_columns(SHORT_SELLING_SCHEMA.columns);

    client.id_token().await?;
    range
        .run(|date| ShortSellingBuilder::new(client).date(date).fetch())
        .await
}

/// Trade breakdowns of every issue for each day from `start` to `end` inclusive,
/// sorted by `Code` then `Date`.
///
/// # Errors
///
/// Fails on an invalid range, or with the first error of any day's fetch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn breakdown_range(
    client: &JqClient,
    start: impl CalendarDate,
    end: impl CalendarDate,
) -> Result<Table, JqError> {
    let range = RangeFetch::new(start, end)?
        .workers(client.max_workers())
        .sort_keys(BREAKDOWN_SCHEMA.sort_keys)
        .base_columns(BREAKDOWN_SCHEMA.columns);

    client.id_token().await?;
    range
        .run(|date| BreakdownBuilder::new(client).date(date).fetch())
        .await
}
